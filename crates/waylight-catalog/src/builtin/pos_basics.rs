use waylight_core::Placement;

use crate::definition::{Category, StepAction, TourDefinition, TourId, TourStep};

pub(crate) fn tour() -> TourDefinition {
    TourDefinition::new(
        TourId::PosBasics,
        "POS: Your First Sale",
        "Learn the full sale flow: search products, build the cart, apply discounts, and settle with any payment method.",
        Category::Operations,
    )
    .minutes(10)
    .icon("shopping-cart")
    .prerequisites([TourId::Welcome])
    .tags(["pos", "sale", "checkout", "payment", "change", "cart"])
    .steps(vec![
        TourStep::new(
            "pos-intro",
            "Let's make a sale!",
            "This tour covers the whole flow, from finding products to printing the receipt.",
        )
        .placement(Placement::Center)
        .route("/pos"),
        TourStep::new(
            "pos-session",
            "Check the Drawer Status",
            "The indicator in the corner shows whether the cash drawer is open (green) or closed (grey). You can only sell with an open drawer.",
        )
        .target("cash-indicator")
        .placement(Placement::Bottom)
        .route("/pos"),
        TourStep::new(
            "pos-open-drawer",
            "Opening the Drawer",
            "If the drawer is closed, click \"Open Drawer\" and enter the starting float.",
        )
        .target("open-drawer-button")
        .placement(Placement::Bottom)
        .action(StepAction::Click)
        .skippable()
        .route("/pos"),
        TourStep::new(
            "pos-search",
            "Search Products (F2)",
            "Type a product name, barcode, or internal code. Search is instant and tolerates typos. Try typing \"rice\"!",
        )
        .target("product-search")
        .placement(Placement::Bottom)
        .action(StepAction::Type)
        .action_data("rice")
        .hotkey("F2")
        .route("/pos"),
        TourStep::new(
            "pos-add",
            "Add to Cart",
            "Click the product or press Enter to add it. Quantity starts at one; use * followed by a number for multiples.",
        )
        .target("product-search")
        .placement(Placement::Bottom)
        .action(StepAction::Click)
        .route("/pos"),
        TourStep::new(
            "pos-cart",
            "The Cart",
            "Everything in the current sale: name, quantity, unit price, and line subtotal. The counter at the top shows the item count.",
        )
        .target("cart-items")
        .placement(Placement::Left)
        .route("/pos"),
        TourStep::new(
            "pos-totals",
            "Totals Panel",
            "Watch the subtotal, any discount, and the final total update in real time.",
        )
        .target("cart-totals")
        .placement(Placement::Left)
        .route("/pos"),
        TourStep::new(
            "pos-finalize",
            "Finalize the Sale (F10)",
            "With the cart ready, press F10 or pick Cash, PIX, or Card to choose the payment method and finish.",
        )
        .target("finalize-button")
        .placement(Placement::Top)
        .action(StepAction::Click)
        .hotkey("F10")
        .route("/pos"),
        TourStep::new(
            "pos-done",
            "Sale Complete!",
            "Stock was updated and the sale is on the drawer record. Ready for the next customer!",
        )
        .placement(Placement::Center)
        .route("/pos"),
    ])
}
