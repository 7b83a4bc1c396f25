use waylight_core::Placement;

use crate::definition::{Category, StepAction, TourDefinition, TourId, TourStep};

pub(crate) fn tour() -> TourDefinition {
    TourDefinition::new(
        TourId::PosAdvanced,
        "POS: Master the Shortcuts",
        "Speed up checkout with keyboard shortcuts, weighed items, quick quantities, and sale cancellation.",
        Category::Advanced,
    )
    .minutes(15)
    .icon("zap")
    .prerequisites([TourId::PosBasics])
    .tags(["pos", "advanced", "shortcuts", "scale", "cancellation", "productivity"])
    .steps(vec![
        TourStep::new(
            "adv-intro",
            "Checkout at Full Speed",
            "A fast till never touches the mouse. This tour teaches the shortcuts the regulars use.",
        )
        .placement(Placement::Center)
        .route("/pos"),
        TourStep::new(
            "adv-quantity",
            "Quick Quantities",
            "Before adding a product, press F4 and a number to preset the quantity. Or type *3 in the search box for three units.",
        )
        .target("product-search")
        .placement(Placement::Bottom)
        .hotkey("F4")
        .route("/pos"),
        TourStep::new(
            "adv-scale",
            "Weighed Items",
            "Products sold by weight read straight from the scale. Select the item and the weight fills in automatically.",
        )
        .target("cart-items")
        .placement(Placement::Left)
        .route("/pos"),
        TourStep::new(
            "adv-discount",
            "Discounts (F6)",
            "Press F6 to discount the sale, as a percentage or an amount. A reason is required and recorded.",
        )
        .target("cart-totals")
        .placement(Placement::Top)
        .hotkey("F6")
        .route("/pos"),
        TourStep::new(
            "adv-remove",
            "Remove an Item (F12)",
            "Select a line and press F12, or click its X. Removal asks for confirmation.",
        )
        .target("cart-item-remove")
        .placement(Placement::Left)
        .hotkey("F12")
        .route("/pos"),
        TourStep::new(
            "adv-cancel",
            "Cancel the Sale (F8)",
            "F8 abandons the current sale and empties the cart. Cancelled sales are logged for the manager.",
        )
        .target("cancel-sale-button")
        .placement(Placement::Top)
        .action(StepAction::Click)
        .hotkey("F8")
        .skippable()
        .route("/pos"),
        TourStep::new(
            "adv-done",
            "Shortcut Champion",
            "That's every shortcut on the till. Keep the cheat sheet handy with F1 until they stick.",
        )
        .placement(Placement::Center),
    ])
}
