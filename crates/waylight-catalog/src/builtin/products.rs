use waylight_core::Placement;

use crate::definition::{Category, StepAction, TourDefinition, TourId, TourStep};

pub(crate) fn tour() -> TourDefinition {
    TourDefinition::new(
        TourId::Products,
        "Product Management",
        "Register products, organize categories, set prices, and keep an eye on margins.",
        Category::Management,
    )
    .minutes(12)
    .icon("package")
    .prerequisites([TourId::Welcome])
    .tags(["products", "registration", "category", "price", "barcode", "margin"])
    .steps(vec![
        TourStep::new(
            "prod-intro",
            "Your Product Base",
            "A clean product base makes everything else easier: faster search, accurate stock, honest margins.",
        )
        .placement(Placement::Center)
        .route("/products"),
        TourStep::new(
            "prod-new",
            "Register a Product",
            "Click \"New Product\" to open the registration form.",
        )
        .target("new-product-button")
        .placement(Placement::Bottom)
        .action(StepAction::Click)
        .route("/products"),
        TourStep::new(
            "prod-barcode",
            "Barcode",
            "Scan or type the barcode. Products without one get an internal code generated automatically.",
        )
        .target("product-barcode-input")
        .placement(Placement::Right)
        .route("/products"),
        TourStep::new(
            "prod-pricing",
            "Cost and Sale Price",
            "Enter the cost and the sale price; the margin is computed for you. Update the cost on every purchase to keep it honest.",
        )
        .target("product-pricing")
        .placement(Placement::Right)
        .route("/products"),
        TourStep::new(
            "prod-category",
            "Categories",
            "Group products into categories for reports and faster browsing at the till.",
        )
        .target("product-category")
        .placement(Placement::Right)
        .route("/products"),
        TourStep::new(
            "prod-list",
            "The Product List",
            "Search, filter by category, and spot inactive items. Click any row to edit.",
        )
        .target("product-list")
        .placement(Placement::Top)
        .route("/products"),
        TourStep::new(
            "prod-done",
            "Base Covered",
            "Products registered here flow straight into the POS search and the inventory screens.",
        )
        .placement(Placement::Center),
    ])
}
