use waylight_core::Placement;

use crate::definition::{Category, StepAction, TourDefinition, TourId, TourStep};

pub(crate) fn tour() -> TourDefinition {
    TourDefinition::new(
        TourId::Inventory,
        "Inventory Control",
        "Record goods received, adjust counts, and track expiry dates and low-stock items.",
        Category::Management,
    )
    .minutes(10)
    .icon("warehouse")
    .prerequisites([TourId::Products])
    .tags(["inventory", "stock", "goods received", "adjustment", "expiry", "count"])
    .steps(vec![
        TourStep::new(
            "inv-intro",
            "Stock That Matches the Shelf",
            "Sales subtract stock automatically. This tour covers the movements you record by hand.",
        )
        .placement(Placement::Center)
        .route("/inventory"),
        TourStep::new(
            "inv-entry",
            "Goods Received",
            "Click \"Stock Entry\" when a delivery arrives. Pick the supplier, scan the items, and confirm quantities and costs.",
        )
        .target("stock-entry-button")
        .placement(Placement::Bottom)
        .action(StepAction::Click)
        .route("/inventory"),
        TourStep::new(
            "inv-adjust",
            "Adjustments",
            "Breakage, loss, or a recount that disagrees with the system: record an adjustment with a reason. Every adjustment is audited.",
        )
        .target("stock-adjust-button")
        .placement(Placement::Bottom)
        .route("/inventory"),
        TourStep::new(
            "inv-low",
            "Low-Stock Watch",
            "Items below their minimum quantity surface here. Set minimums per product to drive restock alerts.",
        )
        .target("low-stock-panel")
        .placement(Placement::Left)
        .route("/inventory"),
        TourStep::new(
            "inv-expiry",
            "Expiry Tracking",
            "Batches approaching their expiry date are flagged so you can rotate or discount them in time.",
        )
        .target("expiry-panel")
        .placement(Placement::Left)
        .route("/inventory"),
        TourStep::new(
            "inv-done",
            "Inventory Under Control",
            "Entries, adjustments, and alerts: that is the full stock loop.",
        )
        .placement(Placement::Center),
    ])
}
