use waylight_core::Placement;

use crate::definition::{Category, TourDefinition, TourId, TourStep};

pub(crate) fn tour() -> TourDefinition {
    TourDefinition::new(
        TourId::Reports,
        "Reports and Analysis",
        "Sales by period, best sellers, financial summaries, and exports to spreadsheet or PDF.",
        Category::Management,
    )
    .minutes(8)
    .icon("bar-chart")
    .prerequisites([TourId::PosBasics])
    .tags(["reports", "sales", "analysis", "export", "charts", "indicators"])
    .steps(vec![
        TourStep::new(
            "rep-intro",
            "Numbers You Can Act On",
            "Every sale feeds these reports the moment it is finalized. Nothing to sync, nothing to import.",
        )
        .placement(Placement::Center)
        .route("/reports"),
        TourStep::new(
            "rep-period",
            "Pick a Period",
            "Today, this week, this month, or any custom range. All panels below follow the selected period.",
        )
        .target("period-picker")
        .placement(Placement::Bottom)
        .route("/reports"),
        TourStep::new(
            "rep-sales",
            "Sales Overview",
            "Revenue, ticket count, and average ticket for the period, with the trend against the previous one.",
        )
        .target("sales-summary")
        .placement(Placement::Bottom)
        .route("/reports"),
        TourStep::new(
            "rep-top",
            "Best Sellers",
            "The products moving the most units and the most revenue. Useful for shelf placement and purchasing.",
        )
        .target("top-products")
        .placement(Placement::Left)
        .route("/reports"),
        TourStep::new(
            "rep-export",
            "Export",
            "Any report exports to CSV, spreadsheet, or PDF with the filters you have applied.",
        )
        .target("export-button")
        .placement(Placement::Left)
        .route("/reports"),
        TourStep::new(
            "rep-done",
            "Informed Decisions",
            "Check the overview daily and the best sellers weekly; the rest is there when you need it.",
        )
        .placement(Placement::Center),
    ])
}
