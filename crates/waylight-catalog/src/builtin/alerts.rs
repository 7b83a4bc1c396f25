use waylight_core::Placement;

use crate::definition::{Category, TourDefinition, TourId, TourStep};

pub(crate) fn tour() -> TourDefinition {
    TourDefinition::new(
        TourId::Alerts,
        "Alerts and Notifications",
        "Automatic warnings for low stock, approaching expiry dates, and drawer differences.",
        Category::Advanced,
    )
    .minutes(5)
    .icon("bell")
    .tags(["alerts", "notifications", "low stock", "expiry", "automatic"])
    .steps(vec![
        TourStep::new(
            "alerts-intro",
            "The System Watches For You",
            "Alerts surface things that need attention before they become problems. No configuration required to start.",
        )
        .placement(Placement::Center),
        TourStep::new(
            "alerts-bell",
            "The Bell",
            "The badge counts unread alerts. Click to open the list; critical ones also pop up as toasts.",
        )
        .target("alerts-bell")
        .placement(Placement::Bottom),
        TourStep::new(
            "alerts-stock",
            "Low-Stock Alerts",
            "Fired when an item drops below its minimum. Tune minimums per product on the product form.",
        )
        .target("alerts-list")
        .placement(Placement::Left),
        TourStep::new(
            "alerts-expiry",
            "Expiry Alerts",
            "Batches within their warning window show up here, earliest expiry first.",
        )
        .target("alerts-list")
        .placement(Placement::Left),
        TourStep::new(
            "alerts-done",
            "Stay Ahead",
            "Glance at the bell once a day and nothing will sneak up on you.",
        )
        .placement(Placement::Center),
    ])
}
