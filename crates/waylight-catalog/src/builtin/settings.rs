use waylight_core::Placement;

use crate::definition::{Category, TourDefinition, TourId, TourStep};

pub(crate) fn tour() -> TourDefinition {
    TourDefinition::new(
        TourId::Settings,
        "System Settings",
        "Company details, receipt printer, barcode scanner, scale, and backups.",
        Category::Advanced,
    )
    .minutes(10)
    .icon("settings")
    .tags(["settings", "printer", "scale", "scanner", "company", "hardware", "receipt"])
    .steps(vec![
        TourStep::new(
            "set-intro",
            "Make It Yours",
            "Settings are per terminal. Most stores configure once and never come back here.",
        )
        .placement(Placement::Center)
        .route("/settings"),
        TourStep::new(
            "set-company",
            "Company Details",
            "Name, tax id, and address printed on every receipt.",
        )
        .target("company-section")
        .placement(Placement::Right)
        .route("/settings"),
        TourStep::new(
            "set-printer",
            "Receipt Printer",
            "Pick the printer and paper width, and choose whether receipts print automatically after each sale.",
        )
        .target("printer-section")
        .placement(Placement::Right)
        .route("/settings"),
        TourStep::new(
            "set-devices",
            "Scanner and Scale",
            "USB scanners work out of the box. Scales need the port and protocol configured here.",
        )
        .target("devices-section")
        .placement(Placement::Right)
        .route("/settings"),
        TourStep::new(
            "set-backup",
            "Backups",
            "Daily automatic backups, plus a manual backup button before anything risky.",
        )
        .target("backup-section")
        .placement(Placement::Right)
        .route("/settings"),
        TourStep::new(
            "set-done",
            "All Set",
            "If hardware misbehaves, this screen is the first place to look.",
        )
        .placement(Placement::Center),
    ])
}
