use waylight_core::Placement;

use crate::definition::{Category, StepAction, TourDefinition, TourId, TourStep};

pub(crate) fn tour() -> TourDefinition {
    TourDefinition::new(
        TourId::Staff,
        "Staff Management",
        "Create staff accounts, assign roles and permissions, and manage access PINs.",
        Category::Management,
    )
    .minutes(6)
    .icon("users")
    .tags(["staff", "permissions", "pin", "access", "roles", "security"])
    .steps(vec![
        TourStep::new(
            "staff-intro",
            "Who Does What",
            "Each person gets their own PIN, so every sale and adjustment carries a name.",
        )
        .placement(Placement::Center)
        .route("/staff"),
        TourStep::new(
            "staff-new",
            "Add a Person",
            "Click \"New Staff Member\" and fill in name and PIN. The PIN is what they type to unlock the till.",
        )
        .target("new-staff-button")
        .placement(Placement::Bottom)
        .action(StepAction::Click)
        .route("/staff"),
        TourStep::new(
            "staff-roles",
            "Roles",
            "Cashier, stockist, or manager. Roles bundle permissions; managers can also grant individual ones.",
        )
        .target("role-select")
        .placement(Placement::Right)
        .route("/staff"),
        TourStep::new(
            "staff-permissions",
            "Fine-grained Permissions",
            "Discount limits, drawer operations, report access: each can be granted or withheld per person.",
        )
        .target("permissions-panel")
        .placement(Placement::Right)
        .route("/staff"),
        TourStep::new(
            "staff-done",
            "Accountability Built In",
            "With individual PINs, the audit trail answers \"who did this?\" by itself.",
        )
        .placement(Placement::Center),
    ])
}
