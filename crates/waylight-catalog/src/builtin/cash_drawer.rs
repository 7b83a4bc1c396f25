use waylight_core::Placement;

use crate::definition::{Category, StepAction, TourDefinition, TourId, TourStep};

pub(crate) fn tour() -> TourDefinition {
    TourDefinition::new(
        TourId::CashDrawer,
        "Cash Drawer",
        "Open with a float, record withdrawals and top-ups during the day, and reconcile at close.",
        Category::Operations,
    )
    .minutes(8)
    .icon("landmark")
    .prerequisites([TourId::PosBasics])
    .tags(["cash", "drawer", "withdrawal", "float", "closing", "reconciliation"])
    .steps(vec![
        TourStep::new(
            "cash-intro",
            "One Drawer, One Day",
            "The drawer session ties every sale, withdrawal, and top-up to a shift. Open it first thing; close and count it last.",
        )
        .placement(Placement::Center)
        .route("/cash"),
        TourStep::new(
            "cash-open",
            "Opening",
            "Click \"Open Drawer\" and enter the starting float you put in the till.",
        )
        .target("open-drawer-button")
        .placement(Placement::Bottom)
        .action(StepAction::Click)
        .route("/cash"),
        TourStep::new(
            "cash-withdrawal",
            "Withdrawals",
            "Taking cash out mid-shift (bank run, supplier payment) is a withdrawal. Record the amount and the reason.",
        )
        .target("withdrawal-button")
        .placement(Placement::Bottom)
        .route("/cash"),
        TourStep::new(
            "cash-topup",
            "Top-ups",
            "Adding change or cash to the till is a top-up; it is recorded the same way.",
        )
        .target("topup-button")
        .placement(Placement::Bottom)
        .route("/cash"),
        TourStep::new(
            "cash-history",
            "Session History",
            "Every movement of the current session, in order, with running balance.",
        )
        .target("session-history")
        .placement(Placement::Left)
        .route("/cash"),
        TourStep::new(
            "cash-close",
            "Closing and Counting",
            "At close, count the physical cash and enter it. The system shows any difference against the expected balance.",
        )
        .target("close-drawer-button")
        .placement(Placement::Top)
        .action(StepAction::Click)
        .route("/cash"),
        TourStep::new(
            "cash-done",
            "Balanced Books",
            "Open, move, close, count. Differences are logged per session for the manager.",
        )
        .placement(Placement::Center),
    ])
}
