use waylight_core::Placement;

use crate::definition::{Category, TourDefinition, TourId, TourStep};

pub(crate) fn tour() -> TourDefinition {
    TourDefinition::new(
        TourId::Welcome,
        "Welcome Tour",
        "Get to know the interface and learn to navigate the main features. A complete five-minute walkthrough.",
        Category::GettingStarted,
    )
    .minutes(5)
    .icon("sparkles")
    .tags(["intro", "basics", "first login", "navigation", "menu"])
    .steps(vec![
        TourStep::new(
            "welcome-intro",
            "Welcome!",
            "This tour walks you through the main features of the system. You will learn how to sell, manage products, and much more. Ready?",
        )
        .placement(Placement::Center)
        .skippable(),
        TourStep::new(
            "welcome-sidebar",
            "Navigation Menu",
            "This is the main menu. Every feature lives here, organized by category. Keyboard shortcuts get you around faster.",
        )
        .target("sidebar")
        .placement(Placement::Right)
        .hotkey("Alt+M"),
        TourStep::new(
            "welcome-pos",
            "Point of Sale",
            "The heart of the system. Ring up sales, search products by name or barcode, and settle with any payment method. F2 jumps straight to search.",
        )
        .target("nav-pos")
        .placement(Placement::Right)
        .hotkey("Ctrl+1"),
        TourStep::new(
            "welcome-products",
            "Product Management",
            "Register products, set cost and sale prices, organize categories, and track margins automatically.",
        )
        .target("nav-products")
        .placement(Placement::Right),
        TourStep::new(
            "welcome-inventory",
            "Inventory Control",
            "Record goods received, adjust stock counts, and watch for items running low or approaching expiry.",
        )
        .target("nav-inventory")
        .placement(Placement::Right),
        TourStep::new(
            "welcome-cash",
            "Cash Drawer",
            "Open the drawer with a starting float, record withdrawals during the day, and reconcile at close.",
        )
        .target("nav-cash")
        .placement(Placement::Right),
        TourStep::new(
            "welcome-reports",
            "Reports",
            "Analyze sales by period, find best sellers, follow the money, and export to spreadsheet or PDF.",
        )
        .target("nav-reports")
        .placement(Placement::Right),
        TourStep::new(
            "welcome-user",
            "Your Profile",
            "See who is signed in and sign out from here. Every staff member has their own access PIN.",
        )
        .target("user-menu")
        .placement(Placement::Bottom),
        TourStep::new(
            "welcome-help",
            "Help, Any Time",
            "Click this button or press F1 to open the tutorials and help hub. You can replay this tour whenever you like.",
        )
        .target("help-button")
        .placement(Placement::Left)
        .hotkey("F1"),
        TourStep::new(
            "welcome-done",
            "Tour Complete!",
            "You finished the introduction. We recommend the \"POS Basics\" tour next to ring up your first sale. Nice work!",
        )
        .placement(Placement::Center),
    ])
}
