//! The built-in tour set for the point-of-sale application.
//!
//! One module per tour. Content is curated by hand; the prerequisite graph
//! is kept acyclic and is re-checked by [`crate::Catalog::new`].

mod alerts;
mod cash_drawer;
mod inventory;
mod pos_advanced;
mod pos_basics;
mod products;
mod reports;
mod settings;
mod staff;
mod welcome;

use crate::definition::TourDefinition;

/// All built-in definitions, in hub display order.
pub(crate) fn definitions() -> Vec<TourDefinition> {
    vec![
        welcome::tour(),
        pos_basics::tour(),
        pos_advanced::tour(),
        products::tour(),
        inventory::tour(),
        cash_drawer::tour(),
        reports::tour(),
        settings::tour(),
        staff::tour(),
        alerts::tour(),
    ]
}
