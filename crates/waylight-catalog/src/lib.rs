#![forbid(unsafe_code)]

//! Tour definitions and the built-in catalog.
//!
//! A [`TourDefinition`] is an immutable, ordered sequence of
//! [`TourStep`]s plus display metadata and a prerequisite list. Definitions
//! are plain data: no callbacks, no handles into the live UI. Behavior hooks
//! live in a side-table owned by the runtime driver, keyed by step id, so
//! the catalog stays serializable and trivially testable.
//!
//! The [`Catalog`] validates its definitions once at construction: steps
//! must be non-empty with unique ids, and the prerequisite graph must be a
//! DAG with no self-references. The built-in set for the point-of-sale
//! application is exposed through [`builtin`].

pub mod catalog;
pub mod definition;

mod builtin;

use std::sync::LazyLock;

pub use catalog::{Catalog, CatalogError};
pub use definition::{Category, StepAction, TourDefinition, TourId, TourStep};

/// The built-in tour set.
///
/// Ten tours covering the application's workflows, from the first-login
/// welcome walkthrough to advanced keyboard-driven selling.
#[must_use]
pub fn builtin() -> &'static Catalog {
    static CATALOG: LazyLock<Catalog> = LazyLock::new(|| {
        Catalog::new(builtin::definitions()).expect("built-in catalog is valid")
    });
    &CATALOG
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_catalog_validates() {
        // The expect in `builtin` relies on this invariant.
        assert!(Catalog::new(builtin::definitions()).is_ok());
    }

    #[test]
    fn builtin_catalog_covers_every_id() {
        let catalog = builtin();
        assert_eq!(catalog.len(), TourId::ALL.len());
        for id in TourId::ALL {
            assert!(catalog.get(*id).is_some(), "missing definition for {id}");
        }
    }
}
