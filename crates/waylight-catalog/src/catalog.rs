#![forbid(unsafe_code)]

//! The validated tour registry.

use std::collections::{HashMap, HashSet};
use std::fmt;

use crate::definition::{Category, TourDefinition, TourId};

/// Errors detected while validating a catalog.
///
/// The prerequisite graph being a DAG is a precondition everywhere else in
/// the engine; rather than assuming the hand-curated catalog honors it,
/// construction checks once and refuses a bad set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CatalogError {
    /// Two definitions share an id.
    DuplicateTour(TourId),
    /// A definition has no steps.
    EmptySteps(TourId),
    /// Two steps within one tour share an id.
    DuplicateStepId(TourId, String),
    /// A tour lists itself as a prerequisite.
    SelfPrerequisite(TourId),
    /// A prerequisite references a tour absent from this catalog.
    UnknownPrerequisite { tour: TourId, prerequisite: TourId },
    /// The prerequisite graph contains a cycle through this tour.
    PrerequisiteCycle(TourId),
}

impl fmt::Display for CatalogError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CatalogError::DuplicateTour(id) => write!(f, "duplicate tour: {id}"),
            CatalogError::EmptySteps(id) => write!(f, "tour {id} has no steps"),
            CatalogError::DuplicateStepId(id, step) => {
                write!(f, "tour {id} repeats step id {step:?}")
            }
            CatalogError::SelfPrerequisite(id) => {
                write!(f, "tour {id} lists itself as a prerequisite")
            }
            CatalogError::UnknownPrerequisite { tour, prerequisite } => {
                write!(f, "tour {tour} requires {prerequisite}, which is not in the catalog")
            }
            CatalogError::PrerequisiteCycle(id) => {
                write!(f, "prerequisite cycle through tour {id}")
            }
        }
    }
}

impl std::error::Error for CatalogError {}

/// A static, queryable registry of tour definitions.
///
/// Read-only for the process lifetime. Lookups return `None` rather than
/// erroring: "not found" is not exceptional here.
#[derive(Debug, Clone)]
pub struct Catalog {
    defs: Vec<TourDefinition>,
    index: HashMap<TourId, usize>,
}

impl Catalog {
    /// Build and validate a catalog.
    pub fn new(defs: Vec<TourDefinition>) -> Result<Self, CatalogError> {
        let mut index = HashMap::with_capacity(defs.len());
        for (i, def) in defs.iter().enumerate() {
            if index.insert(def.id, i).is_some() {
                return Err(CatalogError::DuplicateTour(def.id));
            }
            if def.steps.is_empty() {
                return Err(CatalogError::EmptySteps(def.id));
            }
            let mut seen = HashSet::with_capacity(def.steps.len());
            for step in &def.steps {
                if !seen.insert(step.id) {
                    return Err(CatalogError::DuplicateStepId(def.id, step.id.to_string()));
                }
            }
            for prereq in &def.prerequisites {
                if *prereq == def.id {
                    return Err(CatalogError::SelfPrerequisite(def.id));
                }
            }
        }

        for def in &defs {
            for prereq in &def.prerequisites {
                if !index.contains_key(prereq) {
                    return Err(CatalogError::UnknownPrerequisite {
                        tour: def.id,
                        prerequisite: *prereq,
                    });
                }
            }
        }

        let catalog = Self { defs, index };
        catalog.check_acyclic()?;
        Ok(catalog)
    }

    /// DFS with a three-color marking over the prerequisite graph.
    fn check_acyclic(&self) -> Result<(), CatalogError> {
        #[derive(Clone, Copy, PartialEq)]
        enum Mark {
            White,
            Grey,
            Black,
        }

        fn visit(
            catalog: &Catalog,
            id: TourId,
            marks: &mut HashMap<TourId, Mark>,
        ) -> Result<(), CatalogError> {
            match marks.get(&id).copied().unwrap_or(Mark::White) {
                Mark::Black => return Ok(()),
                Mark::Grey => return Err(CatalogError::PrerequisiteCycle(id)),
                Mark::White => {}
            }
            marks.insert(id, Mark::Grey);
            if let Some(def) = catalog.get(id) {
                for prereq in &def.prerequisites {
                    visit(catalog, *prereq, marks)?;
                }
            }
            marks.insert(id, Mark::Black);
            Ok(())
        }

        let mut marks = HashMap::new();
        for def in &self.defs {
            visit(self, def.id, &mut marks)?;
        }
        Ok(())
    }

    /// Look up a definition by id.
    #[must_use]
    pub fn get(&self, id: TourId) -> Option<&TourDefinition> {
        self.index.get(&id).map(|&i| &self.defs[i])
    }

    /// All definitions in `category`, in catalog declaration order.
    #[must_use]
    pub fn by_category(&self, category: Category) -> Vec<&TourDefinition> {
        self.defs.iter().filter(|d| d.category == category).collect()
    }

    /// Case-insensitive substring search over name, description, and tags.
    ///
    /// No ranking; results keep declaration order. An empty query matches
    /// everything.
    #[must_use]
    pub fn search(&self, query: &str) -> Vec<&TourDefinition> {
        let needle = query.to_lowercase();
        self.defs
            .iter()
            .filter(|d| {
                d.name.to_lowercase().contains(&needle)
                    || d.description.to_lowercase().contains(&needle)
                    || d.tags.iter().any(|t| t.to_lowercase().contains(&needle))
            })
            .collect()
    }

    /// All ids, in declaration order.
    #[must_use]
    pub fn ids(&self) -> Vec<TourId> {
        self.defs.iter().map(|d| d.id).collect()
    }

    /// Iterate definitions in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = &TourDefinition> {
        self.defs.iter()
    }

    /// Number of definitions.
    #[must_use]
    pub fn len(&self) -> usize {
        self.defs.len()
    }

    /// Whether the catalog is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.defs.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::definition::TourStep;

    fn def(id: TourId) -> TourDefinition {
        TourDefinition::new(id, id.as_str(), "test", Category::GettingStarted)
            .steps(vec![TourStep::new("s1", "One", "first")])
    }

    #[test]
    fn get_returns_none_for_absent_tour() {
        let catalog = Catalog::new(vec![def(TourId::Welcome)]).unwrap();
        assert!(catalog.get(TourId::Welcome).is_some());
        assert!(catalog.get(TourId::Reports).is_none());
    }

    #[test]
    fn rejects_empty_steps() {
        let bare = TourDefinition::new(TourId::Welcome, "W", "d", Category::GettingStarted);
        assert_eq!(
            Catalog::new(vec![bare]).err(),
            Some(CatalogError::EmptySteps(TourId::Welcome))
        );
    }

    #[test]
    fn rejects_duplicate_step_ids() {
        let dup = TourDefinition::new(TourId::Welcome, "W", "d", Category::GettingStarted).steps(
            vec![TourStep::new("s", "A", "a"), TourStep::new("s", "B", "b")],
        );
        assert_eq!(
            Catalog::new(vec![dup]).err(),
            Some(CatalogError::DuplicateStepId(TourId::Welcome, "s".into()))
        );
    }

    #[test]
    fn rejects_self_prerequisite() {
        let selfish = def(TourId::Welcome).prerequisites([TourId::Welcome]);
        assert_eq!(
            Catalog::new(vec![selfish]).err(),
            Some(CatalogError::SelfPrerequisite(TourId::Welcome))
        );
    }

    #[test]
    fn rejects_unknown_prerequisite() {
        let orphan = def(TourId::PosBasics).prerequisites([TourId::Welcome]);
        assert_eq!(
            Catalog::new(vec![orphan]).err(),
            Some(CatalogError::UnknownPrerequisite {
                tour: TourId::PosBasics,
                prerequisite: TourId::Welcome,
            })
        );
    }

    #[test]
    fn rejects_prerequisite_cycle() {
        let a = def(TourId::Welcome).prerequisites([TourId::PosBasics]);
        let b = def(TourId::PosBasics).prerequisites([TourId::Welcome]);
        assert!(matches!(
            Catalog::new(vec![a, b]),
            Err(CatalogError::PrerequisiteCycle(_))
        ));
    }

    #[test]
    fn by_category_keeps_declaration_order() {
        let a = def(TourId::Welcome);
        let mut b = def(TourId::PosBasics);
        b.category = Category::Operations;
        let c = def(TourId::Settings);

        let catalog = Catalog::new(vec![a, b, c]).unwrap();
        let hits = catalog.by_category(Category::GettingStarted);
        assert_eq!(
            hits.iter().map(|d| d.id).collect::<Vec<_>>(),
            vec![TourId::Welcome, TourId::Settings]
        );
    }

    #[test]
    fn search_matches_name_description_and_tags() {
        let mut a = def(TourId::Welcome);
        a.name = "Welcome to the till".into();
        let mut b = def(TourId::PosBasics);
        b.description = "Your first sale".into();
        let c = def(TourId::Reports).tags(["export", "excel"]);

        let catalog = Catalog::new(vec![a, b, c]).unwrap();
        assert_eq!(catalog.search("TILL").len(), 1);
        assert_eq!(catalog.search("first sale")[0].id, TourId::PosBasics);
        assert_eq!(catalog.search("excel")[0].id, TourId::Reports);
        assert!(catalog.search("nothing-matches-this").is_empty());
    }

    #[test]
    fn search_is_substring_not_ranked() {
        let mut a = def(TourId::Welcome);
        a.name = "Cash drawer".into();
        let mut b = def(TourId::CashDrawer);
        b.tags = vec!["cash".into()];

        let catalog = Catalog::new(vec![a, b]).unwrap();
        let hits = catalog.search("cash");
        assert_eq!(
            hits.iter().map(|d| d.id).collect::<Vec<_>>(),
            vec![TourId::Welcome, TourId::CashDrawer]
        );
    }
}
