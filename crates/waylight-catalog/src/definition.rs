#![forbid(unsafe_code)]

//! Immutable tour and step definitions.

use std::fmt;
use std::str::FromStr;
use std::time::Duration;

use serde::{Deserialize, Serialize};
use waylight_core::{Placement, TargetId};

/// Identifier of a tour in the fixed catalog.
///
/// The catalog is closed: ids are an enum, not free-form strings, so a
/// progress record can never reference a tour that does not exist in this
/// build. Serialized in kebab-case (`"pos-basics"`), which is also the form
/// shown in logs.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(rename_all = "kebab-case")]
pub enum TourId {
    Welcome,
    PosBasics,
    PosAdvanced,
    Products,
    Inventory,
    CashDrawer,
    Reports,
    Settings,
    Staff,
    Alerts,
}

impl TourId {
    /// Every id, in catalog declaration order.
    pub const ALL: &'static [TourId] = &[
        TourId::Welcome,
        TourId::PosBasics,
        TourId::PosAdvanced,
        TourId::Products,
        TourId::Inventory,
        TourId::CashDrawer,
        TourId::Reports,
        TourId::Settings,
        TourId::Staff,
        TourId::Alerts,
    ];

    /// Kebab-case name, matching the serialized form.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            TourId::Welcome => "welcome",
            TourId::PosBasics => "pos-basics",
            TourId::PosAdvanced => "pos-advanced",
            TourId::Products => "products",
            TourId::Inventory => "inventory",
            TourId::CashDrawer => "cash-drawer",
            TourId::Reports => "reports",
            TourId::Settings => "settings",
            TourId::Staff => "staff",
            TourId::Alerts => "alerts",
        }
    }
}

impl fmt::Display for TourId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TourId {
    type Err = UnknownTourId;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        TourId::ALL
            .iter()
            .copied()
            .find(|id| id.as_str() == s)
            .ok_or_else(|| UnknownTourId(s.to_string()))
    }
}

/// Error for parsing an id that is not part of this build's catalog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownTourId(pub String);

impl fmt::Display for UnknownTourId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown tour id: {}", self.0)
    }
}

impl std::error::Error for UnknownTourId {}

/// Catalog grouping used by the hub screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    GettingStarted,
    Operations,
    Management,
    Advanced,
}

impl Category {
    /// Kebab-case name.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Category::GettingStarted => "getting-started",
            Category::Operations => "operations",
            Category::Management => "management",
            Category::Advanced => "advanced",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The user interaction a step waits for.
///
/// Informational: the step engine does not enforce gating itself. The
/// driver advances a `Click`-gated step when the highlighted element is
/// clicked; `Type`, `Wait`, and `Navigate` are hints for the host wiring.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepAction {
    Click,
    Type,
    Wait,
    Navigate,
}

/// One unit of guidance within a tour.
#[derive(Debug, Clone)]
pub struct TourStep {
    /// Unique within the owning tour.
    pub id: &'static str,
    /// Heading shown in the tooltip.
    pub title: String,
    /// Body text shown in the tooltip.
    pub description: String,
    /// Element to spotlight; `None` means a centered overlay.
    pub target: Option<TargetId>,
    /// Tooltip anchor relative to the target.
    pub placement: Placement,
    /// Interaction that advances the step, if any.
    pub action: Option<StepAction>,
    /// Payload for the action (text to type, route to open).
    pub action_data: Option<String>,
    /// Route the host should navigate to while this step is current.
    pub route: Option<String>,
    /// Keyboard shortcut label surfaced in the tooltip.
    pub hotkey: Option<String>,
    /// Delay before the step is shown.
    pub delay: Option<Duration>,
    /// Whether the step must be completed to advance.
    pub required: bool,
    /// Whether the step may be skipped individually.
    pub skippable: bool,
}

impl TourStep {
    /// Create a step with the given id, title, and description.
    #[must_use]
    pub fn new(
        id: &'static str,
        title: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            id,
            title: title.into(),
            description: description.into(),
            target: None,
            placement: Placement::default(),
            action: None,
            action_data: None,
            route: None,
            hotkey: None,
            delay: None,
            required: false,
            skippable: false,
        }
    }

    /// Spotlight the element registered under `target`.
    #[must_use]
    pub fn target(mut self, target: impl Into<TargetId>) -> Self {
        self.target = Some(target.into());
        self
    }

    /// Anchor the tooltip on the given side of the target.
    #[must_use]
    pub fn placement(mut self, placement: Placement) -> Self {
        self.placement = placement;
        self
    }

    /// Mark the interaction that advances this step.
    #[must_use]
    pub fn action(mut self, action: StepAction) -> Self {
        self.action = Some(action);
        self
    }

    /// Attach a payload to the action.
    #[must_use]
    pub fn action_data(mut self, data: impl Into<String>) -> Self {
        self.action_data = Some(data.into());
        self
    }

    /// Pin the step to a route.
    #[must_use]
    pub fn route(mut self, route: impl Into<String>) -> Self {
        self.route = Some(route.into());
        self
    }

    /// Surface a shortcut label in the tooltip.
    #[must_use]
    pub fn hotkey(mut self, hotkey: impl Into<String>) -> Self {
        self.hotkey = Some(hotkey.into());
        self
    }

    /// Delay before the step is shown.
    #[must_use]
    pub fn delay(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }

    /// Require completion before advancing.
    #[must_use]
    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    /// Allow skipping this step individually.
    #[must_use]
    pub fn skippable(mut self) -> Self {
        self.skippable = true;
        self
    }
}

/// A named, ordered sequence of steps teaching one workflow.
#[derive(Debug, Clone)]
pub struct TourDefinition {
    pub id: TourId,
    pub name: String,
    pub description: String,
    pub category: Category,
    /// Rough completion time shown on the hub card.
    pub estimated_minutes: u16,
    /// Icon name resolved by the host's icon set.
    pub icon: String,
    /// Lowercased free-form terms matched by catalog search.
    pub tags: Vec<String>,
    /// Steps in lifecycle order. Never empty in a validated catalog.
    pub steps: Vec<TourStep>,
    /// Tours that must be completed before this one may start.
    pub prerequisites: Vec<TourId>,
}

impl TourDefinition {
    /// Create a definition with no steps, tags, or prerequisites.
    #[must_use]
    pub fn new(
        id: TourId,
        name: impl Into<String>,
        description: impl Into<String>,
        category: Category,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            description: description.into(),
            category,
            estimated_minutes: 0,
            icon: String::new(),
            tags: Vec::new(),
            steps: Vec::new(),
            prerequisites: Vec::new(),
        }
    }

    /// Estimated completion time in minutes.
    #[must_use]
    pub fn minutes(mut self, minutes: u16) -> Self {
        self.estimated_minutes = minutes;
        self
    }

    /// Icon name for the hub card.
    #[must_use]
    pub fn icon(mut self, icon: impl Into<String>) -> Self {
        self.icon = icon.into();
        self
    }

    /// Search tags.
    #[must_use]
    pub fn tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tags = tags.into_iter().map(Into::into).collect();
        self
    }

    /// The ordered step sequence.
    #[must_use]
    pub fn steps(mut self, steps: Vec<TourStep>) -> Self {
        self.steps = steps;
        self
    }

    /// Tours that must be completed first.
    #[must_use]
    pub fn prerequisites(mut self, prerequisites: impl IntoIterator<Item = TourId>) -> Self {
        self.prerequisites = prerequisites.into_iter().collect();
        self
    }

    /// Look up a step by id.
    #[must_use]
    pub fn step(&self, step_id: &str) -> Option<&TourStep> {
        self.steps.iter().find(|s| s.id == step_id)
    }

    /// All step ids, in order.
    #[must_use]
    pub fn step_ids(&self) -> Vec<String> {
        self.steps.iter().map(|s| s.id.to_string()).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tour_id_round_trips_through_str() {
        for id in TourId::ALL {
            assert_eq!(id.as_str().parse::<TourId>().unwrap(), *id);
        }
    }

    #[test]
    fn tour_id_parse_rejects_unknown() {
        let err = "pdv-basic".parse::<TourId>().unwrap_err();
        assert_eq!(err.0, "pdv-basic");
    }

    #[test]
    fn tour_id_serde_is_kebab_case() {
        let json = serde_json::to_string(&TourId::PosBasics).unwrap();
        assert_eq!(json, "\"pos-basics\"");
        let back: TourId = serde_json::from_str(&json).unwrap();
        assert_eq!(back, TourId::PosBasics);
    }

    #[test]
    fn step_builder_defaults() {
        let step = TourStep::new("s1", "Title", "Body");
        assert_eq!(step.placement, waylight_core::Placement::Center);
        assert!(step.target.is_none());
        assert!(!step.required);
    }

    #[test]
    fn definition_step_lookup() {
        let def = TourDefinition::new(TourId::Welcome, "W", "d", Category::GettingStarted).steps(
            vec![
                TourStep::new("a", "A", "a"),
                TourStep::new("b", "B", "b"),
            ],
        );
        assert_eq!(def.step("b").map(|s| s.id), Some("b"));
        assert!(def.step("z").is_none());
        assert_eq!(def.step_ids(), vec!["a", "b"]);
    }
}
