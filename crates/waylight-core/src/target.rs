#![forbid(unsafe_code)]

//! Logical target resolution.
//!
//! Tour steps reference the element they highlight by an opaque logical id,
//! never by a concrete widget handle. Hosts mark elements with the
//! `data-tour` attribute (or an equivalent registry on non-DOM hosts) and
//! implement [`TargetResolver`] to map ids to live bounding boxes.
//!
//! Keeping resolution behind a trait means the step engine runs unchanged
//! against a real UI tree or against [`MapResolver`] in tests.

use std::collections::HashMap;

use crate::geometry::{Rect, Size};

/// Attribute name carried by markable UI elements.
pub const TARGET_ATTRIBUTE: &str = "data-tour";

/// An opaque logical id naming a highlightable UI element.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TargetId(String);

impl TargetId {
    /// Create a target id.
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// The raw id string.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The CSS selector form, `[data-tour="<id>"]`, for DOM hosts.
    #[must_use]
    pub fn selector(&self) -> String {
        format!("[{TARGET_ATTRIBUTE}=\"{}\"]", self.0)
    }

    /// Parse a selector produced by [`TargetId::selector`] back into an id.
    #[must_use]
    pub fn from_selector(selector: &str) -> Option<TargetId> {
        let inner = selector
            .strip_prefix(&format!("[{TARGET_ATTRIBUTE}=\""))?
            .strip_suffix("\"]")?;
        Some(TargetId::new(inner))
    }
}

impl From<&str> for TargetId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl std::fmt::Display for TargetId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Resolves logical target ids against the live UI.
///
/// Resolution is a normal, fallible operation: a step may reference an
/// element on a page that is not currently rendered. Callers degrade to a
/// centered overlay when `resolve` returns `None`.
pub trait TargetResolver {
    /// Current viewport dimensions.
    fn viewport(&self) -> Size;

    /// Bounding box of the element carrying `id`, if it is mounted.
    fn resolve(&self, id: &TargetId) -> Option<Rect>;

    /// Ask the host to scroll the element into view (smooth, centered).
    ///
    /// Best-effort; the default does nothing. Hosts that animate the scroll
    /// should expect a remeasure after the settle delay.
    fn scroll_into_view(&self, id: &TargetId) {
        let _ = id;
    }
}

/// A map-backed resolver for tests and layout-static hosts.
#[derive(Debug, Clone, Default)]
pub struct MapResolver {
    viewport: Size,
    rects: HashMap<TargetId, Rect>,
}

impl MapResolver {
    /// Create a resolver with the given viewport and no targets.
    #[must_use]
    pub fn new(viewport: Size) -> Self {
        Self {
            viewport,
            rects: HashMap::new(),
        }
    }

    /// Register (or move) a target.
    pub fn insert(&mut self, id: impl Into<TargetId>, rect: Rect) {
        self.rects.insert(id.into(), rect);
    }

    /// Remove a target, simulating an unmounted element.
    pub fn remove(&mut self, id: &TargetId) -> Option<Rect> {
        self.rects.remove(id)
    }

    /// Change the viewport, simulating a window resize.
    pub fn set_viewport(&mut self, viewport: Size) {
        self.viewport = viewport;
    }
}

impl TargetResolver for MapResolver {
    fn viewport(&self) -> Size {
        self.viewport
    }

    fn resolve(&self, id: &TargetId) -> Option<Rect> {
        self.rects.get(id).copied()
    }
}

#[cfg(test)]
mod tests {
    use super::{MapResolver, TargetId, TargetResolver};
    use crate::geometry::{Rect, Size};

    #[test]
    fn selector_round_trip() {
        let id = TargetId::new("nav-pos");
        assert_eq!(id.selector(), "[data-tour=\"nav-pos\"]");
        assert_eq!(TargetId::from_selector(&id.selector()), Some(id));
    }

    #[test]
    fn from_selector_rejects_other_attributes() {
        assert_eq!(TargetId::from_selector("[data-testid=\"nav\"]"), None);
        assert_eq!(TargetId::from_selector("nav-pos"), None);
    }

    #[test]
    fn map_resolver_resolves_known_targets() {
        let mut resolver = MapResolver::new(Size::new(1280.0, 720.0));
        resolver.insert("sidebar", Rect::new(0.0, 0.0, 240.0, 720.0));

        assert_eq!(
            resolver.resolve(&TargetId::new("sidebar")),
            Some(Rect::new(0.0, 0.0, 240.0, 720.0))
        );
        assert_eq!(resolver.resolve(&TargetId::new("missing")), None);
    }

    #[test]
    fn map_resolver_remove_simulates_unmount() {
        let mut resolver = MapResolver::new(Size::new(800.0, 600.0));
        resolver.insert("btn", Rect::new(10.0, 10.0, 20.0, 20.0));
        resolver.remove(&TargetId::new("btn"));
        assert_eq!(resolver.resolve(&TargetId::new("btn")), None);
    }
}
