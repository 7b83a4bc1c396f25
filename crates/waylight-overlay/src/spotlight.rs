#![forbid(unsafe_code)]

//! Spotlight geometry and lifecycle.
//!
//! The spotlight dims the whole viewport except a punched-out hole over the
//! highlighted element. The hole is the target's bounding box expanded by a
//! padding; the dimmed remainder is exposed in two equivalent forms so hosts
//! can pick whichever their renderer clips cheaper:
//!
//! - [`clip_polygon`]: a single 10-point polygon tracing the viewport with
//!   the hole cut out (path-clipping hosts)
//! - [`mask_bands`]: up to four rectangles covering viewport minus hole
//!   (rect-blitting hosts)
//!
//! [`SpotlightController`] keeps the hole in sync with the live UI: any
//! resize, scroll, or subtree mutation schedules a synchronous remeasure,
//! and entering a step scrolls the target into view and remeasures again
//! after a settle delay so a smooth scroll has finished moving things.

use std::time::{Duration, Instant};

use waylight_core::event::ViewportEvent;
use waylight_core::geometry::{Point, Rect, Size};
use waylight_core::target::{TargetId, TargetResolver};
use waylight_core::Rgb;

/// Delay between scrolling a target into view and remeasuring it.
///
/// Covers the host's smooth-scroll animation finishing.
pub const SETTLE_DELAY: Duration = Duration::from_millis(500);

/// Visual configuration of the spotlight overlay.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpotlightConfig {
    /// Padding around the highlighted element.
    pub padding: f32,
    /// Overlay color.
    pub overlay_color: Rgb,
    /// Overlay opacity (0 to 1).
    pub overlay_opacity: f32,
    /// Corner radius of the highlight border.
    pub border_radius: f32,
    /// Whether the highlight border pulses.
    pub pulse: bool,
    /// Fade transition duration, before animation-speed scaling.
    pub transition: Duration,
}

impl Default for SpotlightConfig {
    fn default() -> Self {
        Self {
            padding: 8.0,
            overlay_color: Rgb::BLACK,
            overlay_opacity: 0.75,
            border_radius: 8.0,
            pulse: true,
            transition: Duration::from_millis(300),
        }
    }
}

impl SpotlightConfig {
    /// Padding around the highlighted element.
    #[must_use]
    pub fn padding(mut self, padding: f32) -> Self {
        self.padding = padding;
        self
    }

    /// Overlay color.
    #[must_use]
    pub fn overlay_color(mut self, color: Rgb) -> Self {
        self.overlay_color = color;
        self
    }

    /// Overlay opacity (0 to 1).
    #[must_use]
    pub fn overlay_opacity(mut self, opacity: f32) -> Self {
        self.overlay_opacity = opacity;
        self
    }

    /// Fade transition duration.
    #[must_use]
    pub fn transition(mut self, transition: Duration) -> Self {
        self.transition = transition;
        self
    }

    /// Transition duration after applying the user's animation speed.
    ///
    /// Speed is a multiplier: 2x animation speed halves the fade. A
    /// non-positive speed leaves the duration unscaled.
    #[must_use]
    pub fn scaled_transition(&self, animation_speed: f32) -> Duration {
        if animation_speed > 0.0 {
            self.transition.div_f32(animation_speed)
        } else {
            self.transition
        }
    }
}

/// Colors resolved for the current contrast mode.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpotlightPalette {
    pub overlay_color: Rgb,
    pub overlay_opacity: f32,
    pub border_color: Rgb,
    pub border_alpha: f32,
}

impl SpotlightPalette {
    /// Resolve the palette, forcing stronger values in high-contrast mode.
    #[must_use]
    pub fn resolve(config: &SpotlightConfig, high_contrast: bool) -> Self {
        if high_contrast {
            Self {
                overlay_color: Rgb::BLACK,
                overlay_opacity: 0.9,
                border_color: Rgb::YELLOW,
                border_alpha: 1.0,
            }
        } else {
            Self {
                overlay_color: config.overlay_color,
                overlay_opacity: config.overlay_opacity,
                border_color: Rgb::WHITE,
                border_alpha: 0.8,
            }
        }
    }
}

/// The 10-point polygon tracing the viewport with `hole` cut out.
///
/// Winds down the left edge, into the hole, back out, and around the rest
/// of the viewport, producing a single path whose fill covers everything
/// but the hole.
#[must_use]
pub fn clip_polygon(viewport: Size, hole: Rect) -> [Point; 10] {
    let w = viewport.width;
    let h = viewport.height;
    let (l, t, r, b) = (hole.left(), hole.top(), hole.right(), hole.bottom());
    [
        Point::new(0.0, 0.0),
        Point::new(0.0, h),
        Point::new(l, h),
        Point::new(l, t),
        Point::new(r, t),
        Point::new(r, b),
        Point::new(l, b),
        Point::new(l, h),
        Point::new(w, h),
        Point::new(w, 0.0),
    ]
}

/// Viewport minus hole as up to four disjoint band rectangles.
///
/// The hole is clipped to the viewport first; a hole entirely outside the
/// viewport yields one band covering everything.
#[must_use]
pub fn mask_bands(viewport: Size, hole: Rect) -> Vec<Rect> {
    let vp = Rect::from_size(viewport);
    let Some(hole) = vp.intersection(&hole) else {
        return vec![vp];
    };

    let mut bands = Vec::with_capacity(4);
    // Top and bottom bands span the full width; left and right fill the
    // hole's own rows.
    bands.push(Rect::new(0.0, 0.0, viewport.width, hole.top()));
    bands.push(Rect::new(
        0.0,
        hole.bottom(),
        viewport.width,
        viewport.height - hole.bottom(),
    ));
    bands.push(Rect::new(0.0, hole.top(), hole.left(), hole.height));
    bands.push(Rect::new(
        hole.right(),
        hole.top(),
        viewport.width - hole.right(),
        hole.height,
    ));
    bands.retain(|b| !b.is_empty());
    bands
}

/// What a pointer event over the spotlight actually hit.
///
/// The tooltip wins over everything; the hole is the interactive target;
/// anything else is the dimmed outside.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HitRegion {
    Tooltip,
    Target,
    Outside,
}

/// Classify a pointer position against the current frame.
#[must_use]
pub fn hit_test(point: Point, hole: Option<Rect>, tooltip: Option<Rect>) -> HitRegion {
    if tooltip.is_some_and(|r| r.contains(point)) {
        return HitRegion::Tooltip;
    }
    if hole.is_some_and(|r| r.contains(point)) {
        return HitRegion::Target;
    }
    HitRegion::Outside
}

/// Mount lifecycle with a fade-out tail.
///
/// Activation is immediate; deactivation keeps the overlay mounted until
/// the fade deadline passes so the host's fade animation can finish.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
    Hidden,
    Visible,
    FadingOut,
}

/// Tracks whether the spotlight should currently be mounted.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpotlightVisibility {
    phase: Phase,
    fade_until: Option<Instant>,
}

impl Default for SpotlightVisibility {
    fn default() -> Self {
        Self::new()
    }
}

impl SpotlightVisibility {
    /// Start hidden.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            phase: Phase::Hidden,
            fade_until: None,
        }
    }

    /// Drive the desired state. `fade` is the already-scaled transition.
    pub fn set_active(&mut self, active: bool, now: Instant, fade: Duration) {
        if active {
            self.phase = Phase::Visible;
            self.fade_until = None;
        } else if self.phase == Phase::Visible {
            self.phase = Phase::FadingOut;
            self.fade_until = Some(now + fade);
        }
    }

    /// Advance past any elapsed fade deadline.
    pub fn poll(&mut self, now: Instant) {
        if self.phase == Phase::FadingOut
            && let Some(until) = self.fade_until
            && now >= until
        {
            self.phase = Phase::Hidden;
            self.fade_until = None;
        }
    }

    /// Whether the overlay should be in the tree at all.
    #[must_use]
    pub fn is_mounted(&self) -> bool {
        self.phase != Phase::Hidden
    }

    /// Whether the overlay is in its fade-out tail.
    #[must_use]
    pub fn is_fading(&self) -> bool {
        self.phase == Phase::FadingOut
    }

    /// The pending fade deadline, for host tick scheduling.
    #[must_use]
    pub fn deadline(&self) -> Option<Instant> {
        self.fade_until
    }
}

/// Keeps the highlight rectangle in sync with the live UI.
#[derive(Debug, Clone)]
pub struct SpotlightController {
    target: Option<TargetId>,
    padding: f32,
    highlight: Option<Rect>,
    needs_measure: bool,
    settle_deadline: Option<Instant>,
}

impl SpotlightController {
    /// Create a controller with the given highlight padding.
    #[must_use]
    pub fn new(padding: f32) -> Self {
        Self {
            target: None,
            padding,
            highlight: None,
            needs_measure: false,
            settle_deadline: None,
        }
    }

    /// Point the controller at a new step's target.
    ///
    /// Resolves immediately, asks the host to scroll the element into view,
    /// and schedules the settle remeasure. `None` clears the highlight (the
    /// step renders as a centered overlay).
    pub fn set_target(
        &mut self,
        target: Option<TargetId>,
        resolver: &dyn TargetResolver,
        now: Instant,
    ) {
        self.target = target;
        self.settle_deadline = None;
        if let Some(id) = &self.target {
            resolver.scroll_into_view(id);
            self.settle_deadline = Some(now + SETTLE_DELAY);
        }
        self.measure(resolver);
    }

    /// Drop the target and highlight entirely.
    pub fn clear(&mut self) {
        self.target = None;
        self.highlight = None;
        self.needs_measure = false;
        self.settle_deadline = None;
    }

    /// Note a viewport change; the next tick remeasures.
    pub fn on_viewport_event(&mut self, _event: ViewportEvent) {
        if self.target.is_some() {
            self.needs_measure = true;
        }
    }

    /// Synchronously remeasure the highlight from the resolver.
    pub fn measure(&mut self, resolver: &dyn TargetResolver) {
        self.highlight = self
            .target
            .as_ref()
            .and_then(|id| resolver.resolve(id))
            .map(|r| r.expand(self.padding));
        self.needs_measure = false;
    }

    /// Process deadlines and pending invalidations.
    ///
    /// Returns `true` when the highlight changed.
    pub fn tick(&mut self, now: Instant, resolver: &dyn TargetResolver) -> bool {
        let settle_due = self.settle_deadline.is_some_and(|d| now >= d);
        if settle_due {
            self.settle_deadline = None;
        }
        if settle_due || self.needs_measure {
            let before = self.highlight;
            self.measure(resolver);
            return before != self.highlight;
        }
        false
    }

    /// The current highlight rectangle (target box plus padding), if the
    /// target resolved.
    #[must_use]
    pub fn highlight(&self) -> Option<Rect> {
        self.highlight
    }

    /// The current target id.
    #[must_use]
    pub fn target(&self) -> Option<&TargetId> {
        self.target.as_ref()
    }

    /// The pending settle deadline, for host tick scheduling.
    #[must_use]
    pub fn deadline(&self) -> Option<Instant> {
        self.settle_deadline
    }
}
