#![forbid(unsafe_code)]

//! The mount-once tour driver.

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;
use std::sync::Arc;
use std::time::{Duration, Instant};

use waylight_catalog::{Catalog, StepAction, TourId};
use waylight_core::event::KeyEvent;
use waylight_core::geometry::{Point, Rect, Size};
use waylight_core::target::TargetResolver;
use waylight_overlay::announce::{Announcement, AnnouncementBuffer};
use waylight_overlay::keymap::{NavAction, navigation_action};
use waylight_overlay::spotlight::{
    HitRegion, SpotlightConfig, SpotlightController, SpotlightPalette, SpotlightVisibility,
    clip_polygon, hit_test, mask_bands,
};
use waylight_overlay::tooltip::{TextMetrics, TooltipPosition, TooltipView, tooltip_position};
use waylight_store::{Announcer, TourStatus, TourStore};

/// What the host application knows that the tour engine must respect.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HostContext {
    /// Tours never auto-start or stay active for an unauthenticated user.
    pub authenticated: bool,
    /// Current route path, checked against the restricted list.
    pub route: String,
}

impl Default for HostContext {
    fn default() -> Self {
        Self {
            authenticated: false,
            route: "/".to_string(),
        }
    }
}

/// Driver configuration.
#[derive(Debug, Clone)]
pub struct DriverConfig {
    /// Route prefixes where tours are suppressed entirely.
    pub restricted_routes: Vec<String>,
    /// Delay before the welcome tour auto-starts on first login, letting
    /// the surrounding UI finish mounting.
    pub welcome_delay: Duration,
    /// Spotlight visuals.
    pub spotlight: SpotlightConfig,
    /// Character metrics for tooltip size estimation.
    pub metrics: TextMetrics,
}

impl Default for DriverConfig {
    fn default() -> Self {
        Self {
            restricted_routes: vec![
                "/login".to_string(),
                "/setup".to_string(),
                "/license".to_string(),
            ],
            welcome_delay: Duration::from_millis(2000),
            spotlight: SpotlightConfig::default(),
            metrics: TextMetrics::default(),
        }
    }
}

impl DriverConfig {
    /// Replace the restricted route prefixes.
    #[must_use]
    pub fn restricted_routes<I, S>(mut self, routes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.restricted_routes = routes.into_iter().map(Into::into).collect();
        self
    }

    /// Delay before the welcome tour auto-starts.
    #[must_use]
    pub fn welcome_delay(mut self, delay: Duration) -> Self {
        self.welcome_delay = delay;
        self
    }

    /// Spotlight visuals.
    #[must_use]
    pub fn spotlight(mut self, spotlight: SpotlightConfig) -> Self {
        self.spotlight = spotlight;
        self
    }

    /// Whether a route is suppressed.
    #[must_use]
    pub fn is_restricted(&self, route: &str) -> bool {
        self.restricted_routes.iter().any(|r| route.starts_with(r.as_str()))
    }
}

/// [`Announcer`] backed by a shared [`AnnouncementBuffer`].
///
/// The store pushes through this; the driver expires entries on its tick
/// and the host renders whatever is live.
#[derive(Clone)]
pub struct BufferAnnouncer {
    buffer: Rc<RefCell<AnnouncementBuffer>>,
}

impl BufferAnnouncer {
    /// Wrap a shared buffer.
    #[must_use]
    pub fn new(buffer: Rc<RefCell<AnnouncementBuffer>>) -> Self {
        Self { buffer }
    }
}

impl Announcer for BufferAnnouncer {
    fn announce(&self, message: &str) {
        self.buffer.borrow_mut().push(message, Instant::now());
    }
}

/// The tooltip part of a frame.
#[derive(Debug, Clone, PartialEq)]
pub struct TooltipFrame {
    pub view: TooltipView,
    pub position: TooltipPosition,
    pub size: Size,
}

/// Everything there is to draw for the current tick.
///
/// `None` from [`TourDriver::frame`] means the overlay is fully unmounted.
/// A frame with `fading = true` and no tooltip is the fade-out tail: keep
/// drawing the dim layer while the host's fade animation plays out.
#[derive(Debug, Clone, PartialEq)]
pub struct TourFrame {
    /// The punched-out highlight region, if the step has a resolved target.
    pub hole: Option<Rect>,
    /// Punched-hole polygon for path-clipping hosts.
    pub clip: Option<[Point; 10]>,
    /// Dimmed regions for rect-blitting hosts. Covers the whole viewport
    /// when there is no hole (centered overlay).
    pub bands: Vec<Rect>,
    pub palette: SpotlightPalette,
    pub border_radius: f32,
    pub pulse: bool,
    pub fading: bool,
    /// Whether clicking the hole advances the step.
    pub target_clickable: bool,
    pub tooltip: Option<TooltipFrame>,
}

type Hook = Box<dyn FnMut()>;

#[derive(Default)]
struct HookTable {
    on_enter: HashMap<String, Hook>,
    on_complete: HashMap<String, Hook>,
}

/// Coordinates store, catalog, overlay, and host context.
///
/// Single-threaded: all mutations happen on the UI event loop, in call
/// order.
pub struct TourDriver {
    store: TourStore,
    config: DriverConfig,
    host: HostContext,
    controller: SpotlightController,
    visibility: SpotlightVisibility,
    announcements: Rc<RefCell<AnnouncementBuffer>>,
    hooks: HookTable,
    welcome_deadline: Option<Instant>,
    synced_step: Option<(TourId, usize)>,
    /// Last highlight shown, kept for the fade-out tail.
    fade_hole: Option<Rect>,
}

impl TourDriver {
    /// Build a driver and its store over `catalog`, with announcements
    /// wired into the driver's buffer.
    #[must_use]
    pub fn new(catalog: Arc<Catalog>, config: DriverConfig) -> Self {
        let announcements = Rc::new(RefCell::new(AnnouncementBuffer::new()));
        let store = TourStore::new(catalog)
            .with_announcer(Box::new(BufferAnnouncer::new(Rc::clone(&announcements))));
        Self::from_parts(store, announcements, config)
    }

    /// Build a driver over a store the host assembled itself (custom
    /// backend, clock, or effects).
    #[must_use]
    pub fn from_store(store: TourStore, config: DriverConfig) -> Self {
        Self::from_parts(store, Rc::new(RefCell::new(AnnouncementBuffer::new())), config)
    }

    fn from_parts(
        store: TourStore,
        announcements: Rc<RefCell<AnnouncementBuffer>>,
        config: DriverConfig,
    ) -> Self {
        let controller = SpotlightController::new(config.spotlight.padding);
        Self {
            store,
            config,
            host: HostContext::default(),
            controller,
            visibility: SpotlightVisibility::new(),
            announcements,
            hooks: HookTable::default(),
            welcome_deadline: None,
            synced_step: None,
            fade_hole: None,
        }
    }

    /// The underlying store, for queries.
    #[must_use]
    pub fn store(&self) -> &TourStore {
        &self.store
    }

    /// The underlying store, for direct operations (hub buttons, settings
    /// screens).
    pub fn store_mut(&mut self) -> &mut TourStore {
        &mut self.store
    }

    /// Register a hook fired when the step becomes current.
    pub fn on_step_enter(&mut self, step_id: impl Into<String>, hook: impl FnMut() + 'static) {
        self.hooks.on_enter.insert(step_id.into(), Box::new(hook));
    }

    /// Register a hook fired just before the step is advanced past.
    pub fn on_step_complete(&mut self, step_id: impl Into<String>, hook: impl FnMut() + 'static) {
        self.hooks.on_complete.insert(step_id.into(), Box::new(hook));
    }

    // ── Host context ────────────────────────────────────────────────────

    /// Feed the current auth flag and route.
    ///
    /// An active tour is force-skipped the moment the user is no longer
    /// authenticated or lands on a restricted route. The welcome auto-start
    /// is (re)scheduled or cancelled as its conditions change.
    pub fn update_host(&mut self, host: HostContext, now: Instant) {
        self.host = host;

        let suppressed =
            !self.host.authenticated || self.config.is_restricted(&self.host.route);
        if suppressed && self.store.active().is_some() {
            tracing::debug!(route = %self.host.route, "force-skipping active tour");
            self.store.skip();
        }

        if self.welcome_conditions_hold() {
            if self.welcome_deadline.is_none() {
                self.welcome_deadline = Some(now + self.config.welcome_delay);
            }
        } else {
            self.welcome_deadline = None;
        }
    }

    fn welcome_conditions_hold(&self) -> bool {
        let settings = self.store.settings();
        settings.enabled
            && settings.show_welcome_on_first_login
            && self.host.authenticated
            && !self.config.is_restricted(&self.host.route)
            && self.store.active().is_none()
            && self
                .store
                .progress(TourId::Welcome)
                .is_none_or(|p| p.status == TourStatus::NotStarted)
    }

    // ── Ticking ─────────────────────────────────────────────────────────

    /// Process elapsed deadlines and keep the overlay in sync.
    ///
    /// Call on the host's cadence, or at [`deadline`](Self::deadline).
    pub fn tick(&mut self, now: Instant, resolver: &dyn TargetResolver) {
        if let Some(due) = self.welcome_deadline
            && now >= due
        {
            self.welcome_deadline = None;
            // Conditions are re-checked at fire time; anything may have
            // changed while the delay ran.
            if self.welcome_conditions_hold() {
                self.store.start(TourId::Welcome);
            }
        }

        self.sync_step(resolver, now);
        self.controller.tick(now, resolver);

        let fade = self
            .config
            .spotlight
            .scaled_transition(self.store.settings().animation_speed);
        let active = self.overlay_active();
        if active {
            self.fade_hole = self.controller.highlight();
        }
        self.visibility.set_active(active, now, fade);
        self.visibility.poll(now);

        self.announcements.borrow_mut().expire(now);
    }

    /// Forward a viewport change (resize, scroll, mutation) to the
    /// spotlight controller. The next tick remeasures.
    pub fn on_viewport_event(&mut self, event: waylight_core::event::ViewportEvent) {
        self.controller.on_viewport_event(event);
    }

    fn sync_step(&mut self, resolver: &dyn TargetResolver, now: Instant) {
        let key = self.store.current().map(|c| (c.tour, c.step));
        if key == self.synced_step {
            return;
        }
        self.synced_step = key;

        let step_info = self
            .store
            .current_step_def()
            .map(|s| (s.id, s.target.clone()));
        match step_info {
            Some((step_id, target)) => {
                self.controller.set_target(target, resolver, now);
                if let Some(hook) = self.hooks.on_enter.get_mut(step_id) {
                    hook();
                }
            }
            None => self.controller.clear(),
        }
    }

    fn overlay_active(&self) -> bool {
        self.store.settings().enabled
            && !self.store.is_paused()
            && self.store.is_spotlight_visible()
            && self.store.current_step_def().is_some()
    }

    // ── Input ───────────────────────────────────────────────────────────

    /// Handle a key press. Bindings are live only while the tooltip shows.
    pub fn on_key(&mut self, key: KeyEvent) {
        let Some(current) = self.store.current() else {
            return;
        };
        match navigation_action(key, self.overlay_active(), current.step) {
            Some(NavAction::Next) => self.advance(),
            Some(NavAction::Previous) => self.store.previous_step(),
            Some(NavAction::Close) => self.store.pause(),
            Some(NavAction::Skip) => self.store.skip(),
            None => {}
        }
    }

    /// Handle a pointer press at `point`.
    ///
    /// Clicks over the highlighted element advance `click`-gated steps;
    /// clicks on the dimmed outside do nothing: navigation stays explicit.
    pub fn on_pointer(&mut self, point: Point, viewport: Size) {
        if !self.overlay_active() {
            return;
        }
        let hole = self.controller.highlight();
        let tooltip = self.tooltip_rect(viewport);
        match hit_test(point, hole, tooltip) {
            HitRegion::Target => {
                if self.store.current_step_def().and_then(|s| s.action)
                    == Some(StepAction::Click)
                {
                    self.advance();
                }
            }
            HitRegion::Tooltip | HitRegion::Outside => {}
        }
    }

    fn advance(&mut self) {
        if let Some(step_id) = self.store.current_step_def().map(|s| s.id)
            && let Some(hook) = self.hooks.on_complete.get_mut(step_id)
        {
            hook();
        }
        self.store.next_step();
    }

    // ── Output ──────────────────────────────────────────────────────────

    /// Route the host should navigate to for the current step, if it is
    /// not already there. Suppressed while paused.
    #[must_use]
    pub fn navigation_request(&self) -> Option<&str> {
        if self.store.is_paused() {
            return None;
        }
        let route = self.store.current_step_def()?.route.as_deref()?;
        (route != self.host.route).then_some(route)
    }

    /// Compute the drawable frame, or `None` when fully unmounted.
    #[must_use]
    pub fn frame(&self, viewport: Size) -> Option<TourFrame> {
        if !self.visibility.is_mounted() {
            return None;
        }
        let settings = self.store.settings();
        // Disabling tours unmounts instantly; there is no fade tail for a
        // feature the user just turned off.
        if !settings.enabled {
            return None;
        }
        let palette = SpotlightPalette::resolve(&self.config.spotlight, settings.high_contrast);

        if !self.overlay_active() {
            // Fade-out tail: dim layer only, tooltip already gone.
            let hole = self.fade_hole;
            return Some(TourFrame {
                hole,
                clip: hole.map(|h| clip_polygon(viewport, h)),
                bands: hole
                    .map(|h| mask_bands(viewport, h))
                    .unwrap_or_else(|| vec![Rect::from_size(viewport)]),
                palette,
                border_radius: self.config.spotlight.border_radius,
                pulse: self.config.spotlight.pulse,
                fading: true,
                target_clickable: false,
                tooltip: None,
            });
        }

        let current = self.store.current()?;
        let step = self.store.current_step_def()?;
        let hole = self.controller.highlight();

        let view = TooltipView::build(
            step,
            current.step,
            current.total,
            settings.font_size,
            settings.high_contrast,
        );
        let size = view.estimate_size(&self.config.metrics, viewport);
        let position = tooltip_position(step.placement, hole, size, viewport);

        Some(TourFrame {
            hole,
            clip: hole.map(|h| clip_polygon(viewport, h)),
            bands: hole
                .map(|h| mask_bands(viewport, h))
                .unwrap_or_else(|| vec![Rect::from_size(viewport)]),
            palette,
            border_radius: self.config.spotlight.border_radius,
            pulse: self.config.spotlight.pulse,
            fading: self.visibility.is_fading(),
            target_clickable: step.action == Some(StepAction::Click),
            tooltip: Some(TooltipFrame {
                view,
                position,
                size,
            }),
        })
    }

    fn tooltip_rect(&self, viewport: Size) -> Option<Rect> {
        let current = self.store.current()?;
        let step = self.store.current_step_def()?;
        let settings = self.store.settings();
        let view = TooltipView::build(
            step,
            current.step,
            current.total,
            settings.font_size,
            settings.high_contrast,
        );
        let size = view.estimate_size(&self.config.metrics, viewport);
        let origin = match tooltip_position(step.placement, self.controller.highlight(), size, viewport)
        {
            TooltipPosition::Centered => {
                let c = viewport.center();
                Point::new(c.x - size.width / 2.0, c.y - size.height / 2.0)
            }
            TooltipPosition::At(p) => p,
        };
        Some(Rect::new(origin.x, origin.y, size.width, size.height))
    }

    /// Live screen-reader announcements, oldest first.
    #[must_use]
    pub fn announcements(&self) -> Vec<Announcement> {
        self.announcements.borrow().live().cloned().collect()
    }

    /// The earliest pending deadline across every suspended behavior.
    ///
    /// Hosts that schedule exact wakeups tick once at this instant; hosts
    /// on a fixed cadence can ignore it.
    #[must_use]
    pub fn deadline(&self) -> Option<Instant> {
        [
            self.welcome_deadline,
            self.controller.deadline(),
            self.visibility.deadline(),
            self.announcements.borrow().next_deadline(),
        ]
        .into_iter()
        .flatten()
        .min()
    }
}

impl std::fmt::Debug for TourDriver {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TourDriver")
            .field("store", &self.store)
            .field("host", &self.host)
            .field("welcome_deadline", &self.welcome_deadline)
            .field("synced_step", &self.synced_step)
            .finish()
    }
}
