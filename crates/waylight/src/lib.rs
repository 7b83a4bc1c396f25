#![forbid(unsafe_code)]

//! Waylight: a guided-tour engine for desktop applications.
//!
//! Waylight drives spotlight-and-tooltip product tours: a catalog of
//! step-by-step walkthroughs, a persisted progress store with prerequisite
//! gating, and the geometry to dim everything except the element the user
//! should look at. Rendering and input stay with the host; the engine is
//! pure state and math, which is also what makes it testable without a UI.
//!
//! # Quick start
//!
//! ```
//! use std::time::Instant;
//! use waylight::prelude::*;
//!
//! // Mount once at the application root.
//! let mut driver = TourDriver::new(
//!     std::sync::Arc::new(waylight::catalog::builtin().clone()),
//!     DriverConfig::default(),
//! );
//!
//! // Tell the driver what the host knows, tick it, draw what it returns.
//! let resolver = MapResolver::new(Size::new(1280.0, 720.0));
//! driver.update_host(
//!     HostContext { authenticated: true, route: "/dashboard".into() },
//!     Instant::now(),
//! );
//! driver.tick(Instant::now(), &resolver);
//! assert!(driver.frame(Size::new(1280.0, 720.0)).is_none());
//! ```
//!
//! Elements opt into being highlighted by carrying the `data-tour`
//! attribute (or the host's equivalent registry) and the host's
//! [`TargetResolver`] maps those ids to live bounding boxes.

pub use waylight_catalog as catalog;
pub use waylight_core as core;
pub use waylight_overlay as overlay;
#[cfg(feature = "runtime")]
pub use waylight_runtime as runtime;
pub use waylight_store as store;

/// The commonly used surface, for a single glob import.
pub mod prelude {
    pub use waylight_catalog::{
        Catalog, Category, StepAction, TourDefinition, TourId, TourStep,
    };
    pub use waylight_core::{
        KeyCode, KeyEvent, MapResolver, Modifiers, Placement, Point, Rect, Rgb, Size, TargetId,
        TargetResolver, ViewportEvent,
    };
    pub use waylight_overlay::{
        AnnouncementBuffer, NavAction, SpotlightConfig, TooltipPosition, TooltipView,
    };
    #[cfg(feature = "runtime")]
    pub use waylight_runtime::{
        CardStatus, DriverConfig, HostContext, HubCard, PageAutoStart, TourDriver, TourFrame,
        hub_cards,
    };
    pub use waylight_store::{
        FontSize, MemoryStorage, ProgressSummary, TourProgress, TourSettings, TourSettingsPatch,
        TourStatus, TourStore,
    };

    #[cfg(feature = "state-persistence")]
    pub use waylight_store::FileStorage;
}
