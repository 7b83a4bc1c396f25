#![forbid(unsafe_code)]

//! Spotlight and tooltip presentation for Waylight.
//!
//! Everything in this crate is synchronous geometry and state: given the
//! current step's target and the viewport, compute the highlight region,
//! the punched-hole overlay shape, the tooltip box, and the keyboard
//! bindings. No rendering happens here: hosts take the computed frame and
//! draw it with whatever they have (a DOM, a terminal buffer, a canvas).
//!
//! Timers are modelled as deadlines the host polls with its own tick: the
//! scroll-settle remeasure, the fade-out before unmount, and announcement
//! expiry all expose an `Instant` instead of spawning anything.

pub mod announce;
pub mod keymap;
pub mod spotlight;
pub mod tooltip;

pub use announce::{Announcement, AnnouncementBuffer, REMOVAL_DELAY};
pub use keymap::{NavAction, navigation_action};
pub use spotlight::{
    HitRegion, SETTLE_DELAY, SpotlightConfig, SpotlightController, SpotlightPalette,
    SpotlightVisibility, clip_polygon, mask_bands,
};
pub use tooltip::{TextMetrics, TooltipPosition, TooltipView, tooltip_position};
