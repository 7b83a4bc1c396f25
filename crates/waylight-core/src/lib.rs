#![forbid(unsafe_code)]

//! Core primitives for the Waylight guided-tour engine.
//!
//! This crate holds the pieces every other Waylight crate builds on:
//!
//! - [`geometry`]: pixel-space rectangles and points for highlight and
//!   tooltip math
//! - [`event`]: canonical key events and viewport change signals
//! - [`placement`]: tooltip anchoring hints
//! - [`target`]: the logical-target resolution capability that decouples
//!   the engine from any concrete UI tree
//! - [`color`]: the small color vocabulary used by the overlay palette
//!
//! Nothing here touches a live UI. Hosts implement [`target::TargetResolver`]
//! against their widget tree (or DOM, or test fixture) and feed input through
//! the canonical event types.

pub mod color;
pub mod event;
pub mod geometry;
pub mod placement;
pub mod target;

pub use color::Rgb;
pub use event::{KeyCode, KeyEvent, Modifiers, ViewportEvent};
pub use geometry::{Point, Rect, Size};
pub use placement::Placement;
pub use target::{MapResolver, TargetId, TargetResolver};
