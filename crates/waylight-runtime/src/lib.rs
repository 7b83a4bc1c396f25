#![forbid(unsafe_code)]

//! The Waylight runtime driver.
//!
//! [`TourDriver`] is the piece a host mounts exactly once at its root. It
//! owns the progress store, keeps the spotlight in sync with the active
//! step, translates input into store operations, applies the host's
//! auth/route veto rules, and hands back a [`driver::TourFrame`] describing
//! everything there is to draw.
//!
//! The driver is deadline-driven: it never spawns threads or timers.
//! Hosts call [`TourDriver::tick`] on their own cadence (or exactly at
//! [`TourDriver::deadline`]) and every suspended behavior (welcome
//! auto-start, scroll settle, fade-out, announcement expiry) resolves on
//! the tick after its deadline passes. Dropping the driver drops every
//! pending deadline with it.

pub mod autostart;
pub mod driver;
pub mod hub;

pub use autostart::PageAutoStart;
pub use driver::{
    BufferAnnouncer, DriverConfig, HostContext, TooltipFrame, TourDriver, TourFrame,
};
pub use hub::{CardStatus, HubCard, hub_cards};
