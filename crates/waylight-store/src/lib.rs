#![forbid(unsafe_code)]

//! The tour progress store.
//!
//! [`TourStore`] is the single source of truth for the active tour session,
//! persisted per-tour progress, and user settings. It enforces the tour
//! lifecycle state machine:
//!
//! ```text
//! not-started ──start──▶ in-progress ──complete──▶ completed
//!                            │    ▲                    │
//!                          skip   └──────start─────────┤
//!                            ▼                         │
//!                         skipped ───────start─────────┘
//!        (reset returns any state to not-started)
//! ```
//!
//! Every operation is a total function: invalid calls (unknown id, no active
//! tour, index out of range) are warning-logged no-ops, never panics or
//! errors. They are invoked from UI event handlers where failure must not
//! break rendering.
//!
//! The store is an explicitly owned value, injected where it is needed.
//! There is no ambient global: lifecycle and test isolation stay visible at
//! the call sites.

pub mod effects;
pub mod persist;
pub mod progress;
pub mod settings;
pub mod store;

pub use effects::{
    Announcer, AudioSink, COMPLETION_CHIME, ChimeNote, ChimeSpec, Clock, FixedClock,
    NullAnnouncer, NullAudio, SystemClock,
};
#[cfg(feature = "state-persistence")]
pub use persist::FileStorage;
pub use persist::{MemoryStorage, PersistedState, StorageBackend, StorageError, StorageResult};
pub use progress::{TourProgress, TourStatus};
pub use settings::{FontSize, TourSettings, TourSettingsPatch};
pub use store::{CurrentStep, ProgressSummary, TourStore};
