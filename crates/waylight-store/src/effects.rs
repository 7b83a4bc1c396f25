#![forbid(unsafe_code)]

//! Fire-and-forget effect capabilities.
//!
//! Announcements and the completion chime are best-effort side effects.
//! The contract for every trait here is the same: **never panic, never
//! block**. A missing audio device, an unavailable accessibility bus, or a
//! half-initialized host must not keep a step from advancing; implementations
//! swallow their own failures.
//!
//! The [`Clock`] capability exists so tests can pin timestamps instead of
//! reading the wall clock.

use std::cell::Cell;
use std::time::Duration;

use chrono::{DateTime, Utc};

/// Emits a polite screen-reader announcement.
///
/// Implementations must not panic or block; failures are swallowed.
pub trait Announcer {
    fn announce(&self, message: &str);
}

/// Discards announcements.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullAnnouncer;

impl Announcer for NullAnnouncer {
    fn announce(&self, _message: &str) {}
}

/// One note of a chime, offset from the start of playback.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChimeNote {
    pub frequency_hz: f32,
    pub offset: Duration,
}

/// A short synthesized cue the host's audio layer can render.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChimeSpec {
    pub notes: &'static [ChimeNote],
    /// Initial gain, ramped down exponentially over `duration`.
    pub gain: f32,
    pub duration: Duration,
}

/// The completion cue: a rising C5–E5–G5 arpeggio.
pub const COMPLETION_CHIME: ChimeSpec = ChimeSpec {
    notes: &[
        ChimeNote {
            frequency_hz: 523.25,
            offset: Duration::from_millis(0),
        },
        ChimeNote {
            frequency_hz: 659.25,
            offset: Duration::from_millis(100),
        },
        ChimeNote {
            frequency_hz: 783.99,
            offset: Duration::from_millis(200),
        },
    ],
    gain: 0.3,
    duration: Duration::from_millis(400),
};

/// Plays a chime through the host's audio output.
///
/// Implementations must not panic or block; absence of an audio subsystem is
/// handled by doing nothing.
pub trait AudioSink {
    fn play(&self, chime: &ChimeSpec);
}

/// Discards audio.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullAudio;

impl AudioSink for NullAudio {
    fn play(&self, _chime: &ChimeSpec) {}
}

/// Source of timestamps for progress records.
pub trait Clock {
    fn now(&self) -> DateTime<Utc>;
}

/// The wall clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// A settable clock for tests.
#[derive(Debug)]
pub struct FixedClock {
    now: Cell<DateTime<Utc>>,
}

impl FixedClock {
    /// Create a clock pinned to `now`.
    #[must_use]
    pub fn new(now: DateTime<Utc>) -> Self {
        Self { now: Cell::new(now) }
    }

    /// Move the clock.
    pub fn set(&self, now: DateTime<Utc>) {
        self.now.set(now);
    }

    /// Advance the clock by a duration.
    pub fn advance(&self, by: Duration) {
        let d = chrono::Duration::from_std(by).unwrap_or(chrono::Duration::zero());
        self.now.set(self.now.get() + d);
    }
}

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.now.get()
    }
}
