#![forbid(unsafe_code)]

//! Transient screen-reader announcements.
//!
//! DOM hosts surface these as short-lived polite live regions; terminal
//! hosts can pipe them to whatever accessibility channel exists. Entries
//! expire after [`REMOVAL_DELAY`] so assistive tech reads each once and the
//! tree does not accumulate stale status nodes.

use std::collections::VecDeque;
use std::time::{Duration, Instant};

/// How long an announcement stays mounted before removal.
pub const REMOVAL_DELAY: Duration = Duration::from_millis(1000);

/// One pending announcement.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Announcement {
    pub message: String,
    pub expires_at: Instant,
}

/// FIFO of live announcements with expiry.
#[derive(Debug, Clone, Default)]
pub struct AnnouncementBuffer {
    entries: VecDeque<Announcement>,
}

impl AnnouncementBuffer {
    /// An empty buffer.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue an announcement, expiring [`REMOVAL_DELAY`] from `now`.
    pub fn push(&mut self, message: impl Into<String>, now: Instant) {
        self.entries.push_back(Announcement {
            message: message.into(),
            expires_at: now + REMOVAL_DELAY,
        });
    }

    /// Drop expired entries, returning how many were removed.
    pub fn expire(&mut self, now: Instant) -> usize {
        let before = self.entries.len();
        self.entries.retain(|a| a.expires_at > now);
        before - self.entries.len()
    }

    /// Entries still live, oldest first.
    pub fn live(&self) -> impl Iterator<Item = &Announcement> {
        self.entries.iter()
    }

    /// The earliest pending expiry, for host tick scheduling.
    #[must_use]
    pub fn next_deadline(&self) -> Option<Instant> {
        self.entries.iter().map(|a| a.expires_at).min()
    }

    /// Number of live entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the buffer has no live entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
