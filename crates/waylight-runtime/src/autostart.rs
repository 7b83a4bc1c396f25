#![forbid(unsafe_code)]

//! Per-page tour auto-start.
//!
//! A page can arm one of these when it mounts to offer its own tour after a
//! short delay: the inventory screen starting the inventory tour the first
//! time someone opens it, for example. The welcome tour has its own
//! dedicated path in the driver; this is for everything else.

use std::time::{Duration, Instant};

use waylight_catalog::TourId;
use waylight_store::{TourStatus, TourStore};

/// Default delay between page mount and auto-start.
pub const DEFAULT_PAGE_DELAY: Duration = Duration::from_millis(500);

/// A cancellable, delayed auto-start for one tour.
#[derive(Debug, Clone)]
pub struct PageAutoStart {
    tour: TourId,
    delay: Duration,
    only_first_visit: bool,
    deadline: Option<Instant>,
}

impl PageAutoStart {
    /// Auto-start `tour` after [`DEFAULT_PAGE_DELAY`].
    #[must_use]
    pub fn new(tour: TourId) -> Self {
        Self {
            tour,
            delay: DEFAULT_PAGE_DELAY,
            only_first_visit: false,
            deadline: None,
        }
    }

    /// Use a custom delay.
    #[must_use]
    pub fn delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    /// Only fire if the tour has never been started, completed, or skipped.
    #[must_use]
    pub fn only_first_visit(mut self) -> Self {
        self.only_first_visit = true;
        self
    }

    /// Arm the timer on page mount.
    ///
    /// Does nothing when tours are disabled, another tour is active,
    /// prerequisites are unmet, or (with `only_first_visit`) the tour was
    /// already seen.
    pub fn arm(&mut self, store: &TourStore, now: Instant) {
        self.deadline = None;
        if !store.settings().enabled || store.active().is_some() || !store.can_start(self.tour) {
            return;
        }
        if store.catalog().get(self.tour).is_none() {
            return;
        }
        if self.only_first_visit
            && store
                .progress(self.tour)
                .is_some_and(|p| p.status != TourStatus::NotStarted)
        {
            return;
        }
        self.deadline = Some(now + self.delay);
    }

    /// Cancel on page unmount.
    pub fn cancel(&mut self) {
        self.deadline = None;
    }

    /// Fire if due. Returns whether the tour was started.
    pub fn tick(&mut self, store: &mut TourStore, now: Instant) -> bool {
        let Some(due) = self.deadline else {
            return false;
        };
        if now < due {
            return false;
        }
        self.deadline = None;
        // The page may have changed underneath the delay.
        if store.active().is_some() {
            return false;
        }
        store.start(self.tour);
        store.active() == Some(self.tour)
    }

    /// The pending deadline, for host tick scheduling.
    #[must_use]
    pub fn deadline(&self) -> Option<Instant> {
        self.deadline
    }
}
