#![forbid(unsafe_code)]

//! The tour progress store.

use std::collections::BTreeMap;
use std::fmt;
use std::sync::Arc;

use waylight_catalog::{Catalog, TourDefinition, TourId, TourStep};
use waylight_core::TargetId;

use crate::effects::{
    Announcer, AudioSink, COMPLETION_CHIME, Clock, NullAnnouncer, NullAudio, SystemClock,
};
use crate::persist::{MemoryStorage, PersistedState, STATE_FORMAT_VERSION, StorageBackend};
use crate::progress::{TourProgress, TourStatus};
use crate::settings::{TourSettings, TourSettingsPatch};

/// Overall completion summary across the catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProgressSummary {
    pub completed: usize,
    pub total: usize,
    /// `round(completed / total * 100)`; zero when the catalog is empty.
    pub percentage: u8,
}

/// Descriptor of the step currently being shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CurrentStep {
    pub tour: TourId,
    /// Zero-based index into the tour's steps.
    pub step: usize,
    pub total: usize,
}

/// Single source of truth for tour session state, progress, and settings.
///
/// All mutations are synchronous and total: invalid calls are
/// warning-logged no-ops. Every mutation of the persisted subset
/// (`progress` + `settings`) is followed by a best-effort save; a failing
/// backend degrades the store to memory-only behavior.
pub struct TourStore {
    catalog: Arc<Catalog>,
    backend: Box<dyn StorageBackend>,
    clock: Box<dyn Clock>,
    announcer: Box<dyn Announcer>,
    audio: Box<dyn AudioSink>,

    active: Option<TourId>,
    current_step: usize,
    paused: bool,
    spotlight_visible: bool,
    progress: BTreeMap<TourId, TourProgress>,
    settings: TourSettings,
}

impl TourStore {
    /// Create a store over `catalog` with in-memory persistence, the system
    /// clock, and no-op effects.
    #[must_use]
    pub fn new(catalog: Arc<Catalog>) -> Self {
        Self {
            catalog,
            backend: Box::new(MemoryStorage::new()),
            clock: Box::new(SystemClock),
            announcer: Box::new(NullAnnouncer),
            audio: Box::new(NullAudio),
            active: None,
            current_step: 0,
            paused: false,
            spotlight_visible: false,
            progress: BTreeMap::new(),
            settings: TourSettings::default(),
        }
    }

    /// Use a persistence backend. Call [`load`](Self::load) afterwards to
    /// hydrate from it.
    #[must_use]
    pub fn with_backend(mut self, backend: Box<dyn StorageBackend>) -> Self {
        self.backend = backend;
        self
    }

    /// Use a clock other than the system clock.
    #[must_use]
    pub fn with_clock(mut self, clock: Box<dyn Clock>) -> Self {
        self.clock = clock;
        self
    }

    /// Wire a screen-reader announcer.
    #[must_use]
    pub fn with_announcer(mut self, announcer: Box<dyn Announcer>) -> Self {
        self.announcer = announcer;
        self
    }

    /// Wire an audio sink for the completion chime.
    #[must_use]
    pub fn with_audio(mut self, audio: Box<dyn AudioSink>) -> Self {
        self.audio = audio;
        self
    }

    /// Hydrate progress and settings from the backend.
    ///
    /// Unknown tour ids in the stored document are skipped with a warning:
    /// the catalog may have changed between releases. Load failures leave
    /// the store at defaults.
    pub fn load(&mut self) {
        match self.backend.load() {
            Ok(Some(state)) => {
                for (key, record) in state.progress {
                    match key.parse::<TourId>() {
                        Ok(id) => {
                            self.progress.insert(id, record);
                        }
                        Err(_) => {
                            tracing::warn!(id = %key, "skipping progress for unknown tour");
                        }
                    }
                }
                self.settings = state.settings;
                tracing::debug!(
                    backend = %self.backend.name(),
                    tours = self.progress.len(),
                    "loaded tour state"
                );
            }
            Ok(None) => {}
            Err(e) => {
                tracing::warn!(backend = %self.backend.name(), error = %e, "failed to load tour state");
            }
        }
    }

    fn persist(&self) {
        let state = PersistedState {
            format_version: STATE_FORMAT_VERSION,
            progress: self
                .progress
                .iter()
                .map(|(id, p)| (id.as_str().to_string(), p.clone()))
                .collect(),
            settings: self.settings.clone(),
        };
        if let Err(e) = self.backend.save(&state) {
            tracing::warn!(backend = %self.backend.name(), error = %e, "failed to save tour state");
        }
    }

    // ── Navigation ──────────────────────────────────────────────────────

    /// Start (or resume) a tour.
    ///
    /// No-op when tours are disabled, the id is not in the catalog, or
    /// prerequisites are unmet. Resuming an in-progress tour lands on its
    /// saved step; restarting a finished one starts over at step 0 while
    /// keeping `started_at` and previously completed steps.
    pub fn start(&mut self, id: TourId) {
        let Some((name, total)) = self
            .catalog
            .get(id)
            .map(|def| (def.name.clone(), def.steps.len()))
        else {
            tracing::warn!(tour = %id, "start ignored: not in catalog");
            return;
        };
        if !self.settings.enabled {
            tracing::debug!(tour = %id, "start ignored: tours disabled");
            return;
        }
        if !self.can_start(id) {
            tracing::warn!(tour = %id, "start ignored: prerequisites not met");
            return;
        }

        let now = self.clock.now();
        let mut record = self
            .progress
            .get(&id)
            .cloned()
            .unwrap_or_else(|| TourProgress::fresh(id));
        let start_step = if record.status == TourStatus::InProgress {
            record.current_step
        } else {
            0
        };
        record.status = TourStatus::InProgress;
        record.current_step = start_step;
        // First start only; restarts keep the original timestamp.
        record.started_at = record.started_at.or(Some(now));
        record.last_viewed_at = Some(now);
        self.progress.insert(id, record);

        self.active = Some(id);
        self.current_step = start_step;
        self.paused = false;
        self.spotlight_visible = true;
        self.persist();

        if self.settings.screen_reader_announcements {
            self.announcer
                .announce(&format!("Tutorial started: {name}. Step 1 of {total}."));
        }
    }

    /// Mark the current step completed and advance.
    ///
    /// Completing the last step finishes the tour instead.
    pub fn next_step(&mut self) {
        let Some(id) = self.active else {
            tracing::debug!("next_step ignored: no active tour");
            return;
        };
        let Some((step_id, total, next_title)) = self.catalog.get(id).map(|def| {
            (
                def.steps.get(self.current_step).map(|s| s.id),
                def.steps.len(),
                def.steps.get(self.current_step + 1).map(|s| s.title.clone()),
            )
        }) else {
            return;
        };

        let now = self.clock.now();
        if let Some(step_id) = step_id
            && let Some(record) = self.progress.get_mut(&id)
        {
            record.mark_step_completed(step_id);
        }

        let next_index = self.current_step + 1;
        if next_index >= total {
            self.complete();
            return;
        }

        self.current_step = next_index;
        if let Some(record) = self.progress.get_mut(&id) {
            record.current_step = next_index;
            record.last_viewed_at = Some(now);
        }
        self.persist();

        if self.settings.screen_reader_announcements
            && let Some(title) = next_title
        {
            self.announcer
                .announce(&format!("Step {} of {total}: {title}", next_index + 1));
        }
    }

    /// Go back one step. No-op at step 0.
    ///
    /// Only the session index moves; the persisted record keeps its
    /// high-water mark so resuming returns to the furthest step reached.
    pub fn previous_step(&mut self) {
        let Some(id) = self.active else {
            return;
        };
        if self.current_step == 0 {
            return;
        }

        self.current_step -= 1;

        if self.settings.screen_reader_announcements
            && let Some(title) = self
                .catalog
                .get(id)
                .and_then(|def| def.steps.get(self.current_step))
                .map(|s| s.title.clone())
        {
            self.announcer
                .announce(&format!("Back to step {}: {title}", self.current_step + 1));
        }
    }

    /// Jump directly to a step. No-op when the index is out of range.
    pub fn go_to_step(&mut self, index: usize) {
        let Some(id) = self.active else {
            return;
        };
        let total = self.catalog.get(id).map_or(0, |def| def.steps.len());
        if index >= total {
            tracing::warn!(tour = %id, index, total, "go_to_step ignored: out of range");
            return;
        }

        let now = self.clock.now();
        self.current_step = index;
        if let Some(record) = self.progress.get_mut(&id) {
            record.current_step = index;
            record.last_viewed_at = Some(now);
        }
        self.persist();
    }

    /// Pause: hides the spotlight without ending the session.
    pub fn pause(&mut self) {
        self.paused = true;
        self.spotlight_visible = false;
    }

    /// Resume from pause.
    pub fn resume(&mut self) {
        self.paused = false;
        self.spotlight_visible = true;
    }

    /// Abandon the active tour, marking it skipped.
    ///
    /// Completed steps are left as they were.
    pub fn skip(&mut self) {
        let Some(id) = self.active else {
            return;
        };

        let now = self.clock.now();
        self.active = None;
        self.current_step = 0;
        self.paused = false;
        self.spotlight_visible = false;
        if let Some(record) = self.progress.get_mut(&id) {
            record.status = TourStatus::Skipped;
            record.last_viewed_at = Some(now);
        }
        self.persist();
    }

    /// Finish the active tour.
    ///
    /// All step ids are recorded as completed, whether or not each was
    /// actually visited.
    pub fn complete(&mut self) {
        let Some(id) = self.active else {
            return;
        };
        let (name, step_ids) = self
            .catalog
            .get(id)
            .map(|def| (def.name.clone(), def.step_ids()))
            .unwrap_or_else(|| (id.to_string(), Vec::new()));

        let now = self.clock.now();
        self.active = None;
        self.current_step = 0;
        self.paused = false;
        self.spotlight_visible = false;

        let record = self
            .progress
            .entry(id)
            .or_insert_with(|| TourProgress::fresh(id));
        record.status = TourStatus::Completed;
        record.completed_steps = step_ids;
        record.completed_at = Some(now);
        record.last_viewed_at = Some(now);
        self.persist();

        if self.settings.screen_reader_announcements {
            self.announcer
                .announce(&format!("Tutorial completed: {name}"));
        }
        if self.settings.sound_enabled {
            self.audio.play(&COMPLETION_CHIME);
        }
    }

    /// Replace a tour's progress with a fresh not-started record.
    ///
    /// Resetting the currently active tour also ends its session, so no
    /// session state is left pointing at a record that no longer matches.
    pub fn reset(&mut self, id: TourId) {
        if self.active == Some(id) {
            self.active = None;
            self.current_step = 0;
            self.paused = false;
            self.spotlight_visible = false;
        }
        self.progress.insert(id, TourProgress::fresh(id));
        self.persist();
    }

    // ── Presentation flags ──────────────────────────────────────────────

    /// Show the spotlight overlay.
    pub fn show_spotlight(&mut self) {
        self.spotlight_visible = true;
    }

    /// Hide the spotlight overlay.
    pub fn hide_spotlight(&mut self) {
        self.spotlight_visible = false;
    }

    // ── Settings ────────────────────────────────────────────────────────

    /// Shallow-merge a settings patch.
    pub fn update_settings(&mut self, patch: &TourSettingsPatch) {
        patch.apply(&mut self.settings);
        self.persist();
    }

    /// Turn tours on.
    pub fn enable(&mut self) {
        self.settings.enabled = true;
        self.persist();
    }

    /// Turn tours off, force-ending any active session.
    ///
    /// Persisted progress is untouched: a tour that was in progress resumes
    /// where it left off once tours are re-enabled.
    pub fn disable(&mut self) {
        self.settings.enabled = false;
        self.active = None;
        self.spotlight_visible = false;
        self.persist();
    }

    /// Flip the high-contrast setting.
    pub fn toggle_high_contrast(&mut self) {
        self.settings.high_contrast = !self.settings.high_contrast;
        self.persist();
    }

    /// Flip the completion-sound setting.
    pub fn toggle_sound(&mut self) {
        self.settings.sound_enabled = !self.settings.sound_enabled;
        self.persist();
    }

    // ── Queries ─────────────────────────────────────────────────────────

    /// Progress for a tour; `None` means never started.
    #[must_use]
    pub fn progress(&self, id: TourId) -> Option<&TourProgress> {
        self.progress.get(&id)
    }

    /// Whether a step of a tour has been completed.
    #[must_use]
    pub fn is_step_completed(&self, id: TourId, step_id: &str) -> bool {
        self.progress
            .get(&id)
            .is_some_and(|p| p.is_step_completed(step_id))
    }

    /// Ids of all completed tours, in catalog id order.
    #[must_use]
    pub fn completed_tours(&self) -> Vec<TourId> {
        self.progress
            .iter()
            .filter(|(_, p)| p.status == TourStatus::Completed)
            .map(|(id, _)| *id)
            .collect()
    }

    /// Completion summary across the whole catalog.
    #[must_use]
    pub fn total_progress(&self) -> ProgressSummary {
        let total = self.catalog.len();
        if total == 0 {
            return ProgressSummary {
                completed: 0,
                total: 0,
                percentage: 0,
            };
        }
        let completed = self.completed_tours().len();
        ProgressSummary {
            completed,
            total,
            percentage: ((completed as f64 / total as f64) * 100.0).round() as u8,
        }
    }

    /// Whether a tour's prerequisites are all completed.
    #[must_use]
    pub fn can_start(&self, id: TourId) -> bool {
        let Some(def) = self.catalog.get(id) else {
            return false;
        };
        def.prerequisites.iter().all(|prereq| {
            self.progress
                .get(prereq)
                .is_some_and(|p| p.status == TourStatus::Completed)
        })
    }

    /// Descriptor of the current step, or `None` when no tour is active.
    #[must_use]
    pub fn current(&self) -> Option<CurrentStep> {
        let id = self.active?;
        let def = self.catalog.get(id)?;
        Some(CurrentStep {
            tour: id,
            step: self.current_step,
            total: def.steps.len(),
        })
    }

    /// Definition of the active tour.
    #[must_use]
    pub fn current_def(&self) -> Option<&TourDefinition> {
        self.catalog.get(self.active?)
    }

    /// The step currently being shown.
    #[must_use]
    pub fn current_step_def(&self) -> Option<&TourStep> {
        self.current_def()?.steps.get(self.current_step)
    }

    /// Whether `id` is the active tour and not paused.
    #[must_use]
    pub fn is_tour_active(&self, id: TourId) -> bool {
        self.active == Some(id) && !self.paused
    }

    /// Whether the current step spotlights `target`.
    ///
    /// Lets a host widget render its own "you are here" affordance.
    #[must_use]
    pub fn is_step_target_active(&self, target: &TargetId) -> bool {
        if self.paused {
            return false;
        }
        self.current_step_def()
            .and_then(|s| s.target.as_ref())
            .is_some_and(|t| t == target)
    }

    /// The active tour id, if any.
    #[must_use]
    pub fn active(&self) -> Option<TourId> {
        self.active
    }

    /// Zero-based index of the current step. Meaningful only while a tour
    /// is active.
    #[must_use]
    pub fn step_index(&self) -> usize {
        self.current_step
    }

    /// Whether the active tour is paused.
    #[must_use]
    pub fn is_paused(&self) -> bool {
        self.paused
    }

    /// Whether the spotlight overlay should be showing.
    #[must_use]
    pub fn is_spotlight_visible(&self) -> bool {
        self.spotlight_visible
    }

    /// Current settings.
    #[must_use]
    pub fn settings(&self) -> &TourSettings {
        &self.settings
    }

    /// The catalog this store runs against.
    #[must_use]
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }
}

impl fmt::Debug for TourStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TourStore")
            .field("active", &self.active)
            .field("current_step", &self.current_step)
            .field("paused", &self.paused)
            .field("spotlight_visible", &self.spotlight_visible)
            .field("tracked", &self.progress.len())
            .field("backend", &self.backend.name())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::effects::{ChimeSpec, FixedClock};
    use crate::persist::MemoryStorage;
    use crate::settings::TourSettingsPatch;
    use chrono::{TimeZone, Utc};
    use std::cell::RefCell;
    use std::rc::Rc;
    use waylight_catalog::{Category, TourDefinition, TourStep};

    fn test_catalog() -> Arc<Catalog> {
        let welcome = TourDefinition::new(
            TourId::Welcome,
            "Welcome Tour",
            "Introduction",
            Category::GettingStarted,
        )
        .steps(vec![
            TourStep::new("step-1", "Step 1", "First"),
            TourStep::new("step-2", "Step 2", "Second"),
            TourStep::new("step-3", "Step 3", "Third"),
        ]);
        let pos = TourDefinition::new(
            TourId::PosBasics,
            "POS Basics",
            "Learn the till",
            Category::Operations,
        )
        .prerequisites([TourId::Welcome])
        .steps(vec![
            TourStep::new("pos-1", "Cart", "Add items"),
            TourStep::new("pos-2", "Payment", "Settle"),
        ]);
        Arc::new(Catalog::new(vec![welcome, pos]).unwrap())
    }

    fn store() -> TourStore {
        TourStore::new(test_catalog())
    }

    #[derive(Clone, Default)]
    struct RecordingAnnouncer(Rc<RefCell<Vec<String>>>);

    impl Announcer for RecordingAnnouncer {
        fn announce(&self, message: &str) {
            self.0.borrow_mut().push(message.to_string());
        }
    }

    #[derive(Clone, Default)]
    struct CountingAudio(Rc<RefCell<usize>>);

    impl AudioSink for CountingAudio {
        fn play(&self, _chime: &ChimeSpec) {
            *self.0.borrow_mut() += 1;
        }
    }

    // ── Start ───────────────────────────────────────────────────────────

    #[test]
    fn start_activates_and_stamps_progress() {
        let mut s = store();
        s.start(TourId::Welcome);

        assert_eq!(s.active(), Some(TourId::Welcome));
        assert_eq!(s.step_index(), 0);
        assert!(s.is_spotlight_visible());
        assert!(!s.is_paused());

        let p = s.progress(TourId::Welcome).unwrap();
        assert_eq!(p.status, TourStatus::InProgress);
        assert!(p.started_at.is_some());
        assert!(p.last_viewed_at.is_some());
    }

    #[test]
    fn start_is_noop_when_disabled() {
        let mut s = store();
        s.update_settings(&TourSettingsPatch::new().enabled(false));
        s.start(TourId::Welcome);

        assert_eq!(s.active(), None);
        assert!(s.progress(TourId::Welcome).is_none());
    }

    #[test]
    fn start_is_noop_when_prerequisites_unmet() {
        let mut s = store();
        s.start(TourId::PosBasics);
        assert_eq!(s.active(), None);
    }

    #[test]
    fn start_resumes_in_progress_tour_at_saved_step() {
        let mut s = store();
        s.start(TourId::Welcome);
        s.next_step();
        assert_eq!(s.step_index(), 1);

        // Disabling ends the session but keeps the in-progress record.
        s.disable();
        assert_eq!(s.active(), None);

        s.enable();
        s.start(TourId::Welcome);
        assert_eq!(s.step_index(), 1);
    }

    #[test]
    fn restart_after_completion_keeps_started_at() {
        let clock = Rc::new(FixedClock::new(
            Utc.with_ymd_and_hms(2025, 6, 1, 9, 0, 0).unwrap(),
        ));

        struct SharedClock(Rc<FixedClock>);
        impl Clock for SharedClock {
            fn now(&self) -> chrono::DateTime<Utc> {
                self.0.now()
            }
        }

        let mut s =
            TourStore::new(test_catalog()).with_clock(Box::new(SharedClock(clock.clone())));
        s.start(TourId::Welcome);
        let first_started = s.progress(TourId::Welcome).unwrap().started_at;

        s.complete();
        clock.advance(std::time::Duration::from_secs(3600));
        s.start(TourId::Welcome);

        assert_eq!(s.step_index(), 0);
        assert_eq!(s.progress(TourId::Welcome).unwrap().started_at, first_started);
    }

    // ── Advancing ───────────────────────────────────────────────────────

    #[test]
    fn next_step_advances_and_marks_completed() {
        let mut s = store();
        s.start(TourId::Welcome);
        s.next_step();

        assert_eq!(s.step_index(), 1);
        assert!(s.is_step_completed(TourId::Welcome, "step-1"));
        assert!(!s.is_step_completed(TourId::Welcome, "step-2"));
    }

    #[test]
    fn next_step_without_active_tour_is_noop() {
        let mut s = store();
        s.next_step();
        assert_eq!(s.active(), None);
        assert_eq!(s.step_index(), 0);
    }

    #[test]
    fn advancing_through_all_steps_completes_the_tour() {
        let mut s = store();
        s.start(TourId::Welcome);
        s.next_step();
        s.next_step();
        s.next_step();

        assert_eq!(s.active(), None);
        let p = s.progress(TourId::Welcome).unwrap();
        assert_eq!(p.status, TourStatus::Completed);
        assert!(p.completed_at.is_some());

        let mut completed = p.completed_steps.clone();
        completed.sort();
        assert_eq!(completed, vec!["step-1", "step-2", "step-3"]);
    }

    #[test]
    fn completed_step_marking_is_idempotent() {
        let mut s = store();
        s.start(TourId::Welcome);
        s.next_step();
        s.previous_step();
        s.next_step();

        let p = s.progress(TourId::Welcome).unwrap();
        assert_eq!(
            p.completed_steps.iter().filter(|id| *id == "step-1").count(),
            1
        );
    }

    #[test]
    fn previous_step_at_zero_is_noop() {
        let mut s = store();
        s.start(TourId::Welcome);
        s.previous_step();
        assert_eq!(s.step_index(), 0);
    }

    #[test]
    fn previous_step_moves_session_only() {
        let mut s = store();
        s.start(TourId::Welcome);
        s.next_step();
        s.previous_step();

        assert_eq!(s.step_index(), 0);
        // The record keeps its high-water mark for resume.
        assert_eq!(s.progress(TourId::Welcome).unwrap().current_step, 1);
    }

    #[test]
    fn go_to_step_bounds_checked() {
        let mut s = store();
        s.start(TourId::Welcome);
        s.go_to_step(2);
        assert_eq!(s.step_index(), 2);

        s.go_to_step(3);
        assert_eq!(s.step_index(), 2);
    }

    // ── Pause / skip / complete / reset ─────────────────────────────────

    #[test]
    fn pause_and_resume_toggle_visibility_only() {
        let mut s = store();
        s.start(TourId::Welcome);
        s.next_step();

        s.pause();
        assert!(s.is_paused());
        assert!(!s.is_spotlight_visible());
        assert_eq!(s.active(), Some(TourId::Welcome));
        assert_eq!(s.step_index(), 1);

        s.resume();
        assert!(!s.is_paused());
        assert!(s.is_spotlight_visible());
    }

    #[test]
    fn skip_marks_skipped_without_completing_steps() {
        let mut s = store();
        s.start(TourId::Welcome);
        s.next_step();
        s.skip();

        assert_eq!(s.active(), None);
        assert!(!s.is_spotlight_visible());
        let p = s.progress(TourId::Welcome).unwrap();
        assert_eq!(p.status, TourStatus::Skipped);
        assert_eq!(p.completed_steps, vec!["step-1"]);
    }

    #[test]
    fn reset_yields_fresh_record_regardless_of_prior_state() {
        let mut s = store();
        s.start(TourId::Welcome);
        s.next_step();
        s.complete();

        s.reset(TourId::Welcome);
        let p = s.progress(TourId::Welcome).unwrap();
        assert_eq!(p.status, TourStatus::NotStarted);
        assert_eq!(p.current_step, 0);
        assert!(p.completed_steps.is_empty());
        assert!(p.started_at.is_none());
    }

    #[test]
    fn reset_of_active_tour_ends_the_session() {
        let mut s = store();
        s.start(TourId::Welcome);
        s.reset(TourId::Welcome);

        assert_eq!(s.active(), None);
        assert!(!s.is_spotlight_visible());
        assert_eq!(
            s.progress(TourId::Welcome).unwrap().status,
            TourStatus::NotStarted
        );
    }

    // ── Enable / disable ────────────────────────────────────────────────

    #[test]
    fn disable_force_ends_session_but_keeps_progress() {
        let mut s = store();
        s.start(TourId::Welcome);
        s.next_step();
        s.disable();

        assert_eq!(s.active(), None);
        assert!(!s.is_spotlight_visible());
        assert!(!s.settings().enabled);
        assert_eq!(
            s.progress(TourId::Welcome).unwrap().status,
            TourStatus::InProgress
        );
    }

    // ── Queries ─────────────────────────────────────────────────────────

    #[test]
    fn progress_is_absent_before_any_start() {
        let s = store();
        for id in s.catalog().ids() {
            assert!(s.progress(id).is_none());
        }
    }

    #[test]
    fn can_start_follows_prerequisites() {
        let mut s = store();
        assert!(s.can_start(TourId::Welcome));
        assert!(!s.can_start(TourId::PosBasics));

        s.start(TourId::Welcome);
        assert!(!s.can_start(TourId::PosBasics));

        s.complete();
        assert!(s.can_start(TourId::PosBasics));
    }

    #[test]
    fn total_progress_summary() {
        let mut s = store();
        assert_eq!(
            s.total_progress(),
            ProgressSummary {
                completed: 0,
                total: 2,
                percentage: 0
            }
        );

        s.start(TourId::Welcome);
        s.complete();
        assert_eq!(
            s.total_progress(),
            ProgressSummary {
                completed: 1,
                total: 2,
                percentage: 50
            }
        );
    }

    #[test]
    fn current_descriptor() {
        let mut s = store();
        assert_eq!(s.current(), None);

        s.start(TourId::Welcome);
        s.next_step();
        assert_eq!(
            s.current(),
            Some(CurrentStep {
                tour: TourId::Welcome,
                step: 1,
                total: 3
            })
        );
    }

    #[test]
    fn step_target_active_tracks_current_step() {
        let catalog = {
            let def = TourDefinition::new(
                TourId::Welcome,
                "W",
                "d",
                Category::GettingStarted,
            )
            .steps(vec![
                TourStep::new("a", "A", "a").target("sidebar"),
                TourStep::new("b", "B", "b").target("user-menu"),
            ]);
            Arc::new(Catalog::new(vec![def]).unwrap())
        };
        let mut s = TourStore::new(catalog);
        s.start(TourId::Welcome);

        assert!(s.is_step_target_active(&TargetId::new("sidebar")));
        assert!(!s.is_step_target_active(&TargetId::new("user-menu")));

        s.next_step();
        assert!(s.is_step_target_active(&TargetId::new("user-menu")));

        s.pause();
        assert!(!s.is_step_target_active(&TargetId::new("user-menu")));
    }

    // ── Effects ─────────────────────────────────────────────────────────

    #[test]
    fn announcements_follow_the_setting() {
        let log = RecordingAnnouncer::default();
        let mut s = TourStore::new(test_catalog()).with_announcer(Box::new(log.clone()));

        s.start(TourId::Welcome);
        s.next_step();
        {
            let messages = log.0.borrow();
            assert_eq!(messages[0], "Tutorial started: Welcome Tour. Step 1 of 3.");
            assert_eq!(messages[1], "Step 2 of 3: Step 2");
        }

        s.update_settings(&TourSettingsPatch::new().screen_reader_announcements(false));
        let before = log.0.borrow().len();
        s.next_step();
        assert_eq!(log.0.borrow().len(), before);
    }

    #[test]
    fn completion_announces_and_chimes() {
        let log = RecordingAnnouncer::default();
        let plays = CountingAudio::default();
        let mut s = TourStore::new(test_catalog())
            .with_announcer(Box::new(log.clone()))
            .with_audio(Box::new(plays.clone()));

        s.start(TourId::Welcome);
        s.complete();

        assert!(log.0.borrow().iter().any(|m| m == "Tutorial completed: Welcome Tour"));
        assert_eq!(*plays.0.borrow(), 1);
    }

    #[test]
    fn completion_chime_respects_sound_setting() {
        let plays = CountingAudio::default();
        let mut s = TourStore::new(test_catalog()).with_audio(Box::new(plays.clone()));

        s.toggle_sound();
        s.start(TourId::Welcome);
        s.complete();
        assert_eq!(*plays.0.borrow(), 0);
    }

    // ── Persistence ─────────────────────────────────────────────────────

    #[test]
    fn progress_and_settings_survive_reload() {
        let backend = Arc::new(MemoryStorage::new());

        let mut s = TourStore::new(test_catalog()).with_backend(Box::new(backend.clone()));
        s.start(TourId::Welcome);
        s.complete();
        s.update_settings(&TourSettingsPatch::new().high_contrast(true));

        let mut reloaded =
            TourStore::new(test_catalog()).with_backend(Box::new(backend.clone()));
        reloaded.load();

        // Session state is transient; the persisted subset comes back.
        assert_eq!(reloaded.active(), None);
        assert_eq!(
            reloaded.progress(TourId::Welcome).unwrap().status,
            TourStatus::Completed
        );
        assert!(reloaded.settings().high_contrast);
        assert!(reloaded.can_start(TourId::PosBasics));
    }

    #[test]
    fn load_skips_unknown_tour_ids() {
        let mut doc = PersistedState::empty();
        doc.progress.insert(
            "retired-tour".into(),
            TourProgress::fresh(TourId::Welcome),
        );
        let backend = MemoryStorage::with_state(doc);

        let mut s = TourStore::new(test_catalog()).with_backend(Box::new(backend));
        s.load();
        assert!(s.progress(TourId::Welcome).is_none());
    }
}
