#![forbid(unsafe_code)]

//! Per-tour progress records.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use waylight_catalog::TourId;

/// Lifecycle state of one tour for one user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TourStatus {
    #[default]
    NotStarted,
    InProgress,
    Completed,
    Skipped,
}

impl std::fmt::Display for TourStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            TourStatus::NotStarted => "not-started",
            TourStatus::InProgress => "in-progress",
            TourStatus::Completed => "completed",
            TourStatus::Skipped => "skipped",
        };
        f.write_str(s)
    }
}

/// Persisted record of a user's position within one tour.
///
/// `current_step` is a high-water mark: it is only pushed forward by
/// advancing or jumping, never by stepping back, so resuming lands where the
/// user got to. `completed_steps` keeps insertion order and never holds
/// duplicates.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TourProgress {
    pub tour: TourId,
    #[serde(default)]
    pub status: TourStatus,
    #[serde(default)]
    pub current_step: usize,
    #[serde(default)]
    pub completed_steps: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub started_at: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub completed_at: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_viewed_at: Option<DateTime<Utc>>,
}

impl TourProgress {
    /// A fresh not-started record.
    #[must_use]
    pub fn fresh(tour: TourId) -> Self {
        Self {
            tour,
            status: TourStatus::NotStarted,
            current_step: 0,
            completed_steps: Vec::new(),
            started_at: None,
            completed_at: None,
            last_viewed_at: None,
        }
    }

    /// Record a step as completed. Idempotent.
    pub fn mark_step_completed(&mut self, step_id: &str) {
        if !self.completed_steps.iter().any(|s| s == step_id) {
            self.completed_steps.push(step_id.to_string());
        }
    }

    /// Whether a step id is in the completed set.
    #[must_use]
    pub fn is_step_completed(&self, step_id: &str) -> bool {
        self.completed_steps.iter().any(|s| s == step_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fresh_record_shape() {
        let p = TourProgress::fresh(TourId::Welcome);
        assert_eq!(p.status, TourStatus::NotStarted);
        assert_eq!(p.current_step, 0);
        assert!(p.completed_steps.is_empty());
        assert!(p.started_at.is_none());
    }

    #[test]
    fn mark_step_completed_is_idempotent() {
        let mut p = TourProgress::fresh(TourId::Welcome);
        p.mark_step_completed("s1");
        p.mark_step_completed("s1");
        p.mark_step_completed("s2");
        assert_eq!(p.completed_steps, vec!["s1", "s2"]);
        assert!(p.is_step_completed("s1"));
        assert!(!p.is_step_completed("s3"));
    }

    #[test]
    fn status_serde_is_kebab_case() {
        let json = serde_json::to_string(&TourStatus::InProgress).unwrap();
        assert_eq!(json, "\"in-progress\"");
    }

    #[test]
    fn progress_round_trips_through_json() {
        let mut p = TourProgress::fresh(TourId::PosBasics);
        p.status = TourStatus::InProgress;
        p.current_step = 3;
        p.mark_step_completed("a");

        let json = serde_json::to_string(&p).unwrap();
        let back: TourProgress = serde_json::from_str(&json).unwrap();
        assert_eq!(back, p);
    }

    #[test]
    fn progress_tolerates_missing_optional_fields() {
        // A record written by an older build without timestamps still loads.
        let back: TourProgress =
            serde_json::from_str(r#"{"tour":"welcome","status":"completed"}"#).unwrap();
        assert_eq!(back.status, TourStatus::Completed);
        assert_eq!(back.current_step, 0);
    }
}
