//! Progress tracking service.
//!
//! One `Tracker` wraps one loaded [`ProgressState`] and a store; every
//! mutation writes the full state back through the store immediately.

use cliteach_core::{CompletionRecord, ProgressState};
use cliteach_storage::{JsonStore, Result, StateStore};
use tracing::debug;

/// Overall completion numbers for a progress display.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProgressSummary {
    /// Items the tracker has recorded as completed
    pub completed: usize,

    /// Catalog total supplied by the caller
    pub total: usize,

    /// `100 * completed / total`, or 0.0 when `total` is 0.
    ///
    /// Can exceed 100 when the state holds completions for ids absent
    /// from the caller's catalog; reported as-is, not clamped.
    pub percentage: f64,
}

/// Stateful API over one loaded progress document.
pub struct Tracker<S: StateStore> {
    state: ProgressState,
    store: S,
}

impl Tracker<JsonStore> {
    /// Open a tracker against the default per-user progress file.
    ///
    /// A missing file yields an empty tracker; any other load failure
    /// is propagated for the caller to handle (the CLI continues
    /// without tracking rather than aborting a session).
    pub fn open() -> Result<Self> {
        Self::with_store(JsonStore::open()?)
    }
}

impl<S: StateStore> Tracker<S> {
    /// Load state from the given store.
    pub fn with_store(store: S) -> Result<Self> {
        let state = store.load()?;
        Ok(Self { state, store })
    }

    /// Whether a tutorial has been completed. Unknown ids are false.
    pub fn is_tutorial_completed(&self, id: &str) -> bool {
        self.state
            .tutorials
            .get(id)
            .is_some_and(|record| record.completed)
    }

    /// Whether an exercise has been completed. Unknown ids are false.
    pub fn is_exercise_completed(&self, id: &str) -> bool {
        self.state
            .exercises
            .get(id)
            .is_some_and(|record| record.completed)
    }

    /// The raw record for a tutorial, if any.
    pub fn tutorial_record(&self, id: &str) -> Option<&CompletionRecord> {
        self.state.tutorials.get(id)
    }

    /// The raw record for an exercise, if any.
    pub fn exercise_record(&self, id: &str) -> Option<&CompletionRecord> {
        self.state.exercises.get(id)
    }

    /// Record a tutorial completion at the current time and persist.
    pub fn mark_tutorial_complete(&mut self, id: &str) -> Result<()> {
        self.state
            .tutorials
            .insert(id.to_string(), CompletionRecord::completed_now());
        debug!(id, "tutorial marked complete");
        self.store.save(&self.state)
    }

    /// Record an exercise completion with a score and persist.
    ///
    /// The score is stored as supplied; range enforcement is the
    /// caller's responsibility.
    pub fn mark_exercise_complete(&mut self, id: &str, score: u32) -> Result<()> {
        self.state
            .exercises
            .insert(id.to_string(), CompletionRecord::completed_now_with_score(score));
        debug!(id, score, "exercise marked complete");
        self.store.save(&self.state)
    }

    /// Ids of all completed tutorials, in state (sorted) order.
    pub fn completed_tutorials(&self) -> Vec<&str> {
        self.state
            .tutorials
            .iter()
            .filter(|(_, record)| record.completed)
            .map(|(id, _)| id.as_str())
            .collect()
    }

    /// Ids of all completed exercises, in state (sorted) order.
    pub fn completed_exercises(&self) -> Vec<&str> {
        self.state
            .exercises
            .iter()
            .filter(|(_, record)| record.completed)
            .map(|(id, _)| id.as_str())
            .collect()
    }

    /// Overall progress against caller-supplied catalog totals.
    pub fn progress(&self, total_tutorials: usize, total_exercises: usize) -> ProgressSummary {
        let completed = self.completed_tutorials().len() + self.completed_exercises().len();
        let total = total_tutorials + total_exercises;

        let percentage = if total > 0 {
            completed as f64 / total as f64 * 100.0
        } else {
            0.0
        };

        ProgressSummary {
            completed,
            total,
            percentage,
        }
    }

    /// Clear all recorded progress and persist the empty state.
    pub fn reset(&mut self) -> Result<()> {
        self.state = ProgressState::empty();
        debug!("progress state reset");
        self.store.save(&self.state)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cliteach_storage::JsonStore;

    fn temp_tracker(dir: &tempfile::TempDir) -> Tracker<JsonStore> {
        Tracker::with_store(JsonStore::at(dir.path().join("progress.json"))).unwrap()
    }

    #[test]
    fn marked_tutorial_reads_back_completed() {
        let dir = tempfile::tempdir().unwrap();
        let mut tracker = temp_tracker(&dir);

        assert!(!tracker.is_tutorial_completed("basics"));
        tracker.mark_tutorial_complete("basics").unwrap();
        assert!(tracker.is_tutorial_completed("basics"));
        assert!(tracker.tutorial_record("basics").unwrap().completed_at.is_some());
    }

    #[test]
    fn exercise_score_is_stored_and_overwritten() {
        let dir = tempfile::tempdir().unwrap();
        let mut tracker = temp_tracker(&dir);

        tracker.mark_exercise_complete("simple_cli", 60).unwrap();
        assert_eq!(tracker.exercise_record("simple_cli").unwrap().score, Some(60));

        // Latest run wins.
        tracker.mark_exercise_complete("simple_cli", 90).unwrap();
        assert_eq!(tracker.exercise_record("simple_cli").unwrap().score, Some(90));
    }

    #[test]
    fn completions_survive_a_reopen() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("progress.json");

        let mut tracker = Tracker::with_store(JsonStore::at(&path)).unwrap();
        tracker.mark_tutorial_complete("basics").unwrap();
        tracker.mark_exercise_complete("simple_cli", 80).unwrap();

        let reopened = Tracker::with_store(JsonStore::at(&path)).unwrap();
        assert!(reopened.is_tutorial_completed("basics"));
        assert_eq!(reopened.exercise_record("simple_cli").unwrap().score, Some(80));
    }

    #[test]
    fn progress_math_matches_catalog_totals() {
        let dir = tempfile::tempdir().unwrap();
        let mut tracker = temp_tracker(&dir);

        let empty = tracker.progress(5, 4);
        assert_eq!((empty.completed, empty.total), (0, 9));
        assert_eq!(empty.percentage, 0.0);

        tracker.mark_tutorial_complete("basics").unwrap();
        let summary = tracker.progress(5, 4);
        assert_eq!((summary.completed, summary.total), (1, 9));
        assert_eq!(format!("{:.1}", summary.percentage), "11.1");
    }

    #[test]
    fn zero_totals_report_zero_percent() {
        let dir = tempfile::tempdir().unwrap();
        let tracker = temp_tracker(&dir);

        let summary = tracker.progress(0, 0);
        assert_eq!(summary.total, 0);
        assert_eq!(summary.percentage, 0.0);
    }

    #[test]
    fn completions_outside_the_catalog_can_exceed_100_percent() {
        let dir = tempfile::tempdir().unwrap();
        let mut tracker = temp_tracker(&dir);

        tracker.mark_tutorial_complete("basics").unwrap();
        tracker.mark_tutorial_complete("retired_topic").unwrap();

        // Accepted behavior: the totals come from the caller's catalog
        // and do not constrain what the state remembers.
        let summary = tracker.progress(1, 0);
        assert!(summary.percentage > 100.0);
    }

    #[test]
    fn reset_clears_everything() {
        let dir = tempfile::tempdir().unwrap();
        let mut tracker = temp_tracker(&dir);

        tracker.mark_tutorial_complete("basics").unwrap();
        tracker.mark_exercise_complete("simple_cli", 100).unwrap();
        tracker.reset().unwrap();

        assert!(!tracker.is_tutorial_completed("basics"));
        assert!(!tracker.is_exercise_completed("simple_cli"));
        let summary = tracker.progress(5, 4);
        assert_eq!((summary.completed, summary.total), (0, 9));
        assert_eq!(summary.percentage, 0.0);
    }
}
