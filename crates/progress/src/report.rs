//! Text views over tracker state.
//!
//! Pure formatting: these functions read the tracker and the
//! caller-supplied catalog and build display strings, nothing else.
//! Catalog order is the caller's order; the reporter does not sort
//! entries.

use std::fmt::Write;

use cliteach_core::{ExerciseInfo, Time, TutorialInfo};
use cliteach_storage::StateStore;

use crate::Tracker;

/// How many completions the recent view shows.
const RECENT_LIMIT: usize = 3;

const FULL_BAR_WIDTH: usize = 40;
const RECENT_BAR_WIDTH: usize = 30;

const TIME_FORMAT: &str = "%b %d, %Y %H:%M:%S";

/// Render the full progress view: overall numbers, a progress bar,
/// and one done/not-done line per catalog entry.
pub fn format_all_progress<S: StateStore>(
    tracker: &Tracker<S>,
    tutorials: &[TutorialInfo],
    exercises: &[ExerciseInfo],
) -> String {
    let summary = tracker.progress(tutorials.len(), exercises.len());

    let mut out = String::new();
    out.push_str("\n==========================================\n");
    out.push_str("             Learning Progress\n");
    out.push_str("==========================================\n\n");
    let _ = writeln!(
        out,
        "Overall Progress: {}/{} ({:.1}%)",
        summary.completed, summary.total, summary.percentage
    );
    let _ = writeln!(out, "{}\n", progress_bar(summary.percentage, FULL_BAR_WIDTH));

    let _ = writeln!(
        out,
        "Tutorials: {}/{}",
        tracker.completed_tutorials().len(),
        tutorials.len()
    );
    out.push_str("------------------------------------------\n");
    for tutorial in tutorials {
        let marker = done_marker(tracker.is_tutorial_completed(tutorial.id));
        let _ = writeln!(out, "{} {}: {}", marker, tutorial.id, tutorial.description);
    }

    let _ = writeln!(
        out,
        "\nExercises: {}/{}",
        tracker.completed_exercises().len(),
        exercises.len()
    );
    out.push_str("------------------------------------------\n");
    for exercise in exercises {
        let marker = done_marker(tracker.is_exercise_completed(exercise.id));
        let _ = writeln!(
            out,
            "{} {} ({}): {}",
            marker, exercise.id, exercise.difficulty, exercise.description
        );
    }

    out
}

/// Render the recent-activity view: overall numbers plus the most
/// recently completed items, newest first.
pub fn format_recent_progress<S: StateStore>(
    tracker: &Tracker<S>,
    tutorials: &[TutorialInfo],
    exercises: &[ExerciseInfo],
) -> String {
    let summary = tracker.progress(tutorials.len(), exercises.len());

    let mut out = String::new();
    out.push_str("\n=================================\n");
    out.push_str("       Recent Activity\n");
    out.push_str("=================================\n\n");
    let _ = writeln!(
        out,
        "Overall Progress: {}/{} ({:.1}%)",
        summary.completed, summary.total, summary.percentage
    );
    let _ = writeln!(out, "{}\n", progress_bar(summary.percentage, RECENT_BAR_WIDTH));

    let recent = recent_completions(tracker, tutorials, exercises);
    if recent.is_empty() {
        out.push_str("No completed tutorials or exercises yet.\n");
        out.push_str("Start by running 'cliteach tutorial basics'\n");
    } else {
        out.push_str("Recently Completed:\n");
        out.push_str("---------------------------------\n");
        for item in recent {
            let _ = writeln!(out, "[{}] {}: {}", item.kind, item.id, item.description);
            let _ = writeln!(out, "    Completed: {}", item.completed_at.format(TIME_FORMAT));
        }
    }

    out.push_str("\n=================================\n");
    out
}

struct CompletedItem<'a> {
    kind: &'static str,
    id: &'a str,
    description: &'a str,
    completed_at: Time,
}

/// Completed catalog entries with a timestamp, newest first,
/// truncated to [`RECENT_LIMIT`]. Ties keep catalog iteration order
/// (stable sort, no documented tie-break).
fn recent_completions<'a, S: StateStore>(
    tracker: &Tracker<S>,
    tutorials: &'a [TutorialInfo],
    exercises: &'a [ExerciseInfo],
) -> Vec<CompletedItem<'a>> {
    let mut items = Vec::new();

    for tutorial in tutorials {
        if let Some(record) = tracker.tutorial_record(tutorial.id) {
            if record.completed {
                if let Some(completed_at) = record.completed_at {
                    items.push(CompletedItem {
                        kind: "Tutorial",
                        id: tutorial.id,
                        description: tutorial.description,
                        completed_at,
                    });
                }
            }
        }
    }

    for exercise in exercises {
        if let Some(record) = tracker.exercise_record(exercise.id) {
            if record.completed {
                if let Some(completed_at) = record.completed_at {
                    items.push(CompletedItem {
                        kind: "Exercise",
                        id: exercise.id,
                        description: exercise.description,
                        completed_at,
                    });
                }
            }
        }
    }

    items.sort_by(|a, b| b.completed_at.cmp(&a.completed_at));
    items.truncate(RECENT_LIMIT);
    items
}

fn done_marker(done: bool) -> &'static str {
    if done {
        "[x]"
    } else {
        "[ ]"
    }
}

/// Fixed-width ASCII progress bar: `=` for the filled portion,
/// blanks for the rest, wrapped in brackets. Fill is floored and
/// clamped to the bar width.
fn progress_bar(percentage: f64, width: usize) -> String {
    let filled = ((percentage / 100.0 * width as f64) as usize).min(width);

    let mut bar = String::with_capacity(width + 2);
    bar.push('[');
    for _ in 0..filled {
        bar.push('=');
    }
    for _ in filled..width {
        bar.push(' ');
    }
    bar.push(']');
    bar
}

#[cfg(test)]
mod tests {
    use super::*;
    use cliteach_core::{CompletionRecord, Difficulty, ProgressState};
    use cliteach_storage::Result;
    use std::cell::RefCell;

    struct MemStore(RefCell<ProgressState>);

    impl MemStore {
        fn seeded(state: ProgressState) -> Self {
            Self(RefCell::new(state))
        }
    }

    impl StateStore for MemStore {
        fn load(&self) -> Result<ProgressState> {
            Ok(self.0.borrow().clone())
        }
        fn save(&self, state: &ProgressState) -> Result<()> {
            *self.0.borrow_mut() = state.clone();
            Ok(())
        }
    }

    fn tutorials() -> Vec<TutorialInfo> {
        vec![
            TutorialInfo { id: "basics", description: "Basic CLI structure" },
            TutorialInfo { id: "flags", description: "Command-line flags" },
            TutorialInfo { id: "commands", description: "Subcommands" },
            TutorialInfo { id: "interactive", description: "Interactive features" },
            TutorialInfo { id: "best_practices", description: "CLI best practices" },
        ]
    }

    fn exercises() -> Vec<ExerciseInfo> {
        vec![
            ExerciseInfo { id: "simple_cli", description: "A first CLI", difficulty: Difficulty::Easy },
            ExerciseInfo { id: "flag_exercise", description: "Flags practice", difficulty: Difficulty::Medium },
            ExerciseInfo { id: "command_exercise", description: "Subcommand practice", difficulty: Difficulty::Medium },
            ExerciseInfo { id: "interactive_exercise", description: "Interactive practice", difficulty: Difficulty::Hard },
        ]
    }

    fn record_at(time: &str, score: Option<u32>) -> CompletionRecord {
        CompletionRecord {
            completed: true,
            completed_at: Some(time.parse().unwrap()),
            score,
        }
    }

    #[test]
    fn full_view_marks_done_entries_in_catalog_order() {
        let mut state = ProgressState::empty();
        state.tutorials.insert("basics".into(), record_at("2026-08-01T10:00:00Z", None));
        let tracker = Tracker::with_store(MemStore::seeded(state)).unwrap();

        let text = format_all_progress(&tracker, &tutorials(), &exercises());

        assert!(text.contains("Overall Progress: 1/9 (11.1%)"));
        assert!(text.contains("[x] basics: Basic CLI structure"));
        // Every other entry stays unmarked.
        assert_eq!(text.matches("[x]").count(), 1);
        assert_eq!(text.matches("[ ]").count(), 8);
        // Catalog order is preserved.
        let basics = text.find("basics: ").unwrap();
        let flags = text.find("flags: ").unwrap();
        assert!(basics < flags);
    }

    #[test]
    fn recent_view_lists_three_newest_first() {
        let mut state = ProgressState::empty();
        state.tutorials.insert("basics".into(), record_at("2026-08-01T10:00:00Z", None));
        state.tutorials.insert("flags".into(), record_at("2026-08-02T10:00:00Z", None));
        state.tutorials.insert("commands".into(), record_at("2026-08-03T10:00:00Z", None));
        state.exercises.insert("simple_cli".into(), record_at("2026-08-04T10:00:00Z", Some(70)));
        state.exercises.insert("flag_exercise".into(), record_at("2026-08-05T10:00:00Z", Some(90)));
        let tracker = Tracker::with_store(MemStore::seeded(state)).unwrap();

        let tutorials = tutorials();
        let exercises = exercises();
        let recent = recent_completions(&tracker, &tutorials, &exercises);
        let ids: Vec<&str> = recent.iter().map(|item| item.id).collect();
        assert_eq!(ids, vec!["flag_exercise", "simple_cli", "commands"]);
    }

    #[test]
    fn recent_view_without_completions_prints_fixed_message() {
        let tracker = Tracker::with_store(MemStore::seeded(ProgressState::empty())).unwrap();

        let text = format_recent_progress(&tracker, &tutorials(), &exercises());
        assert!(text.contains("No completed tutorials or exercises yet."));
        assert!(!text.contains("Recently Completed:"));
    }

    #[test]
    fn records_without_timestamps_are_skipped_by_recent_view() {
        let mut state = ProgressState::empty();
        state.tutorials.insert(
            "basics".into(),
            CompletionRecord { completed: true, completed_at: None, score: None },
        );
        let tracker = Tracker::with_store(MemStore::seeded(state)).unwrap();

        assert!(recent_completions(&tracker, &tutorials(), &exercises()).is_empty());
    }

    #[test]
    fn progress_bar_fill_is_floored_and_clamped() {
        assert_eq!(progress_bar(0.0, 10), "[          ]");
        assert_eq!(progress_bar(50.0, 40).matches('=').count(), 20);
        assert_eq!(progress_bar(100.0, 30), format!("[{}]", "=".repeat(30)));
        // 11.1% of 40 floors to 4 characters.
        assert_eq!(progress_bar(100.0 / 9.0, 40).matches('=').count(), 4);
        // Over 100% clamps instead of overflowing the bar.
        assert_eq!(progress_bar(150.0, 10), format!("[{}]", "=".repeat(10)));
    }
}
