//! cliteach core data models.
//!
//! This crate defines the data structures shared by the progress
//! tracker, the persistence store, and the command layer.

#![warn(missing_docs)]

mod catalog;
mod state;

pub use catalog::{Difficulty, ExerciseInfo, TutorialInfo};
pub use state::{CompletionRecord, ProgressState};

/// Timestamp type
pub type Time = chrono::DateTime<chrono::Utc>;
