//! Progress tracking and reporting.
//!
//! Completion state over the persisted document, plus the text views
//! the command layer prints.

#![warn(missing_docs)]

pub mod tracker;
pub mod report;

pub use tracker::{ProgressSummary, Tracker};
pub use report::{format_all_progress, format_recent_progress};
