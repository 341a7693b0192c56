//! Catalog metadata for the known tutorials and exercises.
//!
//! The catalog is supplied by the command layer; the tracker and the
//! reporter only consume it to compute totals and render entries in
//! caller order.

use std::fmt;

/// Metadata for one tutorial topic.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TutorialInfo {
    /// Unique identifier, e.g. `basics`
    pub id: &'static str,

    /// One-line description shown in progress listings
    pub description: &'static str,
}

/// Metadata for one practice exercise.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExerciseInfo {
    /// Unique identifier, e.g. `simple_cli`
    pub id: &'static str,

    /// One-line description shown in progress listings
    pub description: &'static str,

    /// Rough difficulty rating
    pub difficulty: Difficulty,
}

/// Exercise difficulty rating.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Difficulty {
    /// Suitable right after the first tutorial
    Easy,
    /// Assumes the flag and command tutorials
    Medium,
    /// Combines several concepts
    Hard,
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Difficulty::Easy => "Easy",
            Difficulty::Medium => "Medium",
            Difficulty::Hard => "Hard",
        };
        f.write_str(s)
    }
}
