//! Persisted progress state - the document written to `progress.json`.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::Time;

/// Completion status of a single tutorial or exercise.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CompletionRecord {
    /// True once the item has been finished at least once
    pub completed: bool,

    /// Most recent completion time (absent if never completed)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub completed_at: Option<Time>,

    /// Score 0-100 for exercises; tutorials leave this unset.
    /// Re-running overwrites it with the latest run's value.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub score: Option<u32>,
}

impl CompletionRecord {
    /// A record for an item completed right now.
    pub fn completed_now() -> Self {
        Self {
            completed: true,
            completed_at: Some(chrono::Utc::now()),
            score: None,
        }
    }

    /// A record for an item completed right now with a score.
    pub fn completed_now_with_score(score: u32) -> Self {
        Self {
            score: Some(score),
            ..Self::completed_now()
        }
    }
}

/// The root persisted document: completion records keyed by item id.
///
/// Keys not present in the caller's catalog are preserved across
/// load/save cycles; the reporter simply does not count them against
/// catalog totals. A `BTreeMap` keeps the serialized file stable
/// between writes.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProgressState {
    /// Tutorial id -> completion record
    #[serde(default)]
    pub tutorials: BTreeMap<String, CompletionRecord>,

    /// Exercise id -> completion record
    #[serde(default)]
    pub exercises: BTreeMap<String, CompletionRecord>,
}

impl ProgressState {
    /// Fresh state with no completions.
    pub fn empty() -> Self {
        Self::default()
    }
}
