//! Store trait abstraction.

use std::path::PathBuf;

use cliteach_core::ProgressState;

/// Error type for store operations.
pub type Result<T> = std::result::Result<T, StoreError>;

/// Errors that can occur while loading or saving progress state.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// The persisted file exists but is not a valid progress document.
    /// Never auto-repaired; the caller decides what to do.
    #[error("corrupt progress file at {path}: {source}")]
    CorruptState {
        /// Location of the offending file
        path: PathBuf,
        /// Underlying decode failure
        #[source]
        source: serde_json::Error,
    },

    /// Directory creation, read, or write failure.
    #[error("failed to access progress file at {path}: {source}")]
    Persistence {
        /// Location being accessed
        path: PathBuf,
        /// Underlying I/O failure
        #[source]
        source: std::io::Error,
    },

    /// Serialization failed while saving.
    #[error("failed to encode progress state: {0}")]
    Encode(#[from] serde_json::Error),

    /// Neither a platform config directory nor a home directory could
    /// be determined.
    #[error("could not determine a configuration directory")]
    NoConfigDir,
}

/// Store abstraction for progress state.
///
/// One document per store; `load` on a store that has never been
/// written yields a fresh empty state rather than an error.
pub trait StateStore {
    /// Load the persisted state, or an empty state if none exists yet.
    fn load(&self) -> Result<ProgressState>;

    /// Persist the full state, replacing whatever was stored before.
    fn save(&self, state: &ProgressState) -> Result<()>;
}
