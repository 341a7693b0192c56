//! JSON file store implementation.
//!
//! Keeps the whole progress document in a single pretty-printed JSON
//! file under the user's config directory. Single-writer use only:
//! the tool assumes one interactive session at a time, so writes are
//! plain last-write-wins with no locking.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use directories::{BaseDirs, ProjectDirs};
use tracing::debug;

use cliteach_core::ProgressState;

use super::{Result, StateStore, StoreError};

const APP_NAME: &str = "cliteach";
const PROGRESS_FILE: &str = "progress.json";

/// Default location of the progress file: the platform config
/// directory, or `<home>/.config/cliteach` when the platform
/// directory cannot be determined.
pub fn default_progress_path() -> Result<PathBuf> {
    let config_dir = ProjectDirs::from("", "", APP_NAME)
        .map(|dirs| dirs.config_dir().to_path_buf())
        .or_else(|| {
            BaseDirs::new().map(|base| base.home_dir().join(".config").join(APP_NAME))
        })
        .ok_or(StoreError::NoConfigDir)?;
    Ok(config_dir.join(PROGRESS_FILE))
}

/// File-based JSON store backend.
pub struct JsonStore {
    path: PathBuf,
}

impl JsonStore {
    /// Create a store at the default per-user location.
    pub fn open() -> Result<Self> {
        Ok(Self::at(default_progress_path()?))
    }

    /// Create a store backed by an explicit file path.
    pub fn at(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// The file this store reads and writes.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl StateStore for JsonStore {
    fn load(&self) -> Result<ProgressState> {
        match fs::read_to_string(&self.path) {
            Ok(json) => {
                serde_json::from_str(&json).map_err(|source| StoreError::CorruptState {
                    path: self.path.clone(),
                    source,
                })
            }
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                debug!(path = %self.path.display(), "no progress file yet, starting empty");
                Ok(ProgressState::empty())
            }
            Err(source) => Err(StoreError::Persistence {
                path: self.path.clone(),
                source,
            }),
        }
    }

    fn save(&self, state: &ProgressState) -> Result<()> {
        if let Some(dir) = self.path.parent() {
            fs::create_dir_all(dir).map_err(|source| StoreError::Persistence {
                path: dir.to_path_buf(),
                source,
            })?;
        }

        let json = serde_json::to_string_pretty(state)?;
        fs::write(&self.path, json.as_bytes()).map_err(|source| StoreError::Persistence {
            path: self.path.clone(),
            source,
        })?;

        debug!(path = %self.path.display(), "progress state saved");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cliteach_core::CompletionRecord;

    fn temp_store(dir: &tempfile::TempDir) -> JsonStore {
        JsonStore::at(dir.path().join("nested").join(PROGRESS_FILE))
    }

    #[test]
    fn missing_file_loads_as_empty_state() {
        let dir = tempfile::tempdir().unwrap();
        let store = temp_store(&dir);

        let state = store.load().unwrap();
        assert_eq!(state, ProgressState::empty());
    }

    #[test]
    fn save_then_load_roundtrips() {
        let dir = tempfile::tempdir().unwrap();
        let store = temp_store(&dir);

        let mut state = ProgressState::empty();
        state
            .tutorials
            .insert("basics".into(), CompletionRecord::completed_now());
        state
            .exercises
            .insert("simple_cli".into(), CompletionRecord::completed_now_with_score(75));

        store.save(&state).unwrap();
        let loaded = store.load().unwrap();

        assert_eq!(loaded, state);
        assert_eq!(loaded.exercises["simple_cli"].score, Some(75));
    }

    #[test]
    fn corrupt_file_is_a_load_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(PROGRESS_FILE);
        fs::write(&path, br#"{"not valid json"#).unwrap();

        let store = JsonStore::at(&path);
        let err = store.load().unwrap_err();
        assert!(matches!(err, StoreError::CorruptState { .. }));
    }

    #[test]
    fn unknown_ids_survive_a_load_save_cycle() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(PROGRESS_FILE);
        fs::write(
            &path,
            br#"{"tutorials": {"retired_topic": {"completed": true}}, "exercises": {}}"#,
        )
        .unwrap();

        let store = JsonStore::at(&path);
        let state = store.load().unwrap();
        store.save(&state).unwrap();

        let reloaded = store.load().unwrap();
        assert!(reloaded.tutorials["retired_topic"].completed);
    }

    #[test]
    fn unwritable_path_is_a_persistence_error() {
        let dir = tempfile::tempdir().unwrap();
        // A file where the store expects a directory.
        let blocker = dir.path().join("blocker");
        fs::write(&blocker, b"").unwrap();

        let store = JsonStore::at(blocker.join(PROGRESS_FILE));
        let err = store.save(&ProgressState::empty()).unwrap_err();
        assert!(matches!(err, StoreError::Persistence { .. }));
    }
}
