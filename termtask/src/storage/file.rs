//! File-backed snapshot store.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use termtask_core::snapshot;
use termtask_core::task::Task;

use super::{SnapshotStore, StoreError};

/// Persists the task list as one JSON file.
///
/// A missing file means no state has been saved yet and is not an error;
/// an unreadable or undecodable file is. Saves create the parent
/// directory on demand so a fresh profile works without setup.
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    /// Create a store backed by the given file path.
    #[must_use]
    pub const fn new(path: PathBuf) -> Self {
        Self { path }
    }

    /// The file path this store reads and writes.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl SnapshotStore for JsonFileStore {
    fn load(&self) -> Result<Option<Vec<Task>>, StoreError> {
        let bytes = match std::fs::read(&self.path) {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(StoreError::ReadFailed(e.to_string())),
        };
        snapshot::decode(&bytes)
            .map(Some)
            .map_err(|e| StoreError::Malformed(e.to_string()))
    }

    fn save(&self, tasks: &[Task]) -> Result<(), StoreError> {
        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
        {
            std::fs::create_dir_all(parent).map_err(|e| StoreError::WriteFailed(e.to_string()))?;
        }
        let bytes = snapshot::encode(tasks).map_err(|e| StoreError::WriteFailed(e.to_string()))?;
        std::fs::write(&self.path, bytes).map_err(|e| StoreError::WriteFailed(e.to_string()))
    }
}
