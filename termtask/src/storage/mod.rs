//! Local snapshot storage for the task list.
//!
//! Defines the [`SnapshotStore`] port the task store writes through, plus
//! an in-memory implementation for tests and offline use. The store holds
//! a single blob: the full serialized task list. Every save overwrites
//! the whole snapshot, so the persisted state is always one consistent
//! list.

pub mod file;

pub use file::JsonFileStore;

use parking_lot::Mutex;

use termtask_core::task::Task;

/// Errors that can occur during snapshot storage operations.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// A read operation failed.
    #[error("read failed: {0}")]
    ReadFailed(String),

    /// A write operation failed.
    #[error("write failed: {0}")]
    WriteFailed(String),

    /// The stored blob exists but is not a valid task list.
    #[error("malformed snapshot: {0}")]
    Malformed(String),
}

/// Port for persisting the task list as a single blob.
///
/// `load` distinguishes "nothing stored yet" (`Ok(None)`) from a stored
/// blob that cannot be read or decoded (`Err`); the caller falls back to
/// the seed import in both cases but only the latter is worth a warning.
pub trait SnapshotStore {
    /// Read the persisted task list, if any.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] if a blob exists but cannot be read or
    /// decoded.
    fn load(&self) -> Result<Option<Vec<Task>>, StoreError>;

    /// Overwrite the persisted blob with the given task list.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] if the blob cannot be written.
    fn save(&self, tasks: &[Task]) -> Result<(), StoreError>;
}

impl<S: SnapshotStore> SnapshotStore for std::sync::Arc<S> {
    fn load(&self) -> Result<Option<Vec<Task>>, StoreError> {
        (**self).load()
    }

    fn save(&self, tasks: &[Task]) -> Result<(), StoreError> {
        (**self).save(tasks)
    }
}

/// In-memory implementation of [`SnapshotStore`].
///
/// Holds the blob in a mutex so `save` can take `&self` like the file
/// store does. Not persistent; contents are lost when dropped.
pub struct MemoryStore {
    snapshot: Mutex<Option<Vec<Task>>>,
}

impl MemoryStore {
    /// Create a new store with nothing persisted.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            snapshot: Mutex::new(None),
        }
    }

    /// Create a store pre-populated with a persisted task list.
    #[must_use]
    pub fn with_tasks(tasks: Vec<Task>) -> Self {
        Self {
            snapshot: Mutex::new(Some(tasks)),
        }
    }

    /// Returns a copy of the currently persisted list, if any.
    #[must_use]
    pub fn persisted(&self) -> Option<Vec<Task>> {
        self.snapshot.lock().clone()
    }
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

impl SnapshotStore for MemoryStore {
    fn load(&self) -> Result<Option<Vec<Task>>, StoreError> {
        Ok(self.snapshot.lock().clone())
    }

    fn save(&self, tasks: &[Task]) -> Result<(), StoreError> {
        *self.snapshot.lock() = Some(tasks.to_vec());
        Ok(())
    }
}
