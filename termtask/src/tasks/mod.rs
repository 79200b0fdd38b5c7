//! Task list state management for `TermTask`.
//!
//! The [`TaskStore`] owns the ordered task list and every mutation on it,
//! writing the full list through to an injected [`SnapshotStore`] after
//! each executed operation. The [`view`] module derives the visible
//! subset for the UI without ever reordering it.
//!
//! [`SnapshotStore`]: crate::storage::SnapshotStore

pub mod store;
pub mod view;

pub use store::TaskStore;
pub use view::StatusFilter;

use thiserror::Error;

use termtask_core::task::TaskId;

/// Errors that can occur during task list operations.
///
/// None of these surface to the user; callers log them and move on.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TaskError {
    /// Task title cannot be empty or whitespace-only.
    #[error("task title cannot be empty")]
    TitleEmpty,
    /// Task description cannot be empty or whitespace-only.
    #[error("task description cannot be empty")]
    DescriptionEmpty,
    /// Task with the given id was not found.
    #[error("task not found: {0}")]
    NotFound(TaskId),
    /// Reorder indices fall outside the current list bounds.
    #[error("reorder out of range: {src} -> {dst} with {len} tasks")]
    IndexOutOfRange {
        /// Requested source index.
        src: usize,
        /// Requested destination index.
        dst: usize,
        /// Current list length.
        len: usize,
    },
}
