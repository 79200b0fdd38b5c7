//! Task model types for `TermTask`.
//!
//! Defines the [`Task`] entity and its serde representation. The derived
//! JSON shape is the on-disk snapshot contract: `id` serializes as a bare
//! number and `status` as the strings `"Pending"` / `"Completed"`.

use serde::{Deserialize, Serialize};

/// Unique identifier for a task, stable for the task's lifetime.
///
/// User-created tasks get a clock-derived value from the store's id
/// generator; seeded tasks carry the remote source's numeric id verbatim.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TaskId(u64);

impl TaskId {
    /// Creates a `TaskId` from a raw numeric value.
    #[must_use]
    pub const fn new(value: u64) -> Self {
        Self(value)
    }

    /// Returns the raw numeric value.
    #[must_use]
    pub const fn as_u64(self) -> u64 {
        self.0
    }
}

impl From<u64> for TaskId {
    fn from(value: u64) -> Self {
        Self(value)
    }
}

impl std::fmt::Display for TaskId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Completion status of a task.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TaskStatus {
    /// Task has not been completed yet.
    Pending,
    /// Task has been completed.
    Completed,
}

impl std::fmt::Display for TaskStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Pending => write!(f, "pending"),
            Self::Completed => write!(f, "completed"),
        }
    }
}

/// A user-visible unit of work.
///
/// List position is not part of the record: the surrounding `Vec<Task>`
/// order is the display and persistence order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    /// Unique identifier, unique across the containing list.
    pub id: TaskId,
    /// Non-empty title text.
    pub title: String,
    /// Free-form description text.
    pub description: String,
    /// Completion status.
    pub status: TaskStatus,
}
