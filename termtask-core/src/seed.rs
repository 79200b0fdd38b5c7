//! Remote seed source contract.
//!
//! The seed endpoint returns a JSON array of todo objects. Each element
//! carries at least `id`, `title`, and `completed`; anything else (the
//! public placeholder API also sends `userId`) is ignored. Imported tasks
//! get a fixed placeholder description since the source has none.

use serde::Deserialize;

use crate::task::{Task, TaskStatus};

/// Description given to every imported task.
pub const SEED_DESCRIPTION: &str = "This is a mock description for the task.";

/// One element of the remote seed payload.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct SeedTodo {
    /// Numeric id, carried into the [`Task`] verbatim.
    pub id: u64,
    /// Title text, carried verbatim.
    pub title: String,
    /// Completion flag; maps onto [`TaskStatus`].
    pub completed: bool,
}

impl From<SeedTodo> for Task {
    fn from(todo: SeedTodo) -> Self {
        Self {
            id: todo.id.into(),
            title: todo.title,
            description: SEED_DESCRIPTION.to_string(),
            status: if todo.completed {
                TaskStatus::Completed
            } else {
                TaskStatus::Pending
            },
        }
    }
}
