//! The task store: owner of the ordered task list and all mutations.
//!
//! Every operation that executes writes the full list through the
//! injected [`SnapshotStore`], including ones that matched nothing (an
//! unknown id). Operations rejected before touching the list (empty
//! fields, out-of-range indices) skip the write. A failed write never
//! rolls back the in-memory list.

use std::time::{SystemTime, UNIX_EPOCH};

use termtask_core::task::{Task, TaskId, TaskStatus};

use crate::storage::SnapshotStore;

use super::TaskError;

/// Ordered task list with write-through persistence.
///
/// The list order is the display and persistence order; only `reorder`
/// changes it, `add` appends, `delete` removes, and `complete`/`edit`
/// update in place.
pub struct TaskStore<S: SnapshotStore> {
    /// The ordered task list. Single source of truth for the session.
    tasks: Vec<Task>,
    /// Injected persistence port.
    store: S,
    /// Highest id issued or observed, keeps generated ids unique.
    last_id: u64,
}

impl<S: SnapshotStore> TaskStore<S> {
    /// Creates an empty store around the given persistence port.
    pub const fn new(store: S) -> Self {
        Self {
            tasks: Vec::new(),
            store,
            last_id: 0,
        }
    }

    /// Returns the current timestamp in milliseconds since epoch.
    fn now_ms() -> u64 {
        u64::try_from(
            SystemTime::now()
                .duration_since(UNIX_EPOCH)
                .unwrap_or_default()
                .as_millis(),
        )
        .unwrap_or(u64::MAX)
    }

    /// Restores the task list from the persistence port.
    ///
    /// Returns `true` if a non-empty persisted list was adopted. An
    /// absent, empty, or unreadable snapshot returns `false`, telling the
    /// caller to fall back to the one-shot seed import; read failures are
    /// logged, never propagated.
    pub fn load(&mut self) -> bool {
        match self.store.load() {
            Ok(Some(tasks)) if !tasks.is_empty() => {
                self.raise_id_floor(&tasks);
                tracing::info!(count = tasks.len(), "task list restored from local snapshot");
                self.tasks = tasks;
                true
            }
            Ok(Some(_)) => {
                tracing::debug!("local snapshot is empty");
                false
            }
            Ok(None) => {
                tracing::debug!("no local snapshot found");
                false
            }
            Err(err) => {
                tracing::warn!(error = %err, "failed to load local snapshot");
                false
            }
        }
    }

    /// Replaces the list wholesale with imported tasks.
    ///
    /// Declines when the list is already populated, so a late-arriving
    /// import never clobbers a restored snapshot or tasks the user added
    /// while the fetch was in flight.
    pub fn seed(&mut self, tasks: Vec<Task>) {
        if !self.tasks.is_empty() {
            tracing::debug!("seed skipped; task list already populated");
            return;
        }
        self.raise_id_floor(&tasks);
        tracing::info!(count = tasks.len(), "task list seeded from remote import");
        self.tasks = tasks;
        self.persist();
    }

    /// Appends a new Pending task with a fresh unique id.
    ///
    /// # Errors
    ///
    /// Returns [`TaskError::TitleEmpty`] or [`TaskError::DescriptionEmpty`]
    /// if a field is empty or whitespace-only; the list and the snapshot
    /// are left untouched. Accepted text is stored verbatim, padding
    /// included.
    pub fn add(&mut self, title: &str, description: &str) -> Result<TaskId, TaskError> {
        if title.trim().is_empty() {
            return Err(TaskError::TitleEmpty);
        }
        if description.trim().is_empty() {
            return Err(TaskError::DescriptionEmpty);
        }

        let id = self.next_id();
        self.tasks.push(Task {
            id,
            title: title.to_string(),
            description: description.to_string(),
            status: TaskStatus::Pending,
        });
        tracing::debug!(%id, "task added");
        self.persist();
        Ok(id)
    }

    /// Marks the matching task Completed. Idempotent.
    ///
    /// # Errors
    ///
    /// Returns [`TaskError::NotFound`] for an unknown id; the snapshot is
    /// rewritten either way.
    pub fn complete(&mut self, id: TaskId) -> Result<(), TaskError> {
        let result = match self.tasks.iter_mut().find(|t| t.id == id) {
            Some(task) => {
                task.status = TaskStatus::Completed;
                tracing::debug!(%id, "task completed");
                Ok(())
            }
            None => Err(TaskError::NotFound(id)),
        };
        self.persist();
        result
    }

    /// Removes the matching task.
    ///
    /// # Errors
    ///
    /// Returns [`TaskError::NotFound`] for an unknown id; the snapshot is
    /// rewritten either way.
    pub fn delete(&mut self, id: TaskId) -> Result<(), TaskError> {
        let before = self.tasks.len();
        self.tasks.retain(|t| t.id != id);
        let result = if self.tasks.len() == before {
            Err(TaskError::NotFound(id))
        } else {
            tracing::debug!(%id, "task deleted");
            Ok(())
        };
        self.persist();
        result
    }

    /// Replaces the matching task's title and description in place,
    /// preserving its id, status, and position.
    ///
    /// # Errors
    ///
    /// Returns [`TaskError::TitleEmpty`] or [`TaskError::DescriptionEmpty`]
    /// without touching the list or the snapshot, or
    /// [`TaskError::NotFound`] for an unknown id (snapshot rewritten).
    pub fn edit(&mut self, id: TaskId, title: &str, description: &str) -> Result<(), TaskError> {
        if title.trim().is_empty() {
            return Err(TaskError::TitleEmpty);
        }
        if description.trim().is_empty() {
            return Err(TaskError::DescriptionEmpty);
        }

        let result = match self.tasks.iter_mut().find(|t| t.id == id) {
            Some(task) => {
                task.title = title.to_string();
                task.description = description.to_string();
                tracing::debug!(%id, "task edited");
                Ok(())
            }
            None => Err(TaskError::NotFound(id)),
        };
        self.persist();
        result
    }

    /// Moves the task at `src` to `dst`, shifting the tasks between.
    ///
    /// `dst` addresses the list after the removal, so `reorder(i, j)`
    /// followed by `reorder(j, i)` restores the original order.
    /// `src == dst` is valid and leaves the order unchanged.
    ///
    /// # Errors
    ///
    /// Returns [`TaskError::IndexOutOfRange`] if either index is outside
    /// the current bounds; the list and the snapshot are left untouched.
    pub fn reorder(&mut self, src: usize, dst: usize) -> Result<(), TaskError> {
        let len = self.tasks.len();
        if src >= len || dst >= len {
            return Err(TaskError::IndexOutOfRange { src, dst, len });
        }

        let task = self.tasks.remove(src);
        self.tasks.insert(dst, task);
        tracing::debug!(src, dst, "task moved");
        self.persist();
        Ok(())
    }

    /// The full task list in display order.
    #[must_use]
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    /// Number of tasks in the list.
    #[must_use]
    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    /// Whether the list is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    /// Looks up a task by id.
    #[must_use]
    pub fn get(&self, id: TaskId) -> Option<&Task> {
        self.tasks.iter().find(|t| t.id == id)
    }

    /// Issues a fresh id: the clock, pushed past every id already issued
    /// or present in the list.
    fn next_id(&mut self) -> TaskId {
        let mut candidate = Self::now_ms().max(self.last_id.saturating_add(1));
        while self.tasks.iter().any(|t| t.id.as_u64() == candidate) {
            candidate = candidate.saturating_add(1);
        }
        self.last_id = candidate;
        TaskId::new(candidate)
    }

    /// Keeps `last_id` at or above every id in `tasks`, so loaded and
    /// seeded ids can never collide with generated ones.
    fn raise_id_floor(&mut self, tasks: &[Task]) {
        let max_id = tasks.iter().map(|t| t.id.as_u64()).max().unwrap_or(0);
        self.last_id = self.last_id.max(max_id);
    }

    /// Writes the full list through to the persistence port.
    ///
    /// A write failure is logged and otherwise ignored; the in-memory
    /// list remains the session's source of truth.
    fn persist(&self) {
        if let Err(err) = self.store.save(&self.tasks) {
            tracing::warn!(error = %err, "snapshot write failed; keeping in-memory state");
        }
    }
}
