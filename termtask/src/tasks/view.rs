//! View projection: the visible subset of the task list.
//!
//! A pure function of (task list, status filter, search text). The
//! projection filters, never re-sorts: visible tasks keep their relative
//! list order. Nothing here holds state; the UI recomputes the
//! projection on every frame.

use termtask_core::task::{Task, TaskStatus};

/// Three-way status selector for the visible list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StatusFilter {
    /// Show every task.
    #[default]
    All,
    /// Show only tasks still pending.
    Pending,
    /// Show only completed tasks.
    Completed,
}

impl StatusFilter {
    /// Display order of the filter tabs.
    pub const TABS: [Self; 3] = [Self::All, Self::Pending, Self::Completed];

    /// Whether a task with the given status passes this filter.
    #[must_use]
    pub const fn matches(self, status: TaskStatus) -> bool {
        matches!(
            (self, status),
            (Self::All, _)
                | (Self::Pending, TaskStatus::Pending)
                | (Self::Completed, TaskStatus::Completed)
        )
    }

    /// Tab label for the UI.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::All => "All",
            Self::Pending => "Pending",
            Self::Completed => "Completed",
        }
    }
}

/// Store indices of the tasks visible under `filter` and `query`, in
/// list order.
///
/// The search is a case-insensitive substring match on the title only;
/// an empty query matches everything. This index form is what the UI
/// uses to translate visible positions back into store coordinates for
/// selection and reorder.
#[must_use]
pub fn visible_indices(tasks: &[Task], filter: StatusFilter, query: &str) -> Vec<usize> {
    let query = query.to_lowercase();
    tasks
        .iter()
        .enumerate()
        .filter(|(_, task)| filter.matches(task.status) && task.title.to_lowercase().contains(&query))
        .map(|(i, _)| i)
        .collect()
}

/// The tasks visible under `filter` and `query`, in list order.
#[must_use]
pub fn visible<'a>(tasks: &'a [Task], filter: StatusFilter, query: &str) -> Vec<&'a Task> {
    visible_indices(tasks, filter, query)
        .into_iter()
        .map(|i| &tasks[i])
        .collect()
}
