//! Application state and event handling.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::net::SeedEvent;
use crate::storage::SnapshotStore;
use crate::tasks::{StatusFilter, TaskError, TaskStore, view};
use termtask_core::task::{Task, TaskId};

/// Which input mode the app is in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// Browsing the task list (default).
    List,
    /// Typing into the search query.
    Search,
    /// Filling out the add/edit form.
    Form(FormKind),
}

/// Whether the form creates a new task or edits an existing one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormKind {
    /// Create a new task.
    Add,
    /// Edit the task with this id.
    Edit(TaskId),
}

/// Which form field has focus.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormField {
    /// Title input line.
    #[default]
    Title,
    /// Description input line.
    Description,
}

/// Text buffers for the add/edit form.
#[derive(Debug, Default)]
pub struct TaskForm {
    /// Title field contents.
    pub title: String,
    /// Description field contents.
    pub description: String,
    /// Focused field.
    pub focus: FormField,
    /// Cursor position in the focused field (character index).
    pub cursor: usize,
}

impl TaskForm {
    /// Reset both fields and focus the title.
    fn clear(&mut self) {
        self.title.clear();
        self.description.clear();
        self.focus = FormField::Title;
        self.cursor = 0;
    }

    /// Load an existing task into the form for editing.
    fn load(&mut self, task: &Task) {
        self.title = task.title.clone();
        self.description = task.description.clone();
        self.focus = FormField::Title;
        self.cursor = self.title.chars().count();
    }

    /// Contents of the focused field.
    #[must_use]
    pub fn active_value(&self) -> &str {
        match self.focus {
            FormField::Title => &self.title,
            FormField::Description => &self.description,
        }
    }

    fn active_value_mut(&mut self) -> &mut String {
        match self.focus {
            FormField::Title => &mut self.title,
            FormField::Description => &mut self.description,
        }
    }

    /// Byte offset of the cursor in the focused field.
    fn byte_index(&self) -> usize {
        let value = self.active_value();
        value
            .char_indices()
            .map(|(i, _)| i)
            .nth(self.cursor)
            .unwrap_or(value.len())
    }

    /// Switch focus to the other field, placing the cursor at its end.
    fn focus_other(&mut self) {
        self.focus = match self.focus {
            FormField::Title => FormField::Description,
            FormField::Description => FormField::Title,
        };
        self.cursor = self.active_value().chars().count();
    }

    /// Insert a character at the cursor position.
    fn enter_char(&mut self, c: char) {
        let idx = self.byte_index();
        self.active_value_mut().insert(idx, c);
        self.cursor += 1;
    }

    /// Delete the character before the cursor.
    fn delete_char(&mut self) {
        if self.cursor > 0 {
            self.cursor -= 1;
            let idx = self.byte_index();
            self.active_value_mut().remove(idx);
        }
    }

    /// Move cursor left.
    const fn move_cursor_left(&mut self) {
        if self.cursor > 0 {
            self.cursor -= 1;
        }
    }

    /// Move cursor right.
    fn move_cursor_right(&mut self) {
        if self.cursor < self.active_value().chars().count() {
            self.cursor += 1;
        }
    }
}

/// Main application state.
pub struct App<S: SnapshotStore> {
    /// The task list and its write-through persistence.
    pub tasks: TaskStore<S>,
    /// Current input mode.
    pub mode: Mode,
    /// Active status filter tab.
    pub filter: StatusFilter,
    /// Live search query (matched against titles).
    pub query: String,
    /// Selected row in the visible list.
    pub selected: usize,
    /// Add/edit form buffers.
    pub form: TaskForm,
    /// Whether the startup seed import is still in flight.
    pub seeding: bool,
    /// Whether the app should quit.
    pub should_quit: bool,
}

impl<S: SnapshotStore> App<S> {
    /// Create the application around an already-loaded task store.
    #[must_use]
    pub fn new(tasks: TaskStore<S>) -> Self {
        Self {
            tasks,
            mode: Mode::List,
            filter: StatusFilter::All,
            query: String::new(),
            selected: 0,
            form: TaskForm::default(),
            seeding: false,
            should_quit: false,
        }
    }

    /// Tasks visible under the current filter and query, in list order.
    #[must_use]
    pub fn visible(&self) -> Vec<&Task> {
        view::visible(self.tasks.tasks(), self.filter, &self.query)
    }

    /// Store indices of the visible tasks, in list order.
    #[must_use]
    pub fn visible_indices(&self) -> Vec<usize> {
        view::visible_indices(self.tasks.tasks(), self.filter, &self.query)
    }

    /// The task under the selection cursor, if any row is visible.
    #[must_use]
    pub fn selected_task(&self) -> Option<&Task> {
        self.visible().into_iter().nth(self.selected)
    }

    /// Apply a seed fetch outcome delivered by the background task.
    pub fn apply_seed_event(&mut self, event: SeedEvent) {
        self.seeding = false;
        match event {
            SeedEvent::Loaded(tasks) => {
                self.tasks.seed(tasks);
                self.clamp_selection();
            }
            SeedEvent::Failed(_) => {
                // Already logged by the fetch task. The list stays empty.
            }
        }
    }

    /// Handle a key event.
    pub fn handle_key_event(&mut self, key: KeyEvent) {
        // Ctrl+C quits from any mode.
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.should_quit = true;
            return;
        }

        match self.mode {
            Mode::List => self.handle_list_key(key),
            Mode::Search => self.handle_search_key(key),
            Mode::Form(kind) => self.handle_form_key(key, kind),
        }
    }

    /// Handle key event in list mode.
    fn handle_list_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('q') => self.should_quit = true,
            KeyCode::Up | KeyCode::Char('k') => self.select_prev(),
            KeyCode::Down | KeyCode::Char('j') => self.select_next(),
            KeyCode::Char('a') => {
                self.form.clear();
                self.mode = Mode::Form(FormKind::Add);
            }
            KeyCode::Char('e') => self.open_edit_form(),
            KeyCode::Char('c' | ' ') => self.complete_selected(),
            KeyCode::Char('d') => self.delete_selected(),
            KeyCode::Char('J') => self.move_selected(1),
            KeyCode::Char('K') => self.move_selected(-1),
            KeyCode::Char('1') => self.set_filter(StatusFilter::All),
            KeyCode::Char('2') => self.set_filter(StatusFilter::Pending),
            KeyCode::Char('3') => self.set_filter(StatusFilter::Completed),
            KeyCode::Char('/') => self.mode = Mode::Search,
            KeyCode::Esc => {
                self.query.clear();
                self.clamp_selection();
            }
            _ => {}
        }
    }

    /// Handle key event in search mode.
    fn handle_search_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Esc => {
                self.query.clear();
                self.mode = Mode::List;
                self.clamp_selection();
            }
            KeyCode::Enter => self.mode = Mode::List,
            KeyCode::Char(c) => {
                self.query.push(c);
                self.clamp_selection();
            }
            KeyCode::Backspace => {
                self.query.pop();
                self.clamp_selection();
            }
            _ => {}
        }
    }

    /// Handle key event in form mode.
    fn handle_form_key(&mut self, key: KeyEvent, kind: FormKind) {
        match key.code {
            KeyCode::Esc => self.mode = Mode::List,
            KeyCode::Tab | KeyCode::BackTab => self.form.focus_other(),
            KeyCode::Enter => match self.form.focus {
                // Enter on the title advances; on the description it submits.
                FormField::Title => self.form.focus_other(),
                FormField::Description => self.submit_form(kind),
            },
            KeyCode::Char(c) => self.form.enter_char(c),
            KeyCode::Backspace => self.form.delete_char(),
            KeyCode::Left => self.form.move_cursor_left(),
            KeyCode::Right => self.form.move_cursor_right(),
            KeyCode::Home => self.form.cursor = 0,
            KeyCode::End => self.form.cursor = self.form.active_value().chars().count(),
            _ => {}
        }
    }

    /// Submit the form. A validation failure keeps the form open.
    fn submit_form(&mut self, kind: FormKind) {
        let result = match kind {
            FormKind::Add => self.tasks.add(&self.form.title, &self.form.description).map(|_| ()),
            FormKind::Edit(id) => self.tasks.edit(id, &self.form.title, &self.form.description),
        };
        match result {
            Ok(()) | Err(TaskError::NotFound(_)) => {
                // The edit target can disappear under a stale selection.
                // Either way the form's job is done.
                self.mode = Mode::List;
                if matches!(kind, FormKind::Add) {
                    self.select_last();
                }
                self.clamp_selection();
            }
            Err(_) => {}
        }
    }

    /// Open the edit form prefilled with the selected task.
    fn open_edit_form(&mut self) {
        if let Some(task) = self.selected_task().cloned() {
            self.form.load(&task);
            self.mode = Mode::Form(FormKind::Edit(task.id));
        }
    }

    /// Mark the selected task completed.
    fn complete_selected(&mut self) {
        if let Some(id) = self.selected_task().map(|t| t.id) {
            let _ = self.tasks.complete(id);
            self.clamp_selection();
        }
    }

    /// Delete the selected task.
    fn delete_selected(&mut self) {
        if let Some(id) = self.selected_task().map(|t| t.id) {
            let _ = self.tasks.delete(id);
            self.clamp_selection();
        }
    }

    /// Move the selected task past its visible neighbor.
    ///
    /// The visible neighbor's store index works as the destination for both
    /// directions: removing the source first shifts a downstream neighbor
    /// left by one, so inserting at its original index lands just past it.
    fn move_selected(&mut self, direction: i8) {
        let indices = self.visible_indices();
        let Some(&src) = indices.get(self.selected) else {
            return;
        };
        let neighbor = if direction > 0 {
            self.selected + 1
        } else {
            let Some(prev) = self.selected.checked_sub(1) else {
                return;
            };
            prev
        };
        let Some(&dst) = indices.get(neighbor) else {
            return;
        };
        if self.tasks.reorder(src, dst).is_ok() {
            self.selected = neighbor;
        }
    }

    /// Switch the status filter tab.
    fn set_filter(&mut self, filter: StatusFilter) {
        self.filter = filter;
        self.clamp_selection();
    }

    /// Move the selection up one row.
    const fn select_prev(&mut self) {
        if self.selected > 0 {
            self.selected -= 1;
        }
    }

    /// Move the selection down one row.
    fn select_next(&mut self) {
        let len = self.visible().len();
        if self.selected + 1 < len {
            self.selected += 1;
        }
    }

    /// Move the selection to the last visible row.
    fn select_last(&mut self) {
        self.selected = self.visible().len().saturating_sub(1);
    }

    /// Keep the selection inside the visible list after it changes.
    fn clamp_selection(&mut self) {
        let len = self.visible().len();
        self.selected = self.selected.min(len.saturating_sub(1));
    }
}
