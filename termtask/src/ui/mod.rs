//! Terminal UI rendering.

pub mod editor;
pub mod filter_bar;
pub mod search_box;
pub mod status_bar;
pub mod task_list;
pub mod theme;

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout},
};

use crate::app::{App, Mode};
use crate::storage::SnapshotStore;

/// Main draw function for the entire UI.
pub fn draw<S: SnapshotStore>(frame: &mut Frame, app: &App<S>) {
    // Stack the filter tabs, content, search box, and status bar.
    let main_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Filter tabs
            Constraint::Min(3),    // Task list or form
            Constraint::Length(3), // Search box
            Constraint::Length(1), // Status bar
        ])
        .split(frame.area());

    filter_bar::render(frame, main_chunks[0], app);

    // The form takes over the content area while it is open.
    if matches!(app.mode, Mode::Form(_)) {
        editor::render(frame, main_chunks[1], app);
    } else {
        task_list::render(frame, main_chunks[1], app);
    }

    search_box::render(frame, main_chunks[2], app);
    status_bar::render(frame, main_chunks[3], app);
}
