//! Add/edit form rendering.

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use super::theme;
use crate::app::{App, FormField};
use crate::storage::SnapshotStore;

/// Render the add/edit form in place of the task list.
pub fn render<S: SnapshotStore>(frame: &mut Frame, area: Rect, app: &App<S>) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Min(0),
        ])
        .split(area);

    render_field(
        frame,
        chunks[0],
        "Title",
        &app.form.title,
        app.form.focus == FormField::Title,
        app.form.cursor,
    );
    render_field(
        frame,
        chunks[1],
        "Description",
        &app.form.description,
        app.form.focus == FormField::Description,
        app.form.cursor,
    );
}

/// Render one bordered input line.
fn render_field(
    frame: &mut Frame,
    area: Rect,
    title: &str,
    value: &str,
    is_focused: bool,
    cursor: usize,
) {
    let display_text = if is_focused {
        with_cursor(value, cursor)
    } else {
        value.to_string()
    };

    let input_line = if display_text.is_empty() {
        Line::from(Span::styled("Required", theme::dimmed()))
    } else {
        Line::from(Span::styled(display_text, theme::normal()))
    };

    let block = Block::default()
        .title(title.to_string())
        .borders(Borders::ALL)
        .border_style(if is_focused {
            theme::highlighted()
        } else {
            theme::normal()
        });

    let paragraph = Paragraph::new(input_line).block(block);

    frame.render_widget(paragraph, area);
}

/// Insert the cursor block at a character position.
fn with_cursor(value: &str, cursor: usize) -> String {
    let byte = value
        .char_indices()
        .map(|(i, _)| i)
        .nth(cursor)
        .unwrap_or(value.len());
    let mut text = value.to_string();
    text.insert(byte, '█');
    text
}
