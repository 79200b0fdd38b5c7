//! Search input rendering.

use ratatui::{
    Frame,
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use super::theme;
use crate::app::{App, Mode};
use crate::storage::SnapshotStore;

/// Render the title search box.
pub fn render<S: SnapshotStore>(frame: &mut Frame, area: Rect, app: &App<S>) {
    let is_focused = app.mode == Mode::Search;

    // Build the query text with cursor. The query edits at the end only,
    // so the cursor always trails the text.
    let mut display_text = app.query.clone();
    if is_focused {
        display_text.push('█');
    }

    let input_line = if display_text.is_empty() {
        Line::from(Span::styled("Press / to search titles...", theme::dimmed()))
    } else {
        Line::from(Span::styled(display_text, theme::normal()))
    };

    let block = Block::default()
        .title("Search")
        .borders(Borders::ALL)
        .border_style(if is_focused {
            theme::highlighted()
        } else {
            theme::normal()
        });

    let paragraph = Paragraph::new(input_line).block(block);

    frame.render_widget(paragraph, area);
}
