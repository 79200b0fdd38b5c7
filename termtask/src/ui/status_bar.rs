//! Status bar rendering.

use ratatui::{
    Frame,
    layout::Rect,
    text::{Line, Span},
    widgets::Paragraph,
};

use super::theme;
use crate::app::{App, FormKind, Mode};
use crate::storage::SnapshotStore;
use termtask_core::task::TaskStatus;

/// Render the status bar at the bottom of the screen.
pub fn render<S: SnapshotStore>(frame: &mut Frame, area: Rect, app: &App<S>) {
    let help_text = match app.mode {
        Mode::List => {
            "a: add | e: edit | c/space: done | d: delete | J/K: move | 1-3: filter | /: search | q: quit"
        }
        Mode::Search => "type to filter | Enter: apply | Esc: clear",
        Mode::Form(FormKind::Add) => "adding | Tab: switch field | Enter: next/submit | Esc: cancel",
        Mode::Form(FormKind::Edit(_)) => {
            "editing | Tab: switch field | Enter: next/submit | Esc: cancel"
        }
    };

    let pending = app
        .tasks
        .tasks()
        .iter()
        .filter(|t| t.status == TaskStatus::Pending)
        .count();
    let total = app.tasks.len();

    let (dot_color, status_text) = if app.seeding {
        (theme::WARNING, "Fetching starter tasks...".to_string())
    } else {
        (theme::SUCCESS, format!("{pending} pending / {total} total"))
    };

    let status_line = Line::from(vec![
        Span::styled("TermTask v0.1.0", theme::bold()),
        Span::raw(" | "),
        Span::styled("●", theme::normal().fg(dot_color)),
        Span::raw(format!(" {status_text}")),
        Span::raw(" | "),
        Span::styled(help_text, theme::dimmed()),
    ]);

    let paragraph = Paragraph::new(status_line).style(theme::status_bar_bg());
    frame.render_widget(paragraph, area);
}
