//! Task list rendering.

use ratatui::{
    Frame,
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph},
};

use super::theme;
use crate::app::{App, Mode};
use crate::storage::SnapshotStore;
use termtask_core::task::TaskStatus;

/// Render the task list under the active filter and query.
pub fn render<S: SnapshotStore>(frame: &mut Frame, area: Rect, app: &App<S>) {
    let is_focused = app.mode == Mode::List;

    let block = Block::default()
        .title(Span::styled("Tasks", theme::panel_title(theme::TASKS_TITLE)))
        .borders(Borders::ALL)
        .border_style(if is_focused {
            theme::highlighted()
        } else {
            theme::normal()
        });

    let visible = app.visible();
    if visible.is_empty() {
        let text = if app.seeding {
            "Fetching starter tasks..."
        } else {
            "No tasks. Press 'a' to add one."
        };
        let paragraph =
            Paragraph::new(Line::from(Span::styled(text, theme::dimmed()))).block(block);
        frame.render_widget(paragraph, area);
        return;
    }

    let items: Vec<ListItem> = visible
        .iter()
        .enumerate()
        .map(|(idx, task)| {
            let is_selected = idx == app.selected;
            let done = task.status == TaskStatus::Completed;

            let checkbox = if done { "[✓]" } else { "[ ]" };
            let checkbox_style = if done {
                theme::normal().fg(theme::SUCCESS)
            } else {
                theme::normal()
            };
            let title_style = if done {
                theme::completed()
            } else {
                theme::normal()
            };

            let title_line = Line::from(vec![
                Span::styled(checkbox, checkbox_style),
                Span::raw(" "),
                Span::styled(task.title.as_str(), title_style),
            ]);
            let description_line = Line::from(vec![
                Span::raw("    "),
                Span::styled(task.description.as_str(), theme::dimmed()),
            ]);

            let item = ListItem::new(vec![title_line, description_line]);
            if is_selected && is_focused {
                item.style(theme::selected())
            } else if is_selected {
                item.style(theme::highlighted())
            } else {
                item
            }
        })
        .collect();

    let list = List::new(items).block(block);

    frame.render_widget(list, area);
}
