//! Status filter tab rendering.

use ratatui::{
    Frame,
    layout::Rect,
    text::{Line, Span},
    widgets::Paragraph,
};

use super::theme;
use crate::app::App;
use crate::storage::SnapshotStore;
use crate::tasks::StatusFilter;

/// Render the filter tab row.
pub fn render<S: SnapshotStore>(frame: &mut Frame, area: Rect, app: &App<S>) {
    let mut spans = vec![Span::styled(" TermTask ", theme::bold())];

    for (idx, filter) in StatusFilter::TABS.iter().enumerate() {
        spans.push(Span::raw(" "));
        let label = format!(" {}:{} ", idx + 1, filter.label());
        if *filter == app.filter {
            spans.push(Span::styled(label, theme::selected()));
        } else {
            spans.push(Span::styled(label, theme::dimmed()));
        }
    }

    let paragraph = Paragraph::new(Line::from(spans));
    frame.render_widget(paragraph, area);
}
