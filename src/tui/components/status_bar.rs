// Status bar component
//
// One line under the list: which list is shown, its navigation state, key
// hints, and the latest copy result or log line.

use super::truncate_to_width;
use crate::tui::app::App;
use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

pub fn render(f: &mut Frame, area: Rect, app: &App) {
    f.render_widget(Paragraph::new(status_line(app, area.width)), area);
}

/// Build the status line for a given width
pub fn status_line(app: &App, width: u16) -> Line<'static> {
    let panel = app.panel();
    let mut left = format!(" [{}] {}", panel.id().label(), panel.status());
    if panel.is_focused() {
        if let Some(hint) = panel.focus_hint() {
            left.push_str(" │ ");
            left.push_str(hint);
        }
    }

    let message = app.message().unwrap_or_default();
    let width = usize::from(width);
    let left = truncate_to_width(&left, width);
    let remaining = width.saturating_sub(unicode_width::UnicodeWidthStr::width(left.as_str()));

    let mut spans = vec![Span::raw(left)];
    if remaining > 3 && !message.is_empty() {
        spans.push(Span::raw(" │ "));
        spans.push(Span::styled(
            truncate_to_width(&message, remaining - 3),
            Style::default().fg(Color::DarkGray),
        ));
    }
    Line::from(spans)
}
