// UI rendering logic
//
// One bordered window holding the list, with the last frame's render time
// in its title, and a status bar underneath.

use super::app::App;
use super::components::status_bar;
use ratatui::{
    layout::{Constraint, Direction, Layout},
    style::{Color, Style},
    widgets::{Block, Borders},
    Frame,
};
use std::time::Instant;

/// Main UI render function - called on every frame
pub fn draw(f: &mut Frame, app: &mut App) {
    // - List window (fills remaining space)
    // - Status bar (1 line)
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([list_constraint(app), Constraint::Length(1)])
        .split(f.area());

    let border_style = if app.panel().is_focused() {
        Style::default().fg(Color::Green)
    } else {
        Style::default().fg(Color::DarkGray)
    };
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(border_style)
        .title(format!(" Render time: {}ms ", app.render_time.as_millis()));
    let inner = block.inner(chunks[0]);
    f.render_widget(block, chunks[0]);

    let start = Instant::now();
    app.panel_mut().render(f, inner);
    app.render_time = start.elapsed();

    status_bar::render(f, chunks[1], app);
}

/// Height constraint for the bordered list window
///
/// Leaves room for at least one row inside the borders.
fn list_constraint(app: &App) -> Constraint {
    Constraint::Min(app.panel().min_height().max(1).saturating_add(2))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ViewportConfig;
    use crate::logging::LogBuffer;
    use crate::source::GeneratedSource;
    use crate::tui::components::{MenuPanel, RowsPanel};
    use ratatui::{backend::TestBackend, buffer::Buffer, Terminal};

    fn row_text(buf: &Buffer, y: u16) -> String {
        (0..buf.area.width)
            .map(|x| buf.cell((x, y)).map(|c| c.symbol()).unwrap_or(""))
            .collect()
    }

    fn render(app: &mut App, width: u16, height: u16) -> Buffer {
        let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
        terminal.draw(|f| draw(f, app)).unwrap();
        terminal.backend().buffer().clone()
    }

    #[test]
    fn test_window_title_and_first_row() {
        let panel = RowsPanel::new(GeneratedSource::new(1000), &ViewportConfig::default(), None);
        let mut app = App::new(Box::new(panel), LogBuffer::new());
        let buf = render(&mut app, 70, 12);

        assert!(row_text(&buf, 0).contains(" Render time: 0ms "));
        // first row inside the border: size gutter, separator, label
        let first = row_text(&buf, 1);
        assert!(first.contains("│ [0] "), "{first}");
        assert!(row_text(&buf, 11).starts_with(" [virtual] focus 0 │ hover -"));
    }

    #[test]
    fn test_status_bar_shows_latest_log() {
        let panel = MenuPanel::new(&GeneratedSource::new(5), None);
        let log_buffer = LogBuffer::new();
        let mut app = App::new(Box::new(panel), log_buffer.clone());
        log_buffer.add(crate::logging::LogEntry {
            timestamp: chrono::Local::now(),
            level: crate::logging::LogLevel::Info,
            target: "test".to_string(),
            message: "hello footer".to_string(),
        });
        let buf = render(&mut app, 120, 10);
        let status = row_text(&buf, 9);
        assert!(status.starts_with(" [classic] selected 0 │ entries 5"));
        assert!(status.contains("hello footer"), "{status}");
    }

    #[test]
    fn test_list_constraint_follows_min_height() {
        let config = ViewportConfig {
            min_height: 8,
            ..ViewportConfig::default()
        };
        let panel = RowsPanel::new(GeneratedSource::new(100), &config, None);
        let app = App::new(Box::new(panel), LogBuffer::new());
        assert_eq!(list_constraint(&app), Constraint::Min(10));

        let panel = MenuPanel::new(&GeneratedSource::new(5), None);
        let app = App::new(Box::new(panel), LogBuffer::new());
        assert_eq!(list_constraint(&app), Constraint::Min(3));
    }
}
