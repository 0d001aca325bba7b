// Rows panel - the virtualized viewport over the generated dataset
//
// Only a screenful of rows is ever rendered, whatever the dataset size.

use super::ListPanel;
use crate::config::ViewportConfig;
use crate::source::{DataSource, GeneratedSource, Id};
use crate::tui::traits::{Component, ComponentId, Copyable, Handled, Interactive};
use crate::viewport::VirtualViewport;
use crossterm::event::Event;
use ratatui::{layout::Rect, Frame};

pub struct RowsPanel {
    viewport: VirtualViewport<GeneratedSource>,
}

impl RowsPanel {
    pub fn new(source: GeneratedSource, config: &ViewportConfig, focus: Option<Id>) -> Self {
        let mut viewport = VirtualViewport::with_config(source, config);
        if let Some(id) = focus {
            viewport.focus_id(id);
        }
        viewport.set_focused(true);
        Self { viewport }
    }

    pub fn viewport(&self) -> &VirtualViewport<GeneratedSource> {
        &self.viewport
    }
}

impl Component for RowsPanel {
    fn id(&self) -> ComponentId {
        ComponentId::Rows
    }

    fn render(&mut self, f: &mut Frame, area: Rect) {
        f.render_widget(&mut self.viewport, area);
    }

    fn status(&self) -> String {
        let nav = self.viewport.nav();
        let hover = nav
            .hovered_id
            .map(|id| id.to_string())
            .unwrap_or_else(|| "-".to_string());
        format!(
            "focus {} │ hover {} │ visible {}/{} │ passes {}",
            nav.focused_id,
            hover,
            nav.items_visible,
            nav.view.items_total,
            self.viewport.last_passes()
        )
    }
}

impl Interactive for RowsPanel {
    fn handle_event(&mut self, event: &Event) -> Handled {
        self.viewport.handle_event(event).into()
    }

    fn focusable(&self) -> bool {
        self.viewport.focusable()
    }

    fn is_focused(&self) -> bool {
        self.viewport.is_focused()
    }

    fn set_focused(&mut self, focused: bool) {
        self.viewport.set_focused(focused);
    }

    fn focus_hint(&self) -> Option<&'static str> {
        Some("↑↓ PgUp/PgDn Home/End  Enter:choose  y:copy")
    }
}

impl Copyable for RowsPanel {
    fn copy_text(&self) -> Option<String> {
        let source = self.viewport.source();
        if source.size().is_empty() {
            return None;
        }
        Some(source.summary(self.viewport.nav().focused_id))
    }

    fn copy_description(&self) -> String {
        format!("row {}", self.viewport.nav().focused_id)
    }
}

impl ListPanel for RowsPanel {
    fn take_chosen(&mut self) -> Option<String> {
        let id = self.viewport.source_mut().take_chosen()?;
        Some(self.viewport.source().summary(id))
    }

    fn min_height(&self) -> u16 {
        self.viewport.requirement().min_height
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
    use ratatui::{backend::TestBackend, Terminal};

    fn key(code: KeyCode) -> Event {
        Event::Key(KeyEvent::new(code, KeyModifiers::NONE))
    }

    #[test]
    fn test_starts_focused_on_requested_row() {
        let panel = RowsPanel::new(
            GeneratedSource::new(1000),
            &ViewportConfig::default(),
            Some(2000),
        );
        assert!(panel.is_focused());
        assert_eq!(panel.viewport().nav().focused_id, 999);
    }

    #[test]
    fn test_render_through_frame() {
        let mut panel = RowsPanel::new(
            GeneratedSource::new(1_000_000),
            &ViewportConfig::default(),
            Some(500_000),
        );
        let mut terminal = Terminal::new(TestBackend::new(60, 20)).unwrap();
        terminal
            .draw(|f| {
                let area = f.area();
                panel.render(f, area);
            })
            .unwrap();
        assert_eq!(panel.viewport().nav().estimated_start_id, 499_990);
        assert!(panel.status().starts_with("focus 500000 │ hover - │ visible 20/1000000"));
    }

    #[test]
    fn test_min_height_comes_from_config() {
        let config = ViewportConfig {
            min_height: 12,
            ..ViewportConfig::default()
        };
        let panel = RowsPanel::new(GeneratedSource::new(100), &config, None);
        assert_eq!(panel.min_height(), 12);
    }

    #[test]
    fn test_enter_chooses_focused_row() {
        let mut panel = RowsPanel::new(GeneratedSource::new(100), &ViewportConfig::default(), Some(7));
        assert_eq!(panel.handle_event(&key(KeyCode::Enter)), Handled::Yes);
        let chosen = panel.take_chosen().unwrap();
        assert!(chosen.starts_with("[7] "));
        assert!(panel.take_chosen().is_none());
    }

    #[test]
    fn test_copy_text_follows_focus() {
        let mut panel = RowsPanel::new(GeneratedSource::new(100), &ViewportConfig::default(), Some(7));
        panel.handle_event(&key(KeyCode::Down));
        assert!(panel.copy_text().unwrap().starts_with("[8] "));
        assert_eq!(panel.copy_description(), "row 8");

        let empty = RowsPanel::new(GeneratedSource::new(0), &ViewportConfig::default(), None);
        assert!(empty.copy_text().is_none());
        assert!(empty.focusable());
    }
}
