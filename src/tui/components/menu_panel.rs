// Menu panel - the classic menu over a materialized copy of the dataset
//
// Every row is turned into a string up front and re-rendered each frame.
// Kept for comparing render times against the rows panel.

use super::ListPanel;
use crate::menu::{ClassicMenu, MenuAction};
use crate::source::GeneratedSource;
use crate::tui::traits::{Component, ComponentId, Copyable, Handled, Interactive};
use crossterm::event::Event;
use ratatui::{layout::Rect, Frame};

pub struct MenuPanel {
    menu: ClassicMenu,
    chosen: Option<String>,
}

impl MenuPanel {
    pub fn new(source: &GeneratedSource, focus: Option<usize>) -> Self {
        let entries = source.materialize();
        tracing::debug!("Materialized {} menu entries", entries.len());
        let mut menu = ClassicMenu::new(entries);
        if let Some(index) = focus {
            menu.select(index);
        }
        menu.set_focused(menu.focusable());
        Self { menu, chosen: None }
    }
}

impl Component for MenuPanel {
    fn id(&self) -> ComponentId {
        ComponentId::Menu
    }

    fn render(&mut self, f: &mut Frame, area: Rect) {
        self.menu.render(f.buffer_mut(), area);
    }

    fn status(&self) -> String {
        format!(
            "selected {} │ entries {}",
            self.menu.selected(),
            self.menu.entries().len()
        )
    }
}

impl Interactive for MenuPanel {
    fn handle_event(&mut self, event: &Event) -> Handled {
        match self.menu.handle_event(event) {
            Some(MenuAction::Enter) => {
                self.chosen = self.menu.selected_entry().map(|e| e.trim().to_string());
                tracing::info!("Entry {} chosen", self.menu.selected());
                Handled::Yes
            }
            Some(MenuAction::Changed) => {
                tracing::trace!("Selection changed to {}", self.menu.selected());
                Handled::Yes
            }
            Some(MenuAction::Moved) => Handled::Yes,
            None => Handled::No,
        }
    }

    fn focusable(&self) -> bool {
        self.menu.focusable()
    }

    fn is_focused(&self) -> bool {
        self.menu.is_focused()
    }

    fn set_focused(&mut self, focused: bool) {
        self.menu.set_focused(focused && self.menu.focusable());
    }

    fn focus_hint(&self) -> Option<&'static str> {
        Some("↑↓/jk PgUp/PgDn Tab  Enter:choose  y:copy")
    }
}

impl Copyable for MenuPanel {
    fn copy_text(&self) -> Option<String> {
        self.menu.selected_entry().map(|e| e.trim().to_string())
    }

    fn copy_description(&self) -> String {
        format!("entry {}", self.menu.selected())
    }
}

impl ListPanel for MenuPanel {
    fn take_chosen(&mut self) -> Option<String> {
        self.chosen.take()
    }
}
