//! Classic menu - the eager, finite list the viewport is measured against
//!
//! Every entry is held in memory and rendered every frame. It shares the row
//! stack with the viewport, so the two differ only in how many rows they
//! produce: all of them here, a screenful there.

use crate::viewport::{LayoutNode, RowStack};
use crossterm::event::{Event, KeyCode, KeyEventKind, MouseButton, MouseEventKind};
use ratatui::{
    buffer::Buffer,
    layout::{Position, Rect},
    style::{Modifier, Style},
    text::{Line, Text},
};

/// Outcome of a handled menu event
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuAction {
    /// The selected entry changed
    Changed,
    /// Only the focused (highlighted) entry moved, or focus was taken
    Moved,
    /// Enter was pressed on the selected entry
    Enter,
}

/// Single-select menu over a materialized list of entries
#[derive(Debug, Clone, Default)]
pub struct ClassicMenu {
    entries: Vec<String>,
    selected: usize,
    /// Entry under the highlight; follows the pointer
    focused_entry: usize,
    /// Keyboard focus
    focused: bool,
    /// Box of every entry from the last render
    boxes: Vec<Rect>,
    /// List box from the last render
    area: Rect,
}

impl ClassicMenu {
    pub fn new(entries: Vec<String>) -> Self {
        Self {
            entries,
            ..Self::default()
        }
    }

    pub fn entries(&self) -> &[String] {
        &self.entries
    }

    pub fn selected(&self) -> usize {
        self.selected
    }

    pub fn selected_entry(&self) -> Option<&str> {
        self.entries.get(self.selected).map(String::as_str)
    }

    pub fn focused_entry(&self) -> usize {
        self.focused_entry
    }

    pub fn select(&mut self, index: usize) {
        self.selected = index;
        self.focused_entry = index;
        self.clamp();
    }

    pub fn is_focused(&self) -> bool {
        self.focused
    }

    pub fn set_focused(&mut self, focused: bool) {
        self.focused = focused;
    }

    /// A menu without entries cannot take focus
    pub fn focusable(&self) -> bool {
        !self.entries.is_empty()
    }

    fn clamp(&mut self) {
        let last = self.entries.len().saturating_sub(1);
        self.selected = self.selected.min(last);
        self.focused_entry = self.focused_entry.min(last);
    }

    /// Render every entry into `area`
    pub fn render(&mut self, buf: &mut Buffer, area: Rect) {
        self.clamp();
        let rows = self
            .entries
            .iter()
            .enumerate()
            .map(|(i, entry)| {
                let prefix = if i == self.selected { "> " } else { "  " };
                let mut style = Style::default();
                if i == self.focused_entry && self.focused {
                    style = style.add_modifier(Modifier::REVERSED);
                }
                if i == self.selected {
                    style = style.add_modifier(Modifier::BOLD);
                }
                Text::from(Line::from(format!("{prefix}{entry}"))).style(style)
            })
            .collect();
        let focus = (!self.entries.is_empty()).then_some(self.selected);

        let mut stack = RowStack::new(rows, focus);
        stack.place(area);
        stack.paint(buf);
        self.boxes = stack.boxes().to_vec();
        self.area = area.intersection(buf.area);
    }

    /// Apply one input event; `None` means it was not handled
    pub fn handle_event(&mut self, event: &Event) -> Option<MenuAction> {
        self.clamp();
        if self.entries.is_empty() {
            return None;
        }
        let selected = self.selected;
        let last = self.entries.len() - 1;

        match event {
            Event::Mouse(mouse) => {
                let pos = Position::new(mouse.column, mouse.row);
                if !self.area.contains(pos) {
                    return None;
                }
                let hit = self
                    .boxes
                    .iter()
                    .position(|b| !b.is_empty() && b.contains(pos));
                match (mouse.kind, hit) {
                    (MouseEventKind::ScrollUp, _) => self.select(selected.saturating_sub(1)),
                    (MouseEventKind::ScrollDown, _) => self.select(selected + 1),
                    (MouseEventKind::Down(MouseButton::Left), Some(i)) => {
                        let took_focus = !self.focused;
                        self.focused = true;
                        self.select(i);
                        if i == selected {
                            return took_focus.then_some(MenuAction::Moved);
                        }
                    }
                    (MouseEventKind::Moved, Some(i)) => {
                        if i == self.focused_entry {
                            return None;
                        }
                        self.focused_entry = i;
                        return Some(MenuAction::Moved);
                    }
                    _ => return None,
                }
            }
            Event::Key(key) if self.focused && key.kind != KeyEventKind::Release => {
                let page = usize::from(self.area.height.saturating_sub(1)).max(1);
                match key.code {
                    KeyCode::Up | KeyCode::Char('k') => self.select(selected.saturating_sub(1)),
                    KeyCode::Down | KeyCode::Char('j') => self.select(selected + 1),
                    KeyCode::PageUp => self.select(selected.saturating_sub(page)),
                    KeyCode::PageDown => self.select(selected.saturating_add(page)),
                    KeyCode::Home => self.select(0),
                    KeyCode::End => self.select(last),
                    KeyCode::Tab => self.select(if selected == last { 0 } else { selected + 1 }),
                    KeyCode::BackTab => {
                        self.select(if selected == 0 { last } else { selected - 1 })
                    }
                    KeyCode::Enter => return Some(MenuAction::Enter),
                    _ => return None,
                }
            }
            _ => return None,
        }

        (self.selected != selected).then_some(MenuAction::Changed)
    }
}
