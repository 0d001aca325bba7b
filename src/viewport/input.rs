//! Input routing for the viewport
//!
//! Layering mirrors the rest of the TUI: the viewport applies its own
//! navigation first, then hands the event and the resulting state to the data
//! source, whose answer is what bubbles up.

use super::VirtualViewport;
use crate::source::{DataSource, EventContext, Id};
use crossterm::event::{Event, KeyCode, KeyEventKind, MouseButton, MouseEventKind};
use ratatui::layout::{Position, Rect};

/// Index of the row whose box contains `pos`
fn row_at(rows: &[Rect], pos: Position) -> Option<usize> {
    rows.iter().position(|b| !b.is_empty() && b.contains(pos))
}

impl<S: DataSource> VirtualViewport<S> {
    /// Route one input event; returns whether it was handled
    ///
    /// Pointer events outside the viewport box are not handled and never
    /// reach the data source; a move out of the box still drops the hover.
    /// Keys are only acted on while the viewport has
    /// keyboard focus, but are always forwarded.
    pub fn handle_event(&mut self, event: &Event) -> bool {
        self.source.move_id_by(&mut self.nav.focused_id, 0);
        let starting_focused_id = self.nav.focused_id;

        let mouse_ours = match event {
            Event::Mouse(mouse) => self.area.contains(Position::new(mouse.column, mouse.row)),
            _ => true,
        };
        if !mouse_ours {
            if let Event::Mouse(mouse) = event {
                if mouse.kind == MouseEventKind::Moved {
                    self.nav.hovered_id = None;
                }
            }
            return false;
        }

        let mut applied = false;
        match event {
            Event::Mouse(mouse) => {
                let pos = Position::new(mouse.column, mouse.row);
                match mouse.kind {
                    MouseEventKind::ScrollUp => self.move_focus(-1),
                    MouseEventKind::ScrollDown => self.move_focus(1),
                    MouseEventKind::Down(MouseButton::Left) => {
                        if let Some(index) = row_at(&self.rows, pos) {
                            self.nav.focused_id = self.id_at(index);
                            self.focused = true;
                            applied = true;
                        }
                    }
                    MouseEventKind::Moved => {
                        let hovered = row_at(&self.rows, pos).map(|index| self.id_at(index));
                        applied = hovered != self.nav.hovered_id;
                        self.nav.hovered_id = hovered;
                    }
                    _ => {}
                }
            }
            Event::Key(key) if self.focused && key.kind != KeyEventKind::Release => {
                let page = self.nav.items_visible as i64;
                match key.code {
                    KeyCode::Up => self.move_focus(-1),
                    KeyCode::Down => self.move_focus(1),
                    KeyCode::PageUp => self.move_focus(-page),
                    KeyCode::PageDown => self.move_focus(page),
                    KeyCode::Home => {
                        self.nav.focused_id = self.source.size().starting_id;
                        self.source.move_id_by(&mut self.nav.focused_id, 0);
                    }
                    KeyCode::End => {
                        self.nav.focused_id = self.source.size().ending_id;
                        self.source.move_id_by(&mut self.nav.focused_id, 0);
                    }
                    _ => {}
                }
            }
            _ => {}
        }

        let handled = applied || self.nav.focused_id != starting_focused_id;
        if handled {
            tracing::trace!(
                from = starting_focused_id,
                to = self.nav.focused_id,
                hovered = ?self.nav.hovered_id,
                "Viewport navigation"
            );
        }

        let ctx = EventContext {
            event,
            viewport: self.area,
            rows: &self.rows,
            nav: &self.nav,
            focused: self.focused,
            mouse_ours,
            starting_focused_id,
            handled,
        };
        self.source.handle_event(&ctx)
    }

    fn move_focus(&mut self, offset: i64) {
        self.source.move_id_by(&mut self.nav.focused_id, offset);
    }

    /// Id of the `index`-th produced row
    fn id_at(&self, index: usize) -> Id {
        let mut id = self.nav.estimated_start_id;
        self.source.move_id_by(&mut id, index as i64);
        id
    }
}
