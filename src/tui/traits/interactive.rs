//! Interactive trait for components that handle input
//!
//! The App routes every key and mouse event it does not consume itself to
//! the list component.

use super::Component;
use crossterm::event::Event;

/// Result of handling an input event
///
/// Tells the App whether the component consumed the event or if it should
/// bubble up for global handling.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Handled {
    /// Event was consumed by the component
    Yes,
    /// Event was not handled, should bubble up
    No,
}

impl Handled {
    /// Check if the event was handled
    pub fn was_handled(self) -> bool {
        self == Self::Yes
    }
}

impl From<bool> for Handled {
    fn from(handled: bool) -> Self {
        if handled {
            Self::Yes
        } else {
            Self::No
        }
    }
}

/// Trait for components that handle input events
///
/// # Event Flow
///
/// ```text
/// Event
///    │
///    ▼
/// App (global keys: q, Tab, y)
///    │
///    │ if not handled
///    ▼
/// List component (via Interactive trait)
///    │
///    │ returns Handled::Yes or Handled::No
///    ▼
/// App (redraw, quit on a chosen row)
/// ```
pub trait Interactive: Component {
    /// Handle a key or mouse event
    fn handle_event(&mut self, event: &Event) -> Handled;

    /// Whether this component can receive keyboard focus
    fn focusable(&self) -> bool {
        true
    }

    /// Whether this component has keyboard focus
    fn is_focused(&self) -> bool;

    /// Give or take keyboard focus
    fn set_focused(&mut self, focused: bool);

    /// Keybind hints shown in the footer while focused
    fn focus_hint(&self) -> Option<&'static str> {
        None
    }
}
