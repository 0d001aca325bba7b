//! Core component trait - the foundation of the UI system
//!
//! Every UI element that can be rendered implements `Component`.

use ratatui::{layout::Rect, Frame};

/// Unique identifier for a component
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ComponentId {
    /// Virtualized row viewport
    Rows,
    /// Classic materialized menu
    Menu,
}

impl ComponentId {
    /// Short name shown in the footer
    pub fn label(self) -> &'static str {
        match self {
            ComponentId::Rows => "virtual",
            ComponentId::Menu => "classic",
        }
    }
}

/// Base trait for all UI components
///
/// Rendering takes `&mut self`: lists record the boxes they painted so that
/// later mouse events can be hit-tested against them.
pub trait Component {
    /// Unique identifier for this component
    fn id(&self) -> ComponentId;

    /// Render the component to the given area
    fn render(&mut self, f: &mut Frame, area: Rect);

    /// One-line state summary for the footer
    fn status(&self) -> String {
        String::new()
    }
}
