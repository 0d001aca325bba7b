// TUI application state
//
// The App owns one list panel (virtual or classic), the log buffer feeding
// the status bar, and the render time shown in the window title. Input is
// dispatched in layers: global keys first, then the panel, then fallbacks.

use super::clipboard;
use super::components::ListPanel;
use super::traits::Handled;
use crate::logging::{LogBuffer, LogLevel};
use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use std::time::{Duration, Instant};

/// Debounce duration for action keys (y)
/// Prevents rapid-fire triggers on terminals that don't send release events
const ACTION_DEBOUNCE: Duration = Duration::from_millis(150);

/// How long a copy result stays in the status bar
const COPY_MESSAGE_TTL: Duration = Duration::from_secs(3);

/// Main application state for the TUI
pub struct App {
    /// The list being shown
    panel: Box<dyn ListPanel>,

    /// Whether the app should quit
    pub should_quit: bool,

    /// Row picked with Enter; printed after the terminal is restored
    pub chosen: Option<String>,

    /// Time the list took to render in the last frame
    pub render_time: Duration,

    /// Log buffer for the status bar
    pub log_buffer: LogBuffer,

    /// Result of the last copy, shown until the next log line replaces it
    copy_message: Option<String>,

    /// Last time an action key was triggered (for debouncing)
    last_action_time: Option<Instant>,
}

impl App {
    pub fn new(panel: Box<dyn ListPanel>, log_buffer: LogBuffer) -> Self {
        Self {
            panel,
            should_quit: false,
            chosen: None,
            render_time: Duration::ZERO,
            log_buffer,
            copy_message: None,
            last_action_time: None,
        }
    }

    pub fn panel(&self) -> &dyn ListPanel {
        self.panel.as_ref()
    }

    pub fn panel_mut(&mut self) -> &mut dyn ListPanel {
        self.panel.as_mut()
    }

    /// Message for the status bar: the last copy result, else the latest log
    pub fn message(&self) -> Option<String> {
        self.copy_message
            .clone()
            .or_else(|| self.log_buffer.latest(LogLevel::Info).map(|e| e.summary()))
    }

    /// Check if an action should be debounced
    /// Returns true if action should be blocked (too soon since last action)
    pub fn should_debounce_action(&mut self) -> bool {
        let now = Instant::now();
        if let Some(last) = self.last_action_time {
            if now.duration_since(last) < ACTION_DEBOUNCE {
                return true;
            }
        }
        self.last_action_time = Some(now);
        false
    }

    /// Handle one terminal event
    /// Layered dispatch: Global → Panel → Fallback
    pub fn handle_event(&mut self, event: &Event) -> Handled {
        // Layer 1: global keys
        if let Event::Key(key) = event {
            if key.kind != KeyEventKind::Release && self.handle_global_keys(key) {
                return Handled::Yes;
            }
        }

        // Layer 2: the list
        let handled = self.panel.handle_event(event);
        if let Some(chosen) = self.panel.take_chosen() {
            tracing::info!("Chosen: {}", chosen);
            self.chosen = Some(chosen);
            self.should_quit = true;
            return Handled::Yes;
        }
        if handled.was_handled() {
            return handled;
        }

        // Layer 3: fallbacks for keys the list left alone
        match event {
            Event::Key(key) if key.kind == KeyEventKind::Press => match key.code {
                KeyCode::Tab => {
                    self.toggle_focus();
                    Handled::Yes
                }
                KeyCode::Esc if self.panel.is_focused() => {
                    self.panel.set_focused(false);
                    Handled::Yes
                }
                _ => Handled::No,
            },
            _ => Handled::No,
        }
    }

    fn handle_global_keys(&mut self, key: &KeyEvent) -> bool {
        match key.code {
            KeyCode::Char('q') => {
                self.should_quit = true;
                true
            }
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.should_quit = true;
                true
            }
            KeyCode::Char('y') => {
                if !self.should_debounce_action() {
                    self.copy_focused();
                }
                true
            }
            _ => false,
        }
    }

    /// Give keyboard focus to the list, or take it away
    pub fn toggle_focus(&mut self) {
        let focused = !self.panel.is_focused() && self.panel.focusable();
        self.panel.set_focused(focused);
        tracing::debug!("List focus: {}", focused);
    }

    /// Copy the focused row to the system clipboard
    pub fn copy_focused(&mut self) {
        let result = clipboard::copy_from(self.panel.as_ref());
        self.copy_message = Some(result.message());
    }

    /// Expire the copy message so the status bar returns to log output
    pub fn tick(&mut self) {
        let stale = self
            .last_action_time
            .is_some_and(|t| t.elapsed() > COPY_MESSAGE_TTL);
        if stale {
            self.copy_message = None;
        }
    }
}
