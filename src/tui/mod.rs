// TUI module - Terminal User Interface
//
// This module manages the terminal UI using ratatui. It handles:
// - Terminal initialization and cleanup
// - Event loop (keyboard and mouse input, timer ticks)
// - Rendering the list window and status bar

pub mod app;
pub mod clipboard;
pub mod components;
pub mod traits;
pub mod ui;

use crate::config::Config;
use crate::logging::LogBuffer;
use anyhow::{Context, Result};
use app::App;
use components::ListPanel;
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::time::Duration;

/// Run the TUI until the user quits
///
/// Sets up the terminal, runs the event loop, and restores the terminal even
/// when the loop fails. Returns the row chosen with Enter, if any.
pub async fn run_tui(
    panel: Box<dyn ListPanel>,
    log_buffer: LogBuffer,
    config: &Config,
) -> Result<Option<String>> {
    // Set up terminal
    enable_raw_mode().context("Failed to enable raw mode")?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)
        .context("Failed to setup terminal")?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend).context("Failed to create terminal")?;

    let mut app = App::new(panel, log_buffer);
    let tick = Duration::from_millis(config.tick_ms);

    // Run the event loop
    let result = run_event_loop(&mut terminal, &mut app, tick).await;

    // Restore terminal
    disable_raw_mode().context("Failed to disable raw mode")?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )
    .context("Failed to restore terminal")?;
    terminal.show_cursor().context("Failed to show cursor")?;

    result.map(|()| app.chosen)
}

/// Main event loop
///
/// Handles two kinds of wakeups:
/// 1. Terminal input (keys, mouse, resize)
/// 2. Timer ticks (periodic redraws so the status bar picks up new logs)
///
/// tokio::select! waits on both and responds to whichever completes first.
async fn run_event_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
    tick: Duration,
) -> Result<()> {
    let mut tick_interval = tokio::time::interval(tick);

    loop {
        terminal
            .draw(|f| ui::draw(f, app))
            .context("Failed to draw terminal")?;

        tokio::select! {
            // Keyboard or mouse input
            polled = async {
                if event::poll(Duration::from_millis(10)).unwrap_or(false) {
                    event::read().map(Some)
                } else {
                    Ok(None)
                }
            } => {
                match polled.context("Failed to read terminal event")? {
                    Some(Event::Resize(width, height)) => {
                        tracing::debug!("Terminal resized to {}x{}", width, height);
                    }
                    Some(event) => {
                        app.handle_event(&event);
                    }
                    None => {}
                }
            }

            // Periodic tick for redrawing
            _ = tick_interval.tick() => {
                app.tick();
            }
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}
