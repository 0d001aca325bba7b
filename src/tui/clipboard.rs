//! Clipboard helper for copying text to the system clipboard
//!
//! Uses `arboard` for cross-platform support. The clipboard is opened per
//! copy so no handle is held while the TUI runs.

use anyhow::{Context, Result};
use arboard::Clipboard;

use super::traits::{CopyResult, Copyable};

/// Copy text to the system clipboard
///
/// Common failure cases: no display server (headless Linux), permission denied.
pub fn copy_to_clipboard(text: &str) -> Result<()> {
    let mut clipboard = Clipboard::new().context("Failed to access clipboard")?;
    clipboard
        .set_text(text)
        .context("Failed to set clipboard text")?;
    Ok(())
}

/// Copy a component's text and describe the outcome
pub fn copy_from<C: Copyable + ?Sized>(component: &C) -> CopyResult {
    let Some(text) = component.copy_text() else {
        return CopyResult::Empty;
    };
    match copy_to_clipboard(&text) {
        Ok(()) => {
            tracing::info!("Copied {} to clipboard", component.copy_description());
            CopyResult::Success {
                description: component.copy_description(),
                length: text.chars().count(),
            }
        }
        Err(e) => {
            tracing::warn!("Clipboard copy failed: {:#}", e);
            CopyResult::Error(format!("{:#}", e))
        }
    }
}
