//! Viewport configuration: scrollbar and self-sizing parameters

use serde::Deserialize;

/// Viewport behavior
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewportConfig {
    /// Paint the fractional scroll indicator on the right edge
    pub scrollbar: bool,
    /// Rows requested by the very first pass, before any height was measured
    pub initial_height: usize,
    /// Minimum height asked of the host layout
    pub min_height: u16,
}

impl Default for ViewportConfig {
    fn default() -> Self {
        Self {
            scrollbar: true,
            // Nothing is known before the first layout; the reflector
            // corrects it within the same frame.
            initial_height: 0,
            min_height: 0,
        }
    }
}

/// Viewport settings as loaded from config file
#[derive(Debug, Deserialize, Default)]
pub struct FileViewport {
    pub scrollbar: Option<bool>,
    pub initial_height: Option<usize>,
    pub min_height: Option<u16>,
}

impl ViewportConfig {
    /// Create from file config with defaults
    pub fn from_file(file: Option<FileViewport>) -> Self {
        let file = file.unwrap_or_default();
        let defaults = Self::default();

        Self {
            scrollbar: file.scrollbar.unwrap_or(defaults.scrollbar),
            initial_height: file.initial_height.unwrap_or(defaults.initial_height),
            min_height: file.min_height.unwrap_or(defaults.min_height),
        }
    }
}
