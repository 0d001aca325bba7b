//! Copyable trait for components that provide clipboard content

use super::Component;

/// Trait for components that can provide content for the clipboard
///
/// When the user presses `y`, the list's `Copyable` implementation
/// determines what gets copied.
pub trait Copyable: Component {
    /// Human-readable text for the clipboard
    ///
    /// Returns `None` if there's nothing to copy (e.g., empty list).
    fn copy_text(&self) -> Option<String>;

    /// Description of what will be copied (for the footer message)
    fn copy_description(&self) -> String {
        "row".to_string()
    }
}

/// Result of a copy operation
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CopyResult {
    /// Successfully copied content
    Success {
        /// What was copied
        description: String,
        /// Number of characters copied
        length: usize,
    },
    /// Nothing to copy (empty list)
    Empty,
    /// Clipboard access failed
    Error(String),
}

impl CopyResult {
    /// Footer message for this result
    pub fn message(&self) -> String {
        match self {
            Self::Success {
                description,
                length,
            } => format!("✓ Copied {} ({} chars)", description, length),
            Self::Empty => "Nothing to copy".to_string(),
            Self::Error(msg) => format!("✗ {}", msg),
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success { .. })
    }
}
