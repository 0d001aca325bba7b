// Components module - the list panels and the status bar
//
// Both list panels show the same generated dataset: one through the
// virtualized viewport, one through the classic materialized menu. The App
// holds whichever was picked on the command line behind `ListPanel`.

pub mod menu_panel;
pub mod rows_panel;
pub mod status_bar;

pub use menu_panel::MenuPanel;
pub use rows_panel::RowsPanel;

use super::traits::{Copyable, Interactive};

/// A list the App can drive: render, route input, copy, and report a pick
pub trait ListPanel: Interactive + Copyable {
    /// Row chosen with Enter since the last call, as display text
    fn take_chosen(&mut self) -> Option<String>;

    /// Rows the list wants from the frame layout, borders excluded
    fn min_height(&self) -> u16 {
        0
    }
}

/// Truncate to a display width, marking the cut with an ellipsis
///
/// Uses unicode display width (not byte length) for the column count.
pub fn truncate_to_width(text: &str, max_width: usize) -> String {
    use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

    if text.width() <= max_width {
        return text.to_string();
    }
    let target_width = max_width.saturating_sub(1);
    let mut current_width = 0;
    let mut truncate_at = 0;
    for (i, c) in text.char_indices() {
        let char_width = c.width().unwrap_or(0);
        if current_width + char_width > target_width {
            break;
        }
        current_width += char_width;
        truncate_at = i + c.len_utf8();
    }
    let mut out = text[..truncate_at].to_string();
    if max_width > 0 {
        out.push('…');
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_short_text_unchanged() {
        assert_eq!(truncate_to_width("abc", 5), "abc");
        assert_eq!(truncate_to_width("abcde", 5), "abcde");
    }

    #[test]
    fn test_truncate_adds_ellipsis() {
        assert_eq!(truncate_to_width("abcdefgh", 5), "abcd…");
        assert_eq!(truncate_to_width("abc", 0), "");
    }

    #[test]
    fn test_truncate_counts_display_width() {
        // each CJK char is two columns wide
        assert_eq!(truncate_to_width("日本語テキスト", 6), "日本…");
    }
}
