//! Synthetic, index-ordered dataset
//!
//! Rows are derived from their id on demand, so a source of a million rows
//! costs nothing until a row is actually rendered. Ids are `0..rows`, which
//! makes `count_items_before` trivial and the dataset easy to reason about in
//! tests.

use super::{DataSource, DatasetSize, EventContext, Id, RowContext};
use crossterm::event::{Event, KeyCode, KeyEventKind};
use ratatui::{
    style::{Color, Modifier, Style},
    text::{Line, Span, Text},
};

/// Phrases used for row labels. The entries containing `\n` produce multi-line
/// rows, so the viewport sees rows of varying height.
const PHRASES: &[&str] = &[
    "Measure twice, cut once.",
    "A viewport only ever needs a screenful of rows.",
    "Identifiers are opaque; navigate them, never compute them.",
    "The layout decides the height, the list decides the rows.",
    "Render the window, not the world.",
    "A scrollbar can be accurate to half a cell.\n    Each cell holds an upper and a lower half line.",
    "Self-sizing widgets guess first and correct once.\n    A second pass per frame is the upper bound.",
];

/// Every Nth row is forced onto a multi-line phrase
const MULTILINE_EVERY: u64 = 97;

/// Upper bound (exclusive) for the generated size column
const MAX_SIZE: u64 = 1_000_000;

/// SplitMix64 finalizer - cheap, stateless, well distributed
fn mix(id: u64) -> u64 {
    let mut z = id.wrapping_add(0x9E37_79B9_7F4A_7C15);
    z = (z ^ (z >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
    z = (z ^ (z >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
    z ^ (z >> 31)
}

/// A generated dataset of `rows` entries
#[derive(Debug, Clone)]
pub struct GeneratedSource {
    rows: u64,
    /// Row picked with Enter, if any
    chosen: Option<Id>,
}

impl GeneratedSource {
    pub fn new(rows: u64) -> Self {
        Self { rows, chosen: None }
    }

    /// Label text for a row, without styling
    pub fn label(&self, id: Id) -> String {
        let hash = mix(id as u64);
        let phrase = if id as u64 % MULTILINE_EVERY == MULTILINE_EVERY - 1 {
            PHRASES[PHRASES.len() - 1 - (hash % 2) as usize]
        } else {
            PHRASES[(hash % (PHRASES.len() as u64 - 2)) as usize]
        };
        format!(" [{}] {}", id, phrase)
    }

    /// Size column value for a row
    pub fn item_size(&self, id: Id) -> u64 {
        mix(id as u64 ^ 0x5EED) % MAX_SIZE
    }

    /// Label and size joined on one line (clipboard / exit summary format)
    pub fn summary(&self, id: Id) -> String {
        format!("{} ({} bytes)", self.label(id).trim(), self.item_size(id))
    }

    /// Take the row picked with Enter, clearing it
    pub fn take_chosen(&mut self) -> Option<Id> {
        self.chosen.take()
    }

    /// All row labels, materialized (for the classic menu comparison)
    pub fn materialize(&self) -> Vec<String> {
        (0..self.rows as Id).map(|id| self.label(id)).collect()
    }
}

impl DataSource for GeneratedSource {
    fn size(&self) -> DatasetSize {
        DatasetSize {
            total: self.rows,
            starting_id: 0,
            ending_id: self.rows as Id - 1,
        }
    }

    fn count_items_before(&self, id: Id) -> u64 {
        id.max(0) as u64
    }

    fn move_id_by(&self, id: &mut Id, offset: i64) -> bool {
        if self.rows == 0 {
            *id = 0;
            return false;
        }
        let last = self.rows as Id - 1;
        let target = id.saturating_add(offset);
        *id = target.clamp(0, last);
        *id == target
    }

    fn render(&self, ctx: &RowContext) -> Text<'static> {
        let size = format!("{:>7} ", self.item_size(ctx.id));
        let mut lines = self.label(ctx.id).lines().map(str::to_string).collect::<Vec<_>>();
        if lines.is_empty() {
            lines.push(String::new());
        }

        let mut out: Vec<Line<'static>> = Vec::with_capacity(lines.len());
        for (i, text) in lines.into_iter().enumerate() {
            let gutter = if i == 0 {
                Span::styled(size.clone(), Style::default().fg(Color::DarkGray))
            } else {
                Span::raw(" ".repeat(size.len()))
            };
            out.push(Line::from(vec![gutter, Span::raw("│"), Span::raw(text)]));
        }

        let mut style = Style::default();
        if ctx.focused {
            style = if ctx.component_focused {
                style.bg(Color::Green).fg(Color::Black)
            } else {
                style.bg(Color::DarkGray)
            };
        }
        if ctx.hovered {
            style = style.add_modifier(Modifier::REVERSED);
        }
        Text::from(out).style(style)
    }

    fn handle_event(&mut self, ctx: &EventContext<'_>) -> bool {
        if let Event::Key(key) = ctx.event {
            if ctx.focused && key.kind == KeyEventKind::Press && key.code == KeyCode::Enter {
                self.chosen = Some(ctx.nav.focused_id);
                tracing::info!("Row {} chosen", ctx.nav.focused_id);
                return true;
            }
        }
        ctx.handled
    }
}
