//! DataSource contract - the only way the viewport touches data
//!
//! A dataset is addressed through opaque identifiers. The viewport never
//! indexes into a collection and never does arithmetic on ids: every step from
//! one row to another goes through [`DataSource::move_id_by`]. That keeps the
//! core independent of how the owner stores its rows (a vector, a database
//! cursor, a generator) and lets it page through millions of rows while only
//! ever rendering a screenful.
//!
//! # Row lifecycle within one frame
//!
//! ```text
//! size() ──► find_start_id() ──► render(id) ─► move_id_by(id, 1) ─► render(id) ...
//!                 │                                   (false = dataset exhausted)
//!                 └── move_id_by(start, ±n)
//! ```

mod generated;

pub use generated::GeneratedSource;

use crate::viewport::NavState;
use crossterm::event::Event;
use ratatui::{layout::Rect, text::Text};

/// Opaque row identifier
///
/// Ordering and validity are defined by the data source. The only legal way to
/// derive one id from another is [`DataSource::move_id_by`].
pub type Id = i64;

/// Dataset extent as reported by the owner
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DatasetSize {
    /// Number of rows in the dataset
    pub total: u64,
    /// First valid id (meaningless when `total == 0`)
    pub starting_id: Id,
    /// Last valid id (meaningless when `total == 0`)
    pub ending_id: Id,
}

impl DatasetSize {
    pub fn is_empty(&self) -> bool {
        self.total == 0
    }
}

/// Per-row information handed to [`DataSource::render`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RowContext {
    /// Id of the row being rendered
    pub id: Id,
    /// This row holds the viewport's focus
    pub focused: bool,
    /// The pointer is over this row
    pub hovered: bool,
    /// The viewport itself has keyboard focus
    pub component_focused: bool,
}

/// Everything the owner may want to know about one input event
///
/// Built by the viewport after its own navigation handling and forwarded to
/// [`DataSource::handle_event`]. Navigation state is exposed read-only.
#[derive(Debug, Clone, Copy)]
pub struct EventContext<'a> {
    /// The raw input event
    pub event: &'a Event,
    /// Viewport box from the last frame
    pub viewport: Rect,
    /// Box of every produced row, in render order
    pub rows: &'a [Rect],
    /// Navigation state after internal handling
    pub nav: &'a NavState,
    /// The viewport has keyboard focus
    pub focused: bool,
    /// The event belongs to this viewport (keys always do, mouse events only
    /// inside the viewport box)
    pub mouse_ours: bool,
    /// Focused id before the event was applied
    pub starting_focused_id: Id,
    /// Whether the viewport already handled the event
    pub handled: bool,
}

impl EventContext<'_> {
    /// Whether internal handling moved the focus
    pub fn focus_changed(&self) -> bool {
        self.nav.focused_id != self.starting_focused_id
    }
}

/// Capability set implemented by the dataset owner
///
/// Navigation methods take `&self`: they are queries with an in/out id, and
/// may be called many times per frame. Only event handling may mutate the
/// owner.
pub trait DataSource {
    /// Current dataset extent. No side effects.
    fn size(&self) -> DatasetSize;

    /// Number of rows ordered before `id`
    ///
    /// Monotonic and non-negative for every id reachable via `move_id_by`.
    fn count_items_before(&self, id: Id) -> u64;

    /// Move `id` by `offset` rows, clamped to `[starting_id, ending_id]`
    ///
    /// Returns `false` iff the offset could not be fully satisfied, i.e. the
    /// id landed on a dataset boundary. `offset == 0` is a pure clamp.
    fn move_id_by(&self, id: &mut Id, offset: i64) -> bool;

    /// Produce the visual for one row
    ///
    /// The height of the returned text must be stable for the same id within
    /// one frame. Violations are tolerated but cost an extra corrective pass.
    fn render(&self, ctx: &RowContext) -> Text<'static>;

    /// React to an input event after the viewport's own navigation handling
    ///
    /// The return value is what the viewport reports upward, so the owner can
    /// override or extend the internal decision. The default keeps it.
    fn handle_event(&mut self, ctx: &EventContext<'_>) -> bool {
        ctx.handled
    }
}
