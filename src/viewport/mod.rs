//! Virtualized viewport - renders a window of a dataset it never holds
//!
//! Each frame the viewport asks the data source for its size, finds the first
//! row of a window centered on the focused id, renders at most
//! `component_height` rows, and wraps them in two decorators:
//!
//! ```text
//! ScrollIndicator ── Reflector ── RowStack
//!       │                │
//!       │                └─ measures the granted height, asks for a second pass
//!       └─ derives visible rows, paints the scrollbar column
//! ```
//!
//! The decorators only record what they measure. Once painting is done the
//! viewport commits those measurements into its navigation state, and the
//! frame driver ([`VirtualViewport::draw_frame`]) runs at most one corrective
//! pass when the reflector asks for it.

mod indicator;
mod input;
mod node;
mod reflect;
mod window;

pub use indicator::{IndicatorInput, ScrollIndicator, ThumbCell, ThumbSpan, VisibleRows};
pub use node::{LayoutNode, Requirement, RowStack, ValidCount};
pub use reflect::{needs_correction, Measurement, ReflectInput, Reflector};
pub use window::find_start_id;

use crate::config::ViewportConfig;
use crate::source::{DataSource, Id, RowContext};
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    widgets::{Clear, Widget},
};

/// Corrective passes allowed per frame, on top of the first pass
pub const MAX_CORRECTIVE_PASSES: usize = 1;

/// Per-pass rendering figures
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ViewState {
    /// Rows in the dataset at the start of the pass
    pub items_total: u64,
    /// Rows rendered by the pass
    pub items_produced: usize,
    /// Rows the next pass will request (measured height of the last pass)
    pub component_height: usize,
}

/// Navigation state owned by one viewport
///
/// Exposed read-only to the data source through the event context.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct NavState {
    pub focused_id: Id,
    /// Row under the pointer; `None` when the pointer is over no row
    pub hovered_id: Option<Id>,
    /// First row produced by the last pass
    pub estimated_start_id: Id,
    /// First row with a visible box in the last pass
    pub real_start_id: Id,
    /// Rows with a visible box in the last pass
    pub items_visible: usize,
    /// A corrective pass is pending
    pub should_redraw: bool,
    pub view: ViewState,
}

/// Result of one render pass
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Drawn {
    /// The pass was built for the wrong height; render once more
    pub request_more: bool,
}

/// Virtualized list viewport over a [`DataSource`]
pub struct VirtualViewport<S> {
    source: S,
    nav: NavState,
    /// Box of every produced row, resized with the produced rows each pass
    rows: Vec<Rect>,
    /// Viewport box (clipped) from the last pass
    area: Rect,
    /// Keyboard focus
    focused: bool,
    scrollbar: bool,
    min_height: u16,
    /// Passes run by the last `draw_frame`
    last_passes: usize,
}

impl<S: DataSource> VirtualViewport<S> {
    pub fn new(source: S) -> Self {
        Self::with_config(source, &ViewportConfig::default())
    }

    pub fn with_config(source: S, config: &ViewportConfig) -> Self {
        let size = source.size();
        let nav = NavState {
            focused_id: size.starting_id,
            estimated_start_id: size.starting_id,
            real_start_id: size.starting_id,
            view: ViewState {
                component_height: config.initial_height,
                ..ViewState::default()
            },
            ..NavState::default()
        };
        Self {
            source,
            nav,
            rows: Vec::new(),
            area: Rect::default(),
            focused: false,
            scrollbar: config.scrollbar,
            min_height: config.min_height,
            last_passes: 0,
        }
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    pub fn source_mut(&mut self) -> &mut S {
        &mut self.source
    }

    /// Swap in a different dataset
    ///
    /// Per-row state from the old dataset is dropped and focus is moved to
    /// the new dataset's first row. Returns the previous source.
    pub fn replace_source(&mut self, source: S) -> S {
        let old = std::mem::replace(&mut self.source, source);
        let size = self.source.size();
        self.rows.clear();
        self.nav.focused_id = size.starting_id;
        self.nav.hovered_id = None;
        self.nav.estimated_start_id = size.starting_id;
        self.nav.real_start_id = size.starting_id;
        self.nav.items_visible = 0;
        self.nav.should_redraw = true;
        old
    }

    pub fn nav(&self) -> &NavState {
        &self.nav
    }

    /// Row boxes from the last pass
    pub fn row_boxes(&self) -> &[Rect] {
        &self.rows
    }

    /// Viewport box from the last pass
    pub fn area(&self) -> Rect {
        self.area
    }

    pub fn is_focused(&self) -> bool {
        self.focused
    }

    pub fn set_focused(&mut self, focused: bool) {
        self.focused = focused;
    }

    /// Always true, even over an empty dataset, so key handling keeps
    /// reaching the data source
    pub fn focusable(&self) -> bool {
        true
    }

    /// Move focus to `id` (clamped by the data source)
    pub fn focus_id(&mut self, id: Id) {
        self.nav.focused_id = id;
        self.source.move_id_by(&mut self.nav.focused_id, 0);
    }

    /// Passes run by the last [`draw_frame`](Self::draw_frame)
    pub fn last_passes(&self) -> usize {
        self.last_passes
    }

    /// What the viewport asks of the host layout
    pub fn requirement(&self) -> Requirement {
        Requirement {
            min_width: if self.scrollbar { 2 } else { 1 },
            min_height: self.min_height,
            flex_grow_y: true,
            flex_shrink_y: true,
        }
    }

    /// Re-clamp focus and hover against the current dataset
    fn clamp(&mut self) {
        self.source.move_id_by(&mut self.nav.focused_id, 0);
        if let Some(hovered) = self.nav.hovered_id.as_mut() {
            self.source.move_id_by(hovered, 0);
        }
    }

    /// Render rows for the current height into a row stack
    fn produce(&mut self) -> RowStack {
        self.clamp();
        let height = self.nav.view.component_height;
        let size = self.source.size();
        self.nav.view.items_total = size.total;
        self.rows.resize(height, Rect::default());
        self.nav.estimated_start_id = find_start_id(&self.source, self.nav.focused_id, height);

        let mut texts = Vec::with_capacity(height);
        let mut focus = None;
        if !size.is_empty() {
            let mut id = self.nav.estimated_start_id;
            while texts.len() < height {
                let ctx = RowContext {
                    id,
                    focused: id == self.nav.focused_id,
                    hovered: self.nav.hovered_id == Some(id),
                    component_focused: self.focused,
                };
                if ctx.focused {
                    focus = Some(texts.len());
                }
                texts.push(self.source.render(&ctx));
                if !self.source.move_id_by(&mut id, 1) {
                    break;
                }
            }
        }

        self.nav.view.items_produced = texts.len();
        self.rows.truncate(texts.len());
        RowStack::new(texts, focus)
    }

    /// Run one render pass into `area`
    ///
    /// Builds the node tree for the current `component_height`, lets the host
    /// area decide the real height, and commits the measurements.
    pub fn draw(&mut self, buf: &mut Buffer, area: Rect) -> Drawn {
        let stack = self.produce();
        let view = self.nav.view;

        let reflector = Reflector::new(
            stack,
            ReflectInput {
                items_total: view.items_total,
                items_produced: view.items_produced,
                should_redraw: self.nav.should_redraw,
                min_height: self.min_height,
            },
        );
        let mut tree = ScrollIndicator::new(
            reflector,
            &self.source,
            IndicatorInput {
                estimated_start_id: self.nav.estimated_start_id,
                items_total: view.items_total,
                items_produced: view.items_produced,
            },
            self.scrollbar,
        );
        tree.place(area);
        tree.paint(buf);

        let measured = tree.child().measurement().unwrap_or_default();
        let visible = tree.visible();
        self.rows.clear();
        self.rows.extend_from_slice(tree.boxes());
        drop(tree);

        self.area = area.intersection(buf.area);
        self.nav.view.component_height = measured.height;
        if let Some(visible) = visible {
            self.nav.real_start_id = visible.real_start_id;
            self.nav.items_visible = visible.items_visible;
        }
        self.nav.should_redraw = false;

        Drawn {
            request_more: measured.request_more,
        }
    }

    /// Draw one frame: a first pass plus at most [`MAX_CORRECTIVE_PASSES`]
    ///
    /// An unstable `render()` would otherwise keep asking for passes forever;
    /// extra requests past the cap are dropped and picked up next frame.
    pub fn draw_frame(&mut self, buf: &mut Buffer, area: Rect) -> usize {
        let mut drawn = self.draw(buf, area);
        let mut passes = 1;
        while drawn.request_more {
            if passes > MAX_CORRECTIVE_PASSES {
                tracing::debug!(
                    height = self.nav.view.component_height,
                    produced = self.nav.view.items_produced,
                    "Corrective pass cap reached, deferring to next frame"
                );
                break;
            }
            Clear.render(area.intersection(buf.area), buf);
            drawn = self.draw(buf, area);
            passes += 1;
        }
        self.last_passes = passes;
        passes
    }
}

impl<S: DataSource> Widget for &mut VirtualViewport<S> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        self.draw_frame(buf, area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::source::{DatasetSize, GeneratedSource};
    use ratatui::text::{Line, Text};
    use std::cell::Cell;

    fn viewport(rows: u64) -> VirtualViewport<GeneratedSource> {
        VirtualViewport::new(GeneratedSource::new(rows))
    }

    /// Ids of the rows produced by the last pass, walked from the start
    fn produced_ids<S: DataSource>(vp: &VirtualViewport<S>) -> Vec<Id> {
        let mut id = vp.nav().estimated_start_id;
        let mut ids = vec![id];
        for _ in 1..vp.nav().view.items_produced {
            vp.source().move_id_by(&mut id, 1);
            ids.push(id);
        }
        ids
    }

    #[test]
    fn test_small_dataset_is_fully_produced() {
        let mut vp = viewport(5);
        let area = Rect::new(0, 0, 40, 10);
        let mut buf = Buffer::empty(area);
        vp.draw_frame(&mut buf, area);
        assert_eq!(vp.nav().view.items_produced, 5);
        assert_eq!(vp.nav().view.component_height, 10);
        // indicator suppressed: last column stays blank
        for y in 0..10 {
            assert_eq!(buf.cell((39, y)).map(|c| c.symbol()), Some(" "));
        }
    }

    #[test]
    fn test_window_centers_focus_in_million_rows() {
        let mut vp = viewport(1_000_000);
        vp.focus_id(500_000);
        let area = Rect::new(0, 0, 60, 20);
        let mut buf = Buffer::empty(area);
        vp.draw_frame(&mut buf, area);
        assert_eq!(vp.nav().estimated_start_id, 499_990);
        assert_eq!(produced_ids(&vp), (499_990..500_010).collect::<Vec<_>>());
    }

    #[test]
    fn test_window_at_start_of_million_rows() {
        let mut vp = viewport(1_000_000);
        let area = Rect::new(0, 0, 60, 20);
        let mut buf = Buffer::empty(area);
        vp.draw_frame(&mut buf, area);
        assert_eq!(vp.nav().estimated_start_id, 0);
        assert_eq!(vp.nav().view.items_produced, 20);
        assert_eq!(produced_ids(&vp), (0..20).collect::<Vec<_>>());
    }

    #[test]
    fn test_first_frame_self_sizes_in_one_correction() {
        let mut vp = viewport(1_000_000);
        let area = Rect::new(0, 0, 60, 20);
        let mut buf = Buffer::empty(area);
        assert_eq!(vp.nav().view.component_height, 0);
        assert_eq!(vp.draw_frame(&mut buf, area), 2);
        assert_eq!(vp.nav().view.items_produced, 20);
        assert_eq!(vp.nav().items_visible, 20);
    }

    #[test]
    fn test_stable_height_issues_no_redraws() {
        let mut vp = viewport(1_000_000);
        let area = Rect::new(0, 0, 60, 20);
        let mut buf = Buffer::empty(area);
        vp.draw_frame(&mut buf, area);
        for _ in 0..3 {
            assert_eq!(vp.draw_frame(&mut buf, area), 1);
        }
    }

    #[test]
    fn test_shrinking_area_trims_rows() {
        let mut vp = viewport(1_000_000);
        let mut buf = Buffer::empty(Rect::new(0, 0, 60, 30));
        vp.draw_frame(&mut buf, Rect::new(0, 0, 60, 30));
        assert_eq!(vp.nav().view.items_produced, 30);

        assert_eq!(vp.draw_frame(&mut buf, Rect::new(0, 0, 60, 12)), 2);
        assert_eq!(vp.nav().view.items_produced, 12);
        assert_eq!(vp.nav().view.component_height, 12);
    }

    #[test]
    fn test_area_clipped_by_buffer() {
        let mut vp = viewport(1_000_000);
        let mut buf = Buffer::empty(Rect::new(0, 0, 60, 15));
        vp.draw_frame(&mut buf, Rect::new(0, 5, 60, 40));
        assert_eq!(vp.nav().view.component_height, 10);
        assert_eq!(vp.area(), Rect::new(0, 5, 60, 10));
    }

    #[test]
    fn test_empty_dataset_renders_nothing() {
        let mut vp = viewport(0);
        let area = Rect::new(0, 0, 20, 5);
        let mut buf = Buffer::empty(area);
        assert_eq!(vp.draw_frame(&mut buf, area), 1);
        assert_eq!(vp.nav().view.items_produced, 0);
        assert!(vp.row_boxes().is_empty());
        assert!(vp.focusable());
    }

    #[test]
    fn test_scrollbar_painted_for_large_dataset() {
        let mut vp = viewport(1_000_000);
        vp.focus_id(999_999);
        let area = Rect::new(0, 0, 60, 20);
        let mut buf = Buffer::empty(area);
        vp.draw_frame(&mut buf, area);
        // window at the very end: the thumb sits on the last line
        assert_eq!(buf.cell((59, 19)).map(|c| c.symbol()), Some("╻"));
    }

    #[test]
    fn test_row_boxes_match_produced_rows() {
        let mut vp = viewport(100);
        let area = Rect::new(3, 2, 30, 8);
        let mut buf = Buffer::empty(Rect::new(0, 0, 40, 12));
        vp.draw_frame(&mut buf, area);
        let boxes = vp.row_boxes();
        assert_eq!(boxes.len(), 8);
        assert_eq!(boxes[0], Rect::new(3, 2, 29, 1));
        assert_eq!(boxes[7], Rect::new(3, 9, 29, 1));
    }

    #[test]
    fn test_multiline_row_pushes_last_row_out() {
        // row 96 is two lines tall
        let mut vp = viewport(1000);
        vp.focus_id(96);
        let area = Rect::new(0, 0, 60, 6);
        let mut buf = Buffer::empty(area);
        assert_eq!(vp.draw_frame(&mut buf, area), 2);
        let nav = vp.nav();
        assert_eq!(nav.estimated_start_id, 93);
        assert_eq!(nav.view.items_produced, 6);
        // rows 93..=98 need seven lines for six: row 98 gets no box
        assert_eq!(nav.real_start_id, 93);
        assert_eq!(nav.items_visible, 5);
        assert_eq!(vp.row_boxes()[5].height, 0);
        // produced matches the measured height, so the next frame is stable
        assert_eq!(vp.draw_frame(&mut buf, area), 1);
    }

    #[test]
    fn test_replace_source_resets_rows() {
        let mut vp = viewport(1000);
        vp.focus_id(700);
        let area = Rect::new(0, 0, 60, 10);
        let mut buf = Buffer::empty(area);
        vp.draw_frame(&mut buf, area);

        let old = vp.replace_source(GeneratedSource::new(3));
        assert_eq!(old.size().total, 1000);
        assert_eq!(vp.nav().focused_id, 0);
        assert!(vp.row_boxes().is_empty());
        // the swap forces exactly one corrective pass
        assert_eq!(vp.draw_frame(&mut buf, area), 2);
        assert_eq!(vp.nav().view.items_produced, 3);
        assert_eq!(vp.draw_frame(&mut buf, area), 1);
    }

    /// Rows whose height changes on every render call
    struct Unstable {
        calls: Cell<usize>,
    }

    impl DataSource for Unstable {
        fn size(&self) -> DatasetSize {
            DatasetSize {
                total: 1000,
                starting_id: 0,
                ending_id: 999,
            }
        }

        fn count_items_before(&self, id: Id) -> u64 {
            id as u64
        }

        fn move_id_by(&self, id: &mut Id, offset: i64) -> bool {
            let target = *id + offset;
            *id = target.clamp(0, 999);
            *id == target
        }

        fn render(&self, _ctx: &RowContext) -> Text<'static> {
            let n = self.calls.get();
            self.calls.set(n + 1);
            Text::from(vec![Line::from("x"); 1 + n % 3])
        }
    }

    #[test]
    fn test_unstable_rows_are_capped_at_one_correction() {
        let mut vp = VirtualViewport::new(Unstable {
            calls: Cell::new(0),
        });
        vp.focus_id(500);
        let area = Rect::new(0, 0, 20, 10);
        let mut buf = Buffer::empty(area);
        for _ in 0..5 {
            assert!(vp.draw_frame(&mut buf, area) <= 1 + MAX_CORRECTIVE_PASSES);
        }
    }
}
