//! Fractional scroll indicator
//!
//! Paints a one-column scrollbar on the right edge of the viewport. Each cell
//! can show an upper half line (`╹`), a lower half line (`╻`) or a full line
//! (`┃`), so the thumb's ends land on half-cell boundaries instead of jumping
//! a whole row at a time.

use super::node::{LayoutNode, Requirement, ValidCount};
use crate::source::{DataSource, Id};
use ratatui::{buffer::Buffer, layout::Rect};

/// Glyph painted into one scrollbar cell
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ThumbCell {
    /// Whole cell covered
    Full,
    /// Thumb starts in the middle of the cell: lower half only
    LeadHalf,
    /// Thumb ends in the middle of the cell: upper half only
    TrailHalf,
    /// Thumb ends right at the top of the cell
    Empty,
}

impl ThumbCell {
    pub fn symbol(self) -> &'static str {
        match self {
            ThumbCell::Full => "┃",
            ThumbCell::LeadHalf => "╻",
            ThumbCell::TrailHalf => "╹",
            ThumbCell::Empty => " ",
        }
    }
}

/// Thumb extent in row units from the top of the viewport
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ThumbSpan {
    pub start_y: f64,
    pub end_y: f64,
}

impl ThumbSpan {
    /// Compute the thumb for a window of `items_visible` rows preceded by
    /// `items_before` rows, out of `items_total`, in a bar `height` rows tall
    pub fn new(items_before: u64, items_visible: usize, items_total: u64, height: u16) -> Self {
        if items_total == 0 {
            return Self {
                start_y: 0.0,
                end_y: 0.0,
            };
        }
        let total = items_total as f64;
        let height = f64::from(height);
        let fractional_start = items_before as f64 / total;
        let fractional_height = items_visible as f64 / total;
        let start_y = fractional_start * height;
        Self {
            start_y,
            end_y: start_y + fractional_height * height,
        }
    }

    /// Cells to paint, as (row offset from the top, glyph)
    ///
    /// The start row is a full lead when its remainder is under a quarter,
    /// a half lead otherwise. Rows strictly between start and end are full.
    /// The end row, when inside the bar, is empty under a quarter, a half
    /// trail up to three quarters, and full above.
    pub fn cells(&self, height: u16) -> Vec<(u16, ThumbCell)> {
        let mut cells = Vec::new();
        if height == 0 {
            return cells;
        }
        let last = i64::from(height) - 1;
        let start_row = self.start_y.floor() as i64;
        let end_row = self.end_y.floor() as i64;

        if (0..=last).contains(&start_row) {
            let remainder = self.start_y - start_row as f64;
            let lead = if remainder < 0.25 {
                ThumbCell::Full
            } else {
                ThumbCell::LeadHalf
            };
            cells.push((start_row as u16, lead));
        }

        // An end landing in the start cell would overwrite the lead and make
        // a thin thumb disappear, so the lead keeps that cell.
        if end_row <= last && end_row > start_row {
            let remainder = self.end_y - end_row as f64;
            let trail = if remainder < 0.25 {
                ThumbCell::Empty
            } else if remainder < 0.75 {
                ThumbCell::TrailHalf
            } else {
                ThumbCell::Full
            };
            cells.push((end_row as u16, trail));
        }

        let last_full = (end_row - 1).min(last);
        for row in (start_row + 1).max(0)..=last_full {
            cells.push((row as u16, ThumbCell::Full));
        }
        cells
    }
}

/// What the indicator derived from the painted rows
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VisibleRows {
    /// Id of the first row with a visible box
    pub real_start_id: Id,
    /// Number of rows with a visible box
    pub items_visible: usize,
}

/// Inputs the indicator needs from the render pass
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct IndicatorInput {
    pub estimated_start_id: Id,
    pub items_total: u64,
    pub items_produced: usize,
}

/// Decorator painting the scrollbar column
///
/// Always recomputes the visible-row statistics; painting is skipped when
/// the whole dataset is on screen or the bar is disabled.
pub struct ScrollIndicator<'a, S: ?Sized, N> {
    child: N,
    source: &'a S,
    input: IndicatorInput,
    enabled: bool,
    area: Rect,
    visible: Option<VisibleRows>,
}

impl<'a, S: DataSource + ?Sized, N: LayoutNode> ScrollIndicator<'a, S, N> {
    pub fn new(child: N, source: &'a S, input: IndicatorInput, enabled: bool) -> Self {
        Self {
            child,
            source,
            input,
            enabled,
            area: Rect::default(),
            visible: None,
        }
    }

    pub fn child(&self) -> &N {
        &self.child
    }

    /// Visible-row statistics from the last `paint`
    pub fn visible(&self) -> Option<VisibleRows> {
        self.visible
    }

    fn reserves_column(&self) -> bool {
        self.enabled && self.area.width > 1
    }
}

impl<S: DataSource + ?Sized, N: LayoutNode> LayoutNode for ScrollIndicator<'_, S, N> {
    fn requirement(&self) -> Requirement {
        let mut req = self.child.requirement();
        if self.enabled {
            req.min_width = req.min_width.saturating_add(1);
        }
        req
    }

    fn place(&mut self, area: Rect) {
        self.area = area;
        let mut inner = area;
        if self.reserves_column() {
            inner.width -= 1;
        }
        self.child.place(inner);
    }

    fn paint(&mut self, buf: &mut Buffer) {
        self.child.paint(buf);

        let count = ValidCount::from_boxes(self.child.boxes());
        let mut real_start_id = self.input.estimated_start_id;
        if let Some(first) = count.first_visible {
            self.source.move_id_by(&mut real_start_id, first as i64);
        }
        self.visible = Some(VisibleRows {
            real_start_id,
            items_visible: count.valid,
        });

        if !self.reserves_column() || self.input.items_produced as u64 >= self.input.items_total {
            return;
        }
        let bar = self.area.intersection(buf.area);
        if bar.is_empty() {
            return;
        }
        let x = self.area.right() - 1;
        if x < bar.x || x >= bar.right() {
            return;
        }

        let items_before = self.source.count_items_before(real_start_id);
        let span = ThumbSpan::new(items_before, count.valid, self.input.items_total, bar.height);
        for (row, cell) in span.cells(bar.height) {
            if let Some(target) = buf.cell_mut((x, bar.y + row)) {
                target.set_symbol(cell.symbol());
            }
        }
    }

    fn boxes(&self) -> &[Rect] {
        self.child.boxes()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::source::GeneratedSource;
    use crate::viewport::node::RowStack;
    use ratatui::text::Text;

    fn column(buf: &Buffer, x: u16) -> String {
        (buf.area.y..buf.area.bottom())
            .map(|y| buf.cell((x, y)).map(|c| c.symbol()).unwrap_or("?"))
            .collect()
    }

    #[test]
    fn test_span_fractions() {
        let span = ThumbSpan::new(250, 10, 1000, 40);
        assert!((span.start_y - 10.0).abs() < 1e-9);
        assert!((span.end_y - 10.4).abs() < 1e-9);
    }

    #[test]
    fn test_full_lead_and_half_trail() {
        // start 2.0, end 2.0 + 1.5 = 3.5
        let span = ThumbSpan {
            start_y: 2.0,
            end_y: 3.5,
        };
        assert_eq!(
            span.cells(10),
            vec![(2, ThumbCell::Full), (3, ThumbCell::TrailHalf)]
        );
    }

    #[test]
    fn test_thin_thumb_keeps_its_lead_cell() {
        // start 5.3, end 5.32: both ends in row 5
        let span = ThumbSpan::new(530, 2, 1000, 10);
        assert_eq!(span.cells(10), vec![(5, ThumbCell::LeadHalf)]);
    }

    #[test]
    fn test_half_lead_and_full_rows_between() {
        let span = ThumbSpan {
            start_y: 1.5,
            end_y: 4.9,
        };
        assert_eq!(
            span.cells(10),
            vec![
                (1, ThumbCell::LeadHalf),
                (4, ThumbCell::Full),
                (2, ThumbCell::Full),
                (3, ThumbCell::Full),
            ]
        );
    }

    #[test]
    fn test_trail_near_row_boundary_is_empty() {
        let span = ThumbSpan {
            start_y: 0.0,
            end_y: 3.1,
        };
        let cells = span.cells(10);
        assert!(cells.contains(&(3, ThumbCell::Empty)));
        assert!(cells.contains(&(0, ThumbCell::Full)));
        assert!(cells.contains(&(2, ThumbCell::Full)));
    }

    #[test]
    fn test_end_past_bottom_is_not_painted() {
        let span = ThumbSpan {
            start_y: 8.0,
            end_y: 10.0,
        };
        assert_eq!(
            span.cells(10),
            vec![(8, ThumbCell::Full), (9, ThumbCell::Full)]
        );
    }

    #[test]
    fn test_span_monotonic_in_items_before() {
        let mut previous = ThumbSpan::new(0, 20, 1_000_000, 20);
        for before in (0..1_000_000u64).step_by(9_973) {
            let span = ThumbSpan::new(before, 20, 1_000_000, 20);
            assert!(span.start_y >= previous.start_y);
            assert!(span.end_y >= previous.end_y);
            previous = span;
        }
    }

    #[test]
    fn test_paints_right_edge_when_dataset_not_fully_shown() {
        let source = GeneratedSource::new(20);
        let rows = vec![Text::raw("row"); 10];
        let input = IndicatorInput {
            estimated_start_id: 10,
            items_total: 20,
            items_produced: 10,
        };
        let mut indicator =
            ScrollIndicator::new(RowStack::new(rows, Some(0)), &source, input, true);
        let area = Rect::new(0, 0, 6, 10);
        let mut buf = Buffer::empty(area);
        indicator.place(area);
        indicator.paint(&mut buf);

        // rows 10..20 of 20 in a 10-line bar: thumb covers lines 5..10
        assert_eq!(column(&buf, 5), "     ┃┃┃┃┃");
        // child was narrowed by the bar column
        assert_eq!(indicator.boxes()[0].width, 5);
        assert_eq!(
            indicator.visible(),
            Some(VisibleRows {
                real_start_id: 10,
                items_visible: 10
            })
        );
    }

    #[test]
    fn test_suppressed_when_everything_is_visible() {
        let source = GeneratedSource::new(5);
        let rows = vec![Text::raw("row"); 5];
        let input = IndicatorInput {
            estimated_start_id: 0,
            items_total: 5,
            items_produced: 5,
        };
        let mut indicator =
            ScrollIndicator::new(RowStack::new(rows, Some(0)), &source, input, true);
        let area = Rect::new(0, 0, 6, 10);
        let mut buf = Buffer::empty(area);
        indicator.place(area);
        indicator.paint(&mut buf);
        assert_eq!(column(&buf, 5), " ".repeat(10));
        assert_eq!(indicator.visible().map(|v| v.items_visible), Some(5));
    }

    #[test]
    fn test_real_start_skips_clipped_rows() {
        let source = GeneratedSource::new(100);
        // four rows in two lines, focus on the last one: rows 0 and 1 are clipped
        let rows = vec![Text::raw("row"); 4];
        let input = IndicatorInput {
            estimated_start_id: 40,
            items_total: 100,
            items_produced: 4,
        };
        let mut indicator =
            ScrollIndicator::new(RowStack::new(rows, Some(3)), &source, input, true);
        let area = Rect::new(0, 0, 6, 2);
        let mut buf = Buffer::empty(area);
        indicator.place(area);
        indicator.paint(&mut buf);
        assert_eq!(
            indicator.visible(),
            Some(VisibleRows {
                real_start_id: 42,
                items_visible: 2
            })
        );
    }

    #[test]
    fn test_requirement_adds_bar_column() {
        let source = GeneratedSource::new(1);
        let rows = vec![Text::raw("abcd")];
        let input = IndicatorInput::default();
        let on = ScrollIndicator::new(RowStack::new(rows.clone(), None), &source, input, true);
        let off = ScrollIndicator::new(RowStack::new(rows, None), &source, input, false);
        assert_eq!(on.requirement().min_width, 5);
        assert_eq!(off.requirement().min_width, 4);
    }
}
