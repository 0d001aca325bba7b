//! Layout nodes - compute size, place, paint
//!
//! The viewport emits a small tree of nodes that ratatui's buffer is painted
//! through. Decorators (the reflector and the scroll indicator) are plain
//! structs holding the node they wrap; they intercept the three operations
//! and forward them to their child.
//!
//! ```text
//! ScrollIndicator ── Reflector ── RowStack ── [row, row, row, ...]
//! ```

use ratatui::{buffer::Buffer, layout::Rect, text::Text};

/// Size requirement reported by a node before placement
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Requirement {
    pub min_width: u16,
    pub min_height: u16,
    /// Node wants to grow into any extra vertical space
    pub flex_grow_y: bool,
    /// Node tolerates getting less than `min_height`
    pub flex_shrink_y: bool,
}

/// Explicit layout-node interface
pub trait LayoutNode {
    /// Minimum size this node wants
    fn requirement(&self) -> Requirement;

    /// Assign the node its rectangle
    fn place(&mut self, area: Rect);

    /// Paint into the buffer. Only called after `place`.
    fn paint(&mut self, buf: &mut Buffer);

    /// Box of every row under this node, in render order
    fn boxes(&self) -> &[Rect] {
        &[]
    }
}

/// Visible-row statistics derived from a set of row boxes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ValidCount {
    /// Rows with a non-empty box
    pub valid: usize,
    /// Index of the first row with a non-empty box
    pub first_visible: Option<usize>,
    /// Number of boxes inspected
    pub total: usize,
}

impl ValidCount {
    pub fn from_boxes(boxes: &[Rect]) -> Self {
        let mut count = Self {
            total: boxes.len(),
            ..Self::default()
        };
        for (i, b) in boxes.iter().enumerate() {
            if b.height > 0 {
                count.first_visible.get_or_insert(i);
                count.valid += 1;
            }
        }
        count
    }
}

/// Vertical stack of rendered rows
///
/// Rows are laid out top to bottom, each as tall as its text. When the rows
/// do not fit, the stack scrolls just enough to keep the focused row fully in
/// view, clipping rows above the area. Rows that end up entirely outside the
/// area get a zero-height box.
#[derive(Debug, Clone, Default)]
pub struct RowStack {
    rows: Vec<Text<'static>>,
    focus: Option<usize>,
    boxes: Vec<Rect>,
    area: Rect,
    /// Lines scrolled off the top
    offset: u16,
}

impl RowStack {
    pub fn new(rows: Vec<Text<'static>>, focus: Option<usize>) -> Self {
        let boxes = vec![Rect::default(); rows.len()];
        Self {
            rows,
            focus,
            boxes,
            area: Rect::default(),
            offset: 0,
        }
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    fn row_height(row: &Text<'_>) -> u16 {
        u16::try_from(row.height()).unwrap_or(u16::MAX)
    }

    /// Lines the stack scrolls so the focused row ends on the last line
    fn scroll_offset(&self, height: u16) -> u16 {
        let Some(focus) = self.focus else {
            return 0;
        };
        let focus_end: u32 = self
            .rows
            .iter()
            .take(focus + 1)
            .map(|row| u32::from(Self::row_height(row)))
            .sum();
        focus_end
            .saturating_sub(u32::from(height))
            .try_into()
            .unwrap_or(u16::MAX)
    }
}

impl LayoutNode for RowStack {
    fn requirement(&self) -> Requirement {
        let min_height: u32 = self
            .rows
            .iter()
            .map(|row| u32::from(Self::row_height(row)))
            .sum();
        let min_width = self.rows.iter().map(Text::width).max().unwrap_or(0);
        Requirement {
            min_width: u16::try_from(min_width).unwrap_or(u16::MAX),
            min_height: u16::try_from(min_height).unwrap_or(u16::MAX),
            flex_grow_y: false,
            flex_shrink_y: false,
        }
    }

    fn place(&mut self, area: Rect) {
        self.area = area;
        self.offset = self.scroll_offset(area.height);

        // Line positions relative to the top of the (scrolled) stack
        let top = i64::from(area.y) - i64::from(self.offset);
        let bottom = i64::from(area.bottom());
        let mut y = top;
        for (row, b) in self.rows.iter().zip(self.boxes.iter_mut()) {
            let h = i64::from(Self::row_height(row));
            let visible_top = y.max(i64::from(area.y));
            let visible_bottom = (y + h).min(bottom);
            *b = if visible_bottom > visible_top {
                Rect::new(
                    area.x,
                    visible_top as u16,
                    area.width,
                    (visible_bottom - visible_top) as u16,
                )
            } else {
                Rect::new(area.x, visible_top.min(bottom) as u16, area.width, 0)
            };
            y += h;
        }
    }

    fn paint(&mut self, buf: &mut Buffer) {
        let area = self.area.intersection(buf.area);
        if area.is_empty() {
            return;
        }
        let top = i64::from(self.area.y) - i64::from(self.offset);
        let mut y = top;
        for row in &self.rows {
            for line in &row.lines {
                if y >= i64::from(area.y) && y < i64::from(area.bottom()) {
                    let line_area = Rect::new(area.x, y as u16, area.width, 1);
                    buf.set_style(line_area, row.style.patch(line.style));
                    buf.set_line(area.x, y as u16, line, area.width);
                }
                y += 1;
            }
        }
    }

    fn boxes(&self) -> &[Rect] {
        &self.boxes
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::text::Line;

    fn rows(heights: &[usize]) -> Vec<Text<'static>> {
        heights
            .iter()
            .enumerate()
            .map(|(i, &h)| {
                Text::from(
                    (0..h)
                        .map(|l| Line::from(format!("r{i}l{l}")))
                        .collect::<Vec<_>>(),
                )
            })
            .collect()
    }

    #[test]
    fn test_valid_count() {
        let boxes = [
            Rect::new(0, 0, 10, 0),
            Rect::new(0, 0, 10, 1),
            Rect::new(0, 1, 10, 2),
            Rect::new(0, 3, 10, 0),
        ];
        let count = ValidCount::from_boxes(&boxes);
        assert_eq!(count.valid, 2);
        assert_eq!(count.first_visible, Some(1));
        assert_eq!(count.total, 4);

        assert_eq!(ValidCount::from_boxes(&[]).first_visible, None);
    }

    #[test]
    fn test_stack_places_rows_top_down() {
        let mut stack = RowStack::new(rows(&[1, 2, 1]), Some(0));
        stack.place(Rect::new(2, 3, 10, 10));
        assert_eq!(
            stack.boxes(),
            &[
                Rect::new(2, 3, 10, 1),
                Rect::new(2, 4, 10, 2),
                Rect::new(2, 6, 10, 1),
            ]
        );
    }

    #[test]
    fn test_rows_below_area_get_empty_boxes() {
        let mut stack = RowStack::new(rows(&[1, 1, 1, 1]), Some(0));
        stack.place(Rect::new(0, 0, 5, 2));
        let count = ValidCount::from_boxes(stack.boxes());
        assert_eq!(count.valid, 2);
        assert_eq!(count.first_visible, Some(0));
        assert_eq!(stack.boxes()[3].height, 0);
    }

    #[test]
    fn test_stack_scrolls_to_keep_focus_visible() {
        // focus on the last (two-line) row of a stack taller than the area
        let mut stack = RowStack::new(rows(&[1, 1, 1, 2]), Some(3));
        stack.place(Rect::new(0, 0, 5, 3));
        let boxes = stack.boxes();
        assert_eq!(boxes[0].height, 0);
        assert_eq!(boxes[1].height, 0);
        assert_eq!(boxes[2], Rect::new(0, 0, 5, 1));
        assert_eq!(boxes[3], Rect::new(0, 1, 5, 2));
        assert_eq!(ValidCount::from_boxes(boxes).first_visible, Some(2));
    }

    #[test]
    fn test_paint_writes_visible_lines_only() {
        let mut stack = RowStack::new(rows(&[1, 2, 1]), Some(2));
        let area = Rect::new(0, 0, 6, 3);
        let mut buf = Buffer::empty(area);
        stack.place(area);
        stack.paint(&mut buf);
        // scrolled by one line: row 0 is hidden
        assert_eq!(buf.cell((0, 0)).map(|c| c.symbol()), Some("r"));
        assert_eq!(buf.cell((1, 0)).map(|c| c.symbol()), Some("1"));
        assert_eq!(buf.cell((3, 1)).map(|c| c.symbol()), Some("1"));
        assert_eq!(buf.cell((1, 2)).map(|c| c.symbol()), Some("2"));
    }

    #[test]
    fn test_requirement_sums_heights() {
        let stack = RowStack::new(rows(&[1, 3, 2]), None);
        let req = stack.requirement();
        assert_eq!(req.min_height, 6);
        assert_eq!(req.min_width, 4);
        assert!(!req.flex_grow_y);
    }
}
