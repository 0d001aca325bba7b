//! Self-sizing reflector
//!
//! How many rows to request depends on a height the host layout only settles
//! when it places the tree. The first pass has to guess. The reflector wraps
//! the row stack, reads back the rectangle it was actually granted (clipped to
//! the buffer) and tells the driver whether the pass was built for the wrong
//! height.

use super::node::{LayoutNode, Requirement};
use ratatui::{buffer::Buffer, layout::Rect};

/// What a pass was built from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ReflectInput {
    /// Rows in the dataset
    pub items_total: u64,
    /// Rows produced by this pass
    pub items_produced: usize,
    /// Pending redraw request carried into this pass
    pub should_redraw: bool,
    /// Minimum height to ask the host for
    pub min_height: u16,
}

/// What the reflector measured after painting
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Measurement {
    /// Granted height, clipped to the buffer
    pub height: usize,
    /// Granted rectangle, clipped to the buffer
    pub area: Rect,
    /// Another pass is needed to match the granted height
    pub request_more: bool,
}

/// Decide whether a pass needs a corrective re-render
///
/// A pending `should_redraw` always wins. Otherwise the pass is corrected
/// when rows are missing (the dataset is not fully shown but there is room
/// for more rows than were produced) or when more rows were produced than
/// there are lines to hold them.
pub fn needs_correction(input: &ReflectInput, measured_height: usize) -> bool {
    let produced = input.items_produced;
    let all_shown = produced as u64 >= input.items_total;
    let room_for_more = !all_shown && measured_height > produced && produced != measured_height;
    let overflowing = measured_height < produced;
    input.should_redraw || room_for_more || overflowing
}

/// Decorator measuring the height the host actually granted
#[derive(Debug, Clone)]
pub struct Reflector<N> {
    child: N,
    input: ReflectInput,
    area: Rect,
    measured: Option<Measurement>,
}

impl<N: LayoutNode> Reflector<N> {
    pub fn new(child: N, input: ReflectInput) -> Self {
        Self {
            child,
            input,
            area: Rect::default(),
            measured: None,
        }
    }

    /// Measurement taken during the last `paint`
    pub fn measurement(&self) -> Option<Measurement> {
        self.measured
    }
}

impl<N: LayoutNode> LayoutNode for Reflector<N> {
    fn requirement(&self) -> Requirement {
        Requirement {
            min_height: self.input.min_height,
            flex_grow_y: true,
            flex_shrink_y: true,
            ..self.child.requirement()
        }
    }

    fn place(&mut self, area: Rect) {
        self.area = area;
        self.child.place(area);
    }

    fn paint(&mut self, buf: &mut Buffer) {
        let granted = buf.area.intersection(self.area);
        let height = usize::from(granted.height);
        let request_more = needs_correction(&self.input, height);
        if request_more {
            tracing::trace!(
                height,
                produced = self.input.items_produced,
                total = self.input.items_total,
                "Reflector requests a corrective pass"
            );
        }
        self.measured = Some(Measurement {
            height,
            area: granted,
            request_more,
        });
        self.child.paint(buf);
    }

    fn boxes(&self) -> &[Rect] {
        self.child.boxes()
    }
}
