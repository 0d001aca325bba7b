//! Window finding - which row goes at the top of the viewport
//!
//! Centers the focused row in a window of `height` rows, fills the window
//! whenever the dataset is large enough, and slides the window back from the
//! end of the dataset when the forward walk runs out of rows.

use crate::source::{DataSource, Id};

/// Return the id of the first row to render for a `height`-row window
///
/// The backward centering offset is `height / 2`, rounded down. When the
/// forward walk hits the end of the dataset, the row it is standing on counts
/// as placed even though its own forward move failed; the remaining shortfall
/// is then taken from before the start, clamped at the dataset start.
///
/// The walk is O(height) calls to `move_id_by`.
pub fn find_start_id<S: DataSource + ?Sized>(source: &S, focused_id: Id, height: usize) -> Id {
    let height = height as i64;
    let mut start_id = focused_id;
    source.move_id_by(&mut start_id, -(height / 2));

    let mut placed = 0;
    let mut id = start_id;
    while placed < height {
        if !source.move_id_by(&mut id, 1) {
            placed += 1;
            while placed < height {
                if !source.move_id_by(&mut start_id, -1) {
                    break;
                }
                placed += 1;
            }
            break;
        }
        placed += 1;
    }

    tracing::trace!(focused_id, height, start_id, "Window start found");
    start_id
}
