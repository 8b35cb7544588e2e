//! Pointer-down handling - starting a selection.

use crate::input::{DriverState, SelectionDriver};
use crate::selection::Selection;
use crate::types::Pixel;
use tracing::{debug, warn};

impl SelectionDriver {
    /// Begin a selection anchored at the given viewport pixel.
    ///
    /// The host owns clamping: coordinates arriving here are assumed to lie
    /// inside the viewport. A pointer-down while a selection is already
    /// active is a host contract violation; the stale selection is discarded
    /// and a fresh one anchored, matching how the overlay restarts a
    /// re-begun interaction.
    pub fn pointer_down(&mut self, x: i32, y: i32) {
        if self.state.is_selecting() {
            warn!(x, y, "pointer_down while a selection is active, restarting");
        }

        debug!(x, y, "selection started");
        self.state = DriverState::Selecting(Selection::from_anchor(Pixel::new(x, y)));
    }
}
