//! Pointer-move handling - live cursor updates while dragging.
//!
//! ## Performance Notes
//!
//! Pointer moves arrive at the host's poll rate (potentially 60+ times per
//! second). The update only records raw state; all rectangle math happens on
//! read. Enable the `profiling` feature to see timing.

use crate::input::{DriverState, PointerSample, SelectionDriver};
use crate::profile_scope;
use crate::types::Viewport;

impl SelectionDriver {
    /// Forward the latest pointer sample to the live selection.
    ///
    /// A no-op while idle: the host polls continuously and most samples
    /// arrive outside any interaction.
    pub fn pointer_move(&mut self, sample: PointerSample, viewport: Viewport) {
        profile_scope!("pointer_move");

        let DriverState::Selecting(ref mut selection) = self.state else {
            return;
        };

        selection.set_cursor(
            sample.x,
            sample.y,
            viewport.aspect_ratio(),
            sample.shift,
            sample.ctrl,
        );
    }
}
