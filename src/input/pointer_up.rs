//! Pointer-up handling - commit or abandon the selection.

use std::mem;

use crate::constants::MIN_ZOOM_SPAN_PX;
use crate::coords::{CoordinateContext, CoordinateConverter};
use crate::error::GeometryResult;
use crate::input::{CommitOutcome, DriverState, SelectionDriver};
use crate::types::{Area, Viewport};
use tracing::{debug, warn};

impl SelectionDriver {
    /// Finalize the interaction against the area currently on screen.
    ///
    /// The rectangle must span at least
    /// [`MIN_ZOOM_SPAN_PX`] on both axes to commit; anything smaller reports
    /// [`CommitOutcome::Ignored`] so a stray click never zooms into a sliver.
    /// On commit, the selection is mapped through the current `Area` and
    /// viewport and the next `Area` is returned; what to do with it (usually
    /// a re-render) is the host's decision.
    pub fn pointer_up(
        &mut self,
        current: &Area,
        viewport: Viewport,
    ) -> GeometryResult<CommitOutcome> {
        let state = mem::replace(&mut self.state, DriverState::Idle);
        let DriverState::Selecting(selection) = state else {
            warn!("pointer_up without an active selection");
            return Ok(CommitOutcome::Ignored);
        };

        let from = selection.top_left();
        let to = selection.bottom_right();

        if to.x - from.x < MIN_ZOOM_SPAN_PX || to.y - from.y < MIN_ZOOM_SPAN_PX {
            debug!(
                width = to.x - from.x,
                height = to.y - from.y,
                "selection below zoom threshold, ignoring"
            );
            return Ok(CommitOutcome::Ignored);
        }

        let ctx = CoordinateContext::new(current, viewport);
        let next = CoordinateConverter::selection_to_area(from, to, &ctx)?;
        debug!(
            x_min = next.x_min(),
            x_max = next.x_max(),
            y_min = next.y_min(),
            y_max = next.y_max(),
            "selection committed"
        );
        Ok(CommitOutcome::Zoom(next))
    }

    /// Abandon the live selection without committing (the host's cancel key).
    pub fn cancel(&mut self) {
        if self.state.is_selecting() {
            debug!("selection cancelled");
        }
        self.state = DriverState::Idle;
    }
}
