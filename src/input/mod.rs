//! Pointer input handling for the zoom overlay.
//!
//! This module implements the in-process contract between the host overlay
//! and the selection core. The host polls pointer position and modifier keys
//! and forwards them here; the driver owns at most one live
//! [`Selection`](crate::selection::Selection) and, on release, hands back the
//! next domain [`Area`] to render.
//!
//! ## Architecture
//!
//! The driver uses an explicit state machine ([`DriverState`]) so a selection
//! either exists in full or not at all; there is no half-initialized
//! interaction to guard against. The host stays responsible for clamping
//! pointer coordinates to the viewport and for triggering the re-render; the
//! driver never reaches outward for state, it receives the current area and
//! viewport as plain arguments.
//!
//! ## Modules
//!
//! - `state` - Driver state machine enum
//! - `pointer_down` - Starting a selection
//! - `pointer_move` - Live cursor updates while dragging
//! - `pointer_up` - Committing or abandoning the selection

mod pointer_down;
mod pointer_move;
mod pointer_up;
mod state;

pub use state::DriverState;

use crate::types::{Area, Pixel};

/// One pointer poll: viewport-pixel position plus the modifier-key snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PointerSample {
    pub x: i32,
    pub y: i32,
    /// Ratio-lock modifier ("shift") held at sample time.
    pub shift: bool,
    /// Symmetric-expansion modifier ("control") held at sample time.
    pub ctrl: bool,
}

/// What a finished interaction amounted to.
#[derive(Debug, Clone, PartialEq)]
pub enum CommitOutcome {
    /// The selection committed; render this area next.
    Zoom(Area),
    /// Released below the minimum span, or without an active selection.
    /// Treated as a click, not a zoom.
    Ignored,
}

/// Pointer-event state machine owning at most one live selection.
#[derive(Debug, Default)]
pub struct SelectionDriver {
    state: DriverState,
}

impl SelectionDriver {
    pub fn new() -> Self {
        Self {
            state: DriverState::Idle,
        }
    }

    /// Returns true while a drag interaction is in flight.
    pub fn is_selecting(&self) -> bool {
        self.state.is_selecting()
    }

    /// Normalized corners of the live selection, for the host's overlay
    /// drawing. `None` while idle.
    pub fn selection_rect(&self) -> Option<(Pixel, Pixel)> {
        match &self.state {
            DriverState::Selecting(selection) => {
                Some((selection.top_left(), selection.bottom_right()))
            }
            DriverState::Idle => None,
        }
    }
}
