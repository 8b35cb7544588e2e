//! Driver state machine.
//!
//! ## State Transitions
//!
//! ```text
//! Idle      -> Selecting   (pointer down anchors a new selection)
//! Selecting -> Idle        (pointer up commits, cancel key abandons)
//! ```
//!
//! A finished or cancelled interaction always returns to `Idle`; the
//! contained [`Selection`] is dropped, never reused.

use crate::selection::Selection;

/// Current interaction mode of the [`SelectionDriver`](crate::input::SelectionDriver).
#[derive(Debug, Clone)]
pub enum DriverState {
    /// No interaction in flight.
    Idle,

    /// A drag is active; the selection holds its anchor and live cursor.
    Selecting(Selection),
}

impl Default for DriverState {
    fn default() -> Self {
        Self::Idle
    }
}

impl DriverState {
    /// Returns true if a drag interaction is active
    pub fn is_selecting(&self) -> bool {
        matches!(self, Self::Selecting(_))
    }
}
