//! Live drag-selection state.
//!
//! A [`Selection`] holds the raw facts of one drag interaction (the anchor
//! pixel, the latest cursor pixel, and the modifier snapshot from the latest
//! update) and derives the effective rectangle on every read. The adjusted
//! corners are never stored: caching them invites drift between raw and
//! derived state once modifiers change between polls.
//!
//! ## Modifier semantics
//!
//! - **Ratio lock (shift)**: the rectangle's height/width ratio is forced to
//!   the viewport's aspect ratio. The adjustment follows a fit-inside policy:
//!   the result is the largest ratio-true rectangle contained in the raw drag
//!   rectangle, and each delta keeps its original sign. When either raw delta
//!   is zero the lock is a no-op.
//! - **Symmetric expansion (ctrl)**: the anchor becomes the rectangle's
//!   center instead of a corner; the rectangle spans `anchor - delta` to
//!   `anchor + delta`. Applied after ratio lock when both are held.

use crate::types::Pixel;

/// State of a single drag interaction, from pointer-down to release.
///
/// Created anchored at the pointer-down pixel, mutated by [`set_cursor`] on
/// every poll while the drag is active, and discarded on commit or cancel.
/// Never reused across interactions.
///
/// [`set_cursor`]: Selection::set_cursor
#[derive(Debug, Clone, PartialEq)]
pub struct Selection {
    /// Pixel where the drag began. Fixed for the interaction's lifetime.
    anchor: Pixel,
    /// Latest raw cursor pixel, before any modifier adjustment.
    cursor: Pixel,
    /// Whether the latest update had the ratio-lock modifier held.
    ratio_lock: bool,
    /// Whether the latest update had the symmetric-expansion modifier held.
    symmetric: bool,
    /// Target height-to-width ratio from the latest update.
    aspect_ratio: f64,
}

impl Selection {
    /// Start a new selection anchored at `anchor`, with the cursor on top of
    /// it. This is the only construction path; there is no empty selection.
    pub fn from_anchor(anchor: Pixel) -> Self {
        Self {
            anchor,
            cursor: anchor,
            ratio_lock: false,
            symmetric: false,
            aspect_ratio: 1.0,
        }
    }

    /// Record the latest cursor position and modifier snapshot.
    ///
    /// `aspect_ratio` is the viewport's height/width and only takes effect
    /// while `shift_held` is true. The modifier flags are transient: each call
    /// overwrites the previous snapshot, so releasing a key between polls
    /// immediately changes the derived rectangle.
    pub fn set_cursor(
        &mut self,
        x: i32,
        y: i32,
        aspect_ratio: f64,
        shift_held: bool,
        ctrl_held: bool,
    ) {
        self.cursor = Pixel::new(x, y);
        self.ratio_lock = shift_held;
        self.symmetric = ctrl_held;
        self.aspect_ratio = aspect_ratio;
    }

    #[inline]
    pub fn anchor(&self) -> Pixel {
        self.anchor
    }

    #[inline]
    pub fn cursor(&self) -> Pixel {
        self.cursor
    }

    /// Top-left corner of the current effective rectangle.
    pub fn top_left(&self) -> Pixel {
        let (a, b) = self.effective_corners();
        Pixel::new(a.x.min(b.x), a.y.min(b.y))
    }

    /// Bottom-right corner of the current effective rectangle.
    pub fn bottom_right(&self) -> Pixel {
        let (a, b) = self.effective_corners();
        Pixel::new(a.x.max(b.x), a.y.max(b.y))
    }

    /// The two corner pixels after modifier adjustment, in no particular
    /// order. Recomputed from raw state on every call.
    fn effective_corners(&self) -> (Pixel, Pixel) {
        let (dx, dy) = self.adjusted_delta();
        let far = Pixel::new(self.anchor.x + dx, self.anchor.y + dy);
        if self.symmetric {
            (Pixel::new(self.anchor.x - dx, self.anchor.y - dy), far)
        } else {
            (self.anchor, far)
        }
    }

    /// Cursor delta from the anchor with ratio lock applied.
    ///
    /// Fit-inside: whichever axis is proportionally too long gets clamped, so
    /// the locked rectangle never pokes outside the raw drag rectangle.
    fn adjusted_delta(&self) -> (i32, i32) {
        let dx = self.cursor.x - self.anchor.x;
        let dy = self.cursor.y - self.anchor.y;

        // A zero axis leaves the ratio undefined; treat the lock as a no-op.
        if !self.ratio_lock || dx == 0 || dy == 0 {
            return (dx, dy);
        }

        let target_height = self.aspect_ratio * f64::from(dx.abs());
        if f64::from(dy.abs()) > target_height {
            // Too tall for the width: clamp the height.
            (dx, dy.signum() * target_height.round() as i32)
        } else {
            // Too wide for the height: derive the width back from it.
            let target_width = f64::from(dy.abs()) / self.aspect_ratio;
            (dx.signum() * target_width.round() as i32, dy)
        }
    }
}
