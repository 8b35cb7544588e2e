//! Crate-wide constants.
//!
//! Centralizes magic numbers so interaction thresholds and the initial view
//! live in one place.

// ============================================================================
// Input Handling
// ============================================================================

/// Minimum pixel span (per axis) for a released selection to count as a zoom.
/// Anything smaller is treated as a stray click and ignored.
pub const MIN_ZOOM_SPAN_PX: i32 = 5;

// ============================================================================
// Initial View
// ============================================================================

/// Default domain bounds: the classic full Mandelbrot frame.
pub const DEFAULT_X_MIN: f64 = -2.0;
pub const DEFAULT_X_MAX: f64 = 1.0;
pub const DEFAULT_Y_MIN: f64 = -1.0;
pub const DEFAULT_Y_MAX: f64 = 1.0;
