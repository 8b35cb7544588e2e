//! Error types for geometry construction.
//!
//! All pointer input is structurally valid by the type contracts, so the only
//! fallible operations are the ones that build domain geometry: an inverted or
//! collapsed [`Area`](crate::types::Area) cannot be rendered, and a zero-sized
//! [`Viewport`](crate::types::Viewport) cannot be mapped into, so both fail
//! fast at construction.

use thiserror::Error;

/// Errors that can occur when constructing domain geometry
#[derive(Error, Debug, Clone, Copy, PartialEq)]
pub enum GeometryError {
    /// Area bounds are inverted or degenerate (min must be strictly below max)
    #[error("invalid area bounds: x [{x_min}, {x_max}], y [{y_min}, {y_max}]")]
    InvalidArea {
        x_min: f64,
        x_max: f64,
        y_min: f64,
        y_max: f64,
    },

    /// Viewport has a zero pixel dimension
    #[error("empty viewport: {width}x{height}")]
    EmptyViewport { width: u32, height: u32 },
}

/// Result type alias for geometry operations
pub type GeometryResult<T> = Result<T, GeometryError>;
