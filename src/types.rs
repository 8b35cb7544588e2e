//! Core value types for the zoom-selection system.
//!
//! Two coordinate systems meet here: screen space ([`Pixel`], integer, origin
//! top-left, y growing downward) and the domain plane ([`Area`], real-valued
//! bounds of the fractal region currently on screen). [`Viewport`] carries the
//! pixel dimensions that tie the two together.

use crate::constants::{DEFAULT_X_MAX, DEFAULT_X_MIN, DEFAULT_Y_MAX, DEFAULT_Y_MIN};
use crate::error::{GeometryError, GeometryResult};
use serde::{Deserialize, Serialize};

// ============================================================================
// Pixel
// ============================================================================

/// An integer point in screen space.
///
/// Coordinates are unconstrained: a pixel may lie outside the viewport, and
/// clamping (if wanted) is the host's responsibility.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Pixel {
    pub x: i32,
    pub y: i32,
}

impl Pixel {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

// ============================================================================
// Area
// ============================================================================

/// An axis-aligned rectangle of the domain plane, mapped onto the full
/// viewport.
///
/// Invariant: `x_min < x_max` and `y_min < y_max`. Inverted and degenerate
/// rectangles are rejected at construction; no downstream computation can
/// produce a meaningful render from them.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawArea")]
pub struct Area {
    x_min: f64,
    x_max: f64,
    y_min: f64,
    y_max: f64,
}

impl Area {
    pub fn new(x_min: f64, x_max: f64, y_min: f64, y_max: f64) -> GeometryResult<Self> {
        if x_min >= x_max || y_min >= y_max {
            return Err(GeometryError::InvalidArea {
                x_min,
                x_max,
                y_min,
                y_max,
            });
        }
        Ok(Self {
            x_min,
            x_max,
            y_min,
            y_max,
        })
    }

    #[inline]
    pub fn x_min(&self) -> f64 {
        self.x_min
    }

    #[inline]
    pub fn x_max(&self) -> f64 {
        self.x_max
    }

    #[inline]
    pub fn y_min(&self) -> f64 {
        self.y_min
    }

    #[inline]
    pub fn y_max(&self) -> f64 {
        self.y_max
    }

    /// Horizontal extent. Strictly positive by construction.
    #[inline]
    pub fn width(&self) -> f64 {
        self.x_max - self.x_min
    }

    /// Vertical extent. Strictly positive by construction.
    #[inline]
    pub fn height(&self) -> f64 {
        self.y_max - self.y_min
    }

    /// Midpoint of the rectangle.
    pub fn center(&self) -> (f64, f64) {
        (
            (self.x_min + self.x_max) / 2.0,
            (self.y_min + self.y_max) / 2.0,
        )
    }
}

impl Default for Area {
    /// The conventional initial frame: the full Mandelbrot set.
    fn default() -> Self {
        Self {
            x_min: DEFAULT_X_MIN,
            x_max: DEFAULT_X_MAX,
            y_min: DEFAULT_Y_MIN,
            y_max: DEFAULT_Y_MAX,
        }
    }
}

/// Unvalidated mirror of [`Area`] so deserialized bounds re-enter through the
/// constructor.
#[derive(Deserialize)]
struct RawArea {
    x_min: f64,
    x_max: f64,
    y_min: f64,
    y_max: f64,
}

impl TryFrom<RawArea> for Area {
    type Error = GeometryError;

    fn try_from(raw: RawArea) -> GeometryResult<Self> {
        Area::new(raw.x_min, raw.x_max, raw.y_min, raw.y_max)
    }
}

// ============================================================================
// Viewport
// ============================================================================

/// Pixel dimensions of the canvas the current [`Area`] is rendered onto.
///
/// Invariant: both dimensions are nonzero. The coordinate mapping and the
/// aspect ratio divide by them.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawViewport")]
pub struct Viewport {
    width: u32,
    height: u32,
}

impl Viewport {
    pub fn new(width: u32, height: u32) -> GeometryResult<Self> {
        if width == 0 || height == 0 {
            return Err(GeometryError::EmptyViewport { width, height });
        }
        Ok(Self { width, height })
    }

    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Target height-to-width ratio for ratio-locked selections.
    #[inline]
    pub fn aspect_ratio(&self) -> f64 {
        f64::from(self.height) / f64::from(self.width)
    }
}

/// Unvalidated mirror of [`Viewport`] for deserialization.
#[derive(Deserialize)]
struct RawViewport {
    width: u32,
    height: u32,
}

impl TryFrom<RawViewport> for Viewport {
    type Error = GeometryError;

    fn try_from(raw: RawViewport) -> GeometryResult<Self> {
        Viewport::new(raw.width, raw.height)
    }
}
