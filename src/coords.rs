//! Coordinate conversion between screen pixels and the domain plane.
//!
//! This module centralizes the interpolation formulas so they exist in exactly
//! one place: pixel `(0, 0)` maps to `(x_min, y_min)` of the current area and
//! pixel `(width, height)` maps to `(x_max, y_max)`.
//!
//! The y axis is deliberately NOT flipped here. Screen y and domain y both
//! grow in the same direction through these functions; if the renderer wants
//! the mathematical orientation (y up), it owns that inversion. Flipping in
//! both places would silently mirror every zoom.

use crate::error::GeometryResult;
use crate::types::{Area, Pixel, Viewport};

/// Context needed for coordinate conversions
#[derive(Debug, Clone, Copy)]
pub struct CoordinateContext<'a> {
    /// The domain rectangle currently mapped onto the full viewport.
    pub area: &'a Area,
    /// Pixel dimensions of the viewport.
    pub viewport: Viewport,
}

impl<'a> CoordinateContext<'a> {
    /// Create a new coordinate context
    #[inline]
    pub fn new(area: &'a Area, viewport: Viewport) -> Self {
        Self { area, viewport }
    }
}

pub struct CoordinateConverter;

impl CoordinateConverter {
    /// Linearly interpolate a pixel into the domain range it currently
    /// represents.
    #[inline]
    pub fn pixel_to_domain(px: Pixel, ctx: &CoordinateContext<'_>) -> (f64, f64) {
        (
            f64::from(px.x) * ctx.area.width() / f64::from(ctx.viewport.width())
                + ctx.area.x_min(),
            f64::from(px.y) * ctx.area.height() / f64::from(ctx.viewport.height())
                + ctx.area.y_min(),
        )
    }

    /// Map a normalized pixel rectangle to the domain rectangle it covers.
    ///
    /// A zero-span selection surfaces as the area constructor's degenerate
    /// bounds error; callers committing a zoom guard with a minimum pixel span
    /// upstream rather than handling an unusable rectangle downstream.
    pub fn selection_to_area(
        from: Pixel,
        to: Pixel,
        ctx: &CoordinateContext<'_>,
    ) -> GeometryResult<Area> {
        let (x_min, y_min) = Self::pixel_to_domain(from, ctx);
        let (x_max, y_max) = Self::pixel_to_domain(to, ctx);
        Area::new(x_min, x_max, y_min, y_max)
    }
}
