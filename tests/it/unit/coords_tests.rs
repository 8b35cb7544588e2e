//! Tests for pixel-to-domain mapping.

use crate::helpers::assert_area_approx;
use fractalzoom::{Area, CoordinateContext, CoordinateConverter, GeometryError, Pixel, Viewport};

fn ctx(area: &Area, w: u32, h: u32) -> CoordinateContext<'_> {
    CoordinateContext::new(area, Viewport::new(w, h).unwrap())
}

#[test]
fn test_full_viewport_selection_is_identity() {
    let area = Area::new(-2.0, 1.0, -1.0, 1.0).unwrap();
    let ctx = ctx(&area, 300, 200);

    let mapped =
        CoordinateConverter::selection_to_area(Pixel::new(0, 0), Pixel::new(300, 200), &ctx)
            .unwrap();
    assert_eq!(mapped, area);
}

#[test]
fn test_quarter_selection_maps_linearly() {
    // Selecting the top-left quarter of the viewport picks out the top-left
    // quarter of the domain rectangle.
    let area = Area::new(-2.0, 1.0, -1.0, 1.0).unwrap();
    let ctx = ctx(&area, 300, 200);

    let mapped =
        CoordinateConverter::selection_to_area(Pixel::new(0, 0), Pixel::new(150, 100), &ctx)
            .unwrap();
    assert_eq!(mapped, Area::new(-2.0, -0.5, -1.0, 0.0).unwrap());
}

#[test]
fn test_pixel_to_domain_corners_and_center() {
    let area = Area::new(-2.0, 1.0, -1.0, 1.0).unwrap();
    let ctx = ctx(&area, 300, 200);

    assert_eq!(
        CoordinateConverter::pixel_to_domain(Pixel::new(0, 0), &ctx),
        (-2.0, -1.0)
    );
    assert_eq!(
        CoordinateConverter::pixel_to_domain(Pixel::new(300, 200), &ctx),
        (1.0, 1.0)
    );
    // The viewport midpoint lands on the domain midpoint.
    assert_eq!(
        CoordinateConverter::pixel_to_domain(Pixel::new(150, 100), &ctx),
        area.center()
    );
}

#[test]
fn test_screen_y_and_domain_y_grow_together() {
    // No implicit axis flip: a pixel further down the screen maps to a larger
    // domain y. The renderer owns any display-vs-math inversion.
    let area = Area::new(-2.0, 1.0, -1.0, 1.0).unwrap();
    let ctx = ctx(&area, 300, 200);

    let (_, y_top) = CoordinateConverter::pixel_to_domain(Pixel::new(0, 50), &ctx);
    let (_, y_bottom) = CoordinateConverter::pixel_to_domain(Pixel::new(0, 150), &ctx);
    assert!(y_top < y_bottom);
}

#[test]
fn test_zero_span_selection_is_rejected() {
    // The mapper itself surfaces degenerate selections as construction
    // errors; commit paths guard with a minimum pixel span upstream.
    let area = Area::new(-2.0, 1.0, -1.0, 1.0).unwrap();
    let ctx = ctx(&area, 300, 200);

    let err =
        CoordinateConverter::selection_to_area(Pixel::new(150, 100), Pixel::new(150, 100), &ctx)
            .unwrap_err();
    assert!(matches!(err, GeometryError::InvalidArea { .. }));

    // A single collapsed axis is just as unusable.
    assert!(
        CoordinateConverter::selection_to_area(Pixel::new(10, 20), Pixel::new(10, 180), &ctx)
            .is_err()
    );
}

#[test]
fn test_mapping_into_offset_area() {
    // A zoomed-in area off the origin still interpolates correctly.
    let area = Area::new(0.25, 0.75, -0.5, -0.25).unwrap();
    let ctx = ctx(&area, 400, 400);

    let mapped =
        CoordinateConverter::selection_to_area(Pixel::new(100, 100), Pixel::new(300, 200), &ctx)
            .unwrap();
    assert_area_approx(&mapped, 0.375, 0.625, -0.4375, -0.375);
}
