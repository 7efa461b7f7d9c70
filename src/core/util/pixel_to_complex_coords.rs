use crate::core::data::complex::Complex;
use crate::core::data::complex_rect::ComplexRect;
use crate::core::data::point::Point;
use crate::core::data::resolution::Resolution;

/// Maps a pixel coordinate to its complex-plane sample point.
///
/// Both the plane sampler and the recenter transform go through this one
/// function, so the imaginary-axis flip stays identical for rendering and
/// panning. Coordinates outside the grid extrapolate linearly; callers are
/// expected to stay inside `[0,width) × [0,height)`.
#[must_use]
pub fn pixel_to_complex_coords(
    pixel: Point,
    resolution: Resolution,
    view: ComplexRect,
) -> Complex {
    let real = view.top_left().real
        + view.width() * (f64::from(pixel.x) / f64::from(resolution.width()));
    let imag = view.top_left().imag
        - view.height() * (f64::from(pixel.y) / f64::from(resolution.height()));

    Complex { real, imag }
}
