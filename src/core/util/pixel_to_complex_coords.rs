use crate::core::data::complex::Complex;
use crate::core::data::complex_rect::ComplexRect;
use crate::core::data::resolution::Resolution;

/// Sample point for pixel column `i`, row `j`.
///
/// Linear interpolation from the region's top-left corner: pixel `(0, 0)` lands
/// exactly on `top_left`, and pixel `(width, height)` (one past the last) would land
/// on `bottom_right`. The selection mapper inverts this same mapping.
#[must_use]
pub fn pixel_to_complex_coords(i: u32, j: u32, resolution: Resolution, region: ComplexRect) -> Complex {
    let real = (region.width() * f64::from(i)) / f64::from(resolution.width()) + region.top_left().real;
    let imag = (region.height() * f64::from(j)) / f64::from(resolution.height()) + region.top_left().imag;

    Complex { real, imag }
}
