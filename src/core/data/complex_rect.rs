use crate::core::data::complex::Complex;
use crate::core::errors::ConfigurationError;

/// A rectangular region of the complex plane, given by two opposite corners.
///
/// In the usual orientation `top_left` has the minimum real and maximum imaginary
/// part, so `height()` is negative. Any orientation is accepted as long as the
/// rectangle has non-zero extent on both axes.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct ComplexRect {
    top_left: Complex,
    bottom_right: Complex,
}

impl ComplexRect {
    pub fn new(top_left: Complex, bottom_right: Complex) -> Result<Self, ConfigurationError> {
        if !top_left.is_finite() || !bottom_right.is_finite() {
            return Err(ConfigurationError::NonFiniteRegion);
        }

        let width = bottom_right.real - top_left.real;
        let height = bottom_right.imag - top_left.imag;

        if width == 0.0 || height == 0.0 || !width.is_finite() || !height.is_finite() {
            return Err(ConfigurationError::DegenerateRegion { width, height });
        }

        Ok(Self {
            top_left,
            bottom_right,
        })
    }

    #[must_use]
    pub fn top_left(&self) -> Complex {
        self.top_left
    }

    #[must_use]
    pub fn bottom_right(&self) -> Complex {
        self.bottom_right
    }

    /// Signed real extent, `real(b) - real(a)`.
    #[must_use]
    pub fn width(&self) -> f64 {
        self.bottom_right.real - self.top_left.real
    }

    /// Signed imaginary extent, `imag(b) - imag(a)`.
    #[must_use]
    pub fn height(&self) -> f64 {
        self.bottom_right.imag - self.top_left.imag
    }
}

impl Default for ComplexRect {
    /// The full view of the set, `-2 + 2i` to `2 - 2i`.
    fn default() -> Self {
        Self {
            top_left: Complex::new(-2.0, 2.0),
            bottom_right: Complex::new(2.0, -2.0),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_complex_rect_new_valid() {
        let top_left = Complex::new(-2.0, 1.0);
        let bottom_right = Complex::new(1.0, -1.0);

        let rect = ComplexRect::new(top_left, bottom_right).unwrap();

        assert_eq!(rect.top_left(), top_left);
        assert_eq!(rect.bottom_right(), bottom_right);
    }

    #[test]
    fn test_complex_rect_accepts_any_orientation() {
        let flipped = ComplexRect::new(Complex::new(1.0, -1.0), Complex::new(-2.0, 1.0));

        assert!(flipped.is_ok());
    }

    #[test]
    fn test_complex_rect_rejects_degenerate_axes() {
        let zero_width = ComplexRect::new(Complex::new(0.0, 0.0), Complex::new(0.0, 100.0));
        let zero_height = ComplexRect::new(Complex::new(0.0, 0.0), Complex::new(100.0, 0.0));
        let single_point = ComplexRect::new(Complex::new(2.0, 2.0), Complex::new(2.0, 2.0));

        assert_eq!(
            zero_width,
            Err(ConfigurationError::DegenerateRegion {
                width: 0.0,
                height: 100.0
            })
        );
        assert_eq!(
            zero_height,
            Err(ConfigurationError::DegenerateRegion {
                width: 100.0,
                height: 0.0
            })
        );
        assert_eq!(
            single_point,
            Err(ConfigurationError::DegenerateRegion {
                width: 0.0,
                height: 0.0
            })
        );
    }

    #[test]
    fn test_complex_rect_rejects_non_finite_corners() {
        let rect = ComplexRect::new(Complex::new(f64::NAN, 0.0), Complex::new(1.0, 1.0));

        assert_eq!(rect, Err(ConfigurationError::NonFiniteRegion));
    }

    #[test]
    fn test_complex_rect_signed_dimensions() {
        let rect = ComplexRect::new(Complex::new(-2.5, 1.0), Complex::new(1.0, -1.0)).unwrap();

        assert_eq!(rect.width(), 3.5);
        assert_eq!(rect.height(), -2.0);
    }

    #[test]
    fn test_default_region_is_reference_view() {
        let rect = ComplexRect::default();

        assert_eq!(rect.top_left(), Complex::new(-2.0, 2.0));
        assert_eq!(rect.bottom_right(), Complex::new(2.0, -2.0));
        assert_eq!(rect.width(), 4.0);
        assert_eq!(rect.height(), -4.0);
    }
}
