use crate::core::data::complex::Complex;
use std::error::Error;
use std::fmt;

#[derive(Debug, Copy, Clone, PartialEq)]
pub enum ComplexRectError {
    InvalidSize { width: f64, height: f64 },
}

impl fmt::Display for ComplexRectError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidSize { width, height } => {
                write!(f, "complex rect size must be positive: {}x{}", width, height)
            }
        }
    }
}

impl Error for ComplexRectError {}

/// A view rectangle in the complex plane.
///
/// The imaginary axis decreases downward, so a correctly oriented rectangle
/// has `bottom_right.real > top_left.real` and
/// `bottom_right.imag < top_left.imag`. Recentering never mutates a rect in
/// place; it produces a new one.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct ComplexRect {
    top_left: Complex,
    bottom_right: Complex,
}

impl ComplexRect {
    pub fn new(top_left: Complex, bottom_right: Complex) -> Result<Self, ComplexRectError> {
        let width = bottom_right.real - top_left.real;
        let height = top_left.imag - bottom_right.imag;

        if !(width > 0.0) || !(height > 0.0) {
            return Err(ComplexRectError::InvalidSize { width, height });
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

    /// Real-axis span, always positive.
    #[must_use]
    pub fn width(&self) -> f64 {
        self.bottom_right.real - self.top_left.real
    }

    /// Imaginary-axis span, always positive.
    #[must_use]
    pub fn height(&self) -> f64 {
        self.top_left.imag - self.bottom_right.imag
    }

    #[must_use]
    pub fn center(&self) -> Complex {
        Complex {
            real: (self.top_left.real + self.bottom_right.real) / 2.0,
            imag: (self.top_left.imag + self.bottom_right.imag) / 2.0,
        }
    }

    /// Shifts both corners by `delta`. Translation preserves both spans, so
    /// the orientation invariant cannot be broken and no validation runs.
    #[must_use]
    pub fn translated(&self, delta: Complex) -> Self {
        Self {
            top_left: self.top_left + delta,
            bottom_right: self.bottom_right + delta,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn default_rect() -> ComplexRect {
        ComplexRect::new(
            Complex {
                real: -2.0,
                imag: 2.0,
            },
            Complex {
                real: 2.0,
                imag: -2.0,
            },
        )
        .unwrap()
    }

    #[test]
    fn test_complex_rect_new_valid() {
        let top_left = Complex {
            real: -2.0,
            imag: 2.0,
        };
        let bottom_right = Complex {
            real: 2.0,
            imag: -2.0,
        };

        let rect = ComplexRect::new(top_left, bottom_right).unwrap();

        assert_eq!(rect.top_left(), top_left);
        assert_eq!(rect.bottom_right(), bottom_right);
    }

    #[test]
    fn test_complex_rect_dimensions() {
        let rect = ComplexRect::new(
            Complex {
                real: -2.5,
                imag: 1.0,
            },
            Complex {
                real: 1.0,
                imag: -1.0,
            },
        )
        .unwrap();

        assert_eq!(rect.width(), 3.5);
        assert_eq!(rect.height(), 2.0);
    }

    #[test]
    fn test_complex_rect_orientation_must_be_preserved() {
        // bottom-right above the top-left: flipped imaginary axis
        let flipped_imag = ComplexRect::new(
            Complex {
                real: -1.0,
                imag: -1.0,
            },
            Complex {
                real: 1.0,
                imag: 1.0,
            },
        );

        // bottom-right left of the top-left: flipped real axis
        let flipped_real = ComplexRect::new(
            Complex {
                real: 1.0,
                imag: 1.0,
            },
            Complex {
                real: -1.0,
                imag: -1.0,
            },
        );

        let degenerate = ComplexRect::new(
            Complex {
                real: 2.0,
                imag: 2.0,
            },
            Complex {
                real: 2.0,
                imag: 2.0,
            },
        );

        assert_eq!(
            flipped_imag,
            Err(ComplexRectError::InvalidSize {
                width: 2.0,
                height: -2.0
            })
        );
        assert_eq!(
            flipped_real,
            Err(ComplexRectError::InvalidSize {
                width: -2.0,
                height: 2.0
            })
        );
        assert_eq!(
            degenerate,
            Err(ComplexRectError::InvalidSize {
                width: 0.0,
                height: 0.0
            })
        );
    }

    #[test]
    fn test_complex_rect_rejects_nan_corners() {
        let rect = ComplexRect::new(
            Complex {
                real: f64::NAN,
                imag: 2.0,
            },
            Complex {
                real: 2.0,
                imag: -2.0,
            },
        );

        assert!(rect.is_err());
    }

    #[test]
    fn test_complex_rect_center() {
        let rect = ComplexRect::new(
            Complex {
                real: -1.0,
                imag: 3.0,
            },
            Complex {
                real: 3.0,
                imag: -1.0,
            },
        )
        .unwrap();

        assert_eq!(
            rect.center(),
            Complex {
                real: 1.0,
                imag: 1.0
            }
        );
    }

    #[test]
    fn test_translated_shifts_both_corners() {
        let rect = default_rect();
        let delta = Complex {
            real: 0.5,
            imag: -0.25,
        };

        let moved = rect.translated(delta);

        assert_eq!(moved.top_left(), rect.top_left() + delta);
        assert_eq!(moved.bottom_right(), rect.bottom_right() + delta);
    }

    #[test]
    fn test_translated_preserves_dimensions() {
        let rect = default_rect();

        let moved = rect.translated(Complex {
            real: 17.3,
            imag: -4.1,
        });

        assert_eq!(moved.width(), rect.width());
        assert_eq!(moved.height(), rect.height());
    }
}
