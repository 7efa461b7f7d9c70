use std::error::Error;
use std::fmt;

#[derive(Debug, Copy, Clone, PartialEq)]
pub enum FractalParamsError {
    ZeroMaxIterations,
    NonPositiveThreshold { threshold: f64 },
    NonFiniteExponent { exponent: f64 },
}

impl fmt::Display for FractalParamsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ZeroMaxIterations => {
                write!(f, "maximum iterations must be greater than zero")
            }
            Self::NonPositiveThreshold { threshold } => {
                write!(f, "escape threshold must be positive: {}", threshold)
            }
            Self::NonFiniteExponent { exponent } => {
                write!(f, "exponent must be finite: {}", exponent)
            }
        }
    }
}

impl Error for FractalParamsError {}

/// Parameters of the iterated map `z -> z^exponent + c`.
///
/// Validated once at construction and immutable afterwards, so the
/// divergence test never re-checks them per point.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct FractalParams {
    exponent: f64,
    max_iterations: u32,
    escape_threshold: f64,
}

impl FractalParams {
    pub fn new(
        exponent: f64,
        max_iterations: u32,
        escape_threshold: f64,
    ) -> Result<Self, FractalParamsError> {
        if !exponent.is_finite() {
            return Err(FractalParamsError::NonFiniteExponent { exponent });
        }

        if max_iterations == 0 {
            return Err(FractalParamsError::ZeroMaxIterations);
        }

        if !(escape_threshold > 0.0) {
            return Err(FractalParamsError::NonPositiveThreshold {
                threshold: escape_threshold,
            });
        }

        Ok(Self {
            exponent,
            max_iterations,
            escape_threshold,
        })
    }

    #[must_use]
    pub fn exponent(&self) -> f64 {
        self.exponent
    }

    #[must_use]
    pub fn max_iterations(&self) -> u32 {
        self.max_iterations
    }

    #[must_use]
    pub fn escape_threshold(&self) -> f64 {
        self.escape_threshold
    }
}

impl Default for FractalParams {
    /// The classic Mandelbrot configuration: exponent 2, 100 iterations,
    /// threshold 2.
    fn default() -> Self {
        Self {
            exponent: 2.0,
            max_iterations: 100,
            escape_threshold: 2.0,
        }
    }
}
