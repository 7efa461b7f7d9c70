use crate::core::data::complex::Complex;
use crate::core::fractals::escape_result::EscapeResult;

/// Point algorithm seam: a pure function from a sample point to its escape
/// result. Implementations must be safely callable concurrently for
/// different points.
pub trait FractalAlgorithm {
    fn iterations(&self, point: Complex) -> EscapeResult;
}
