use crate::core::actions::generate_fractal::ports::fractal_algorithm::FractalAlgorithm;
use crate::core::data::complex::Complex;
use crate::core::data::fractal_params::FractalParams;
use crate::core::fractals::escape_result::EscapeResult;

/// Escape-time test for the iterated map `z -> z^exponent + c`.
///
/// Exponent 2 is the classic Mandelbrot set; other exponents give the
/// multibrot variants. Parameters are validated at [`FractalParams`]
/// construction, never here.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct MultibrotAlgorithm {
    params: FractalParams,
}

impl MultibrotAlgorithm {
    #[must_use]
    pub fn new(params: FractalParams) -> Self {
        Self { params }
    }

    #[must_use]
    pub fn params(&self) -> FractalParams {
        self.params
    }
}

impl FractalAlgorithm for MultibrotAlgorithm {
    fn iterations(&self, point: Complex) -> EscapeResult {
        let exponent = self.params.exponent();
        let threshold = self.params.escape_threshold();
        let mut z = Complex::ZERO;

        for iteration in 0..self.params.max_iterations() {
            z = if exponent == 2.0 {
                // skip the transcendental power path for the common case
                z * z + point
            } else {
                z.powf(exponent) + point
            };

            let magnitude = z.magnitude();

            // NaN fails every comparison, so a poisoned value would
            // otherwise iterate to the cap and read as bounded
            if magnitude > threshold || magnitude.is_nan() {
                return EscapeResult::Escaped(iteration);
            }
        }

        EscapeResult::Bounded
    }
}
