use crate::core::actions::generate_fractal::ports::fractal_algorithm::FractalAlgorithm;
use crate::core::data::complex_rect::ComplexRect;
use crate::core::data::resolution::Resolution;
use crate::core::fractals::escape_result::EscapeResult;
use crate::core::sampling::plane_sampler::PlaneSampler;

/// Runs the point algorithm over every sample of the view, sequentially,
/// in the sampler's row-major order.
#[must_use]
pub fn generate_fractal<Alg: FractalAlgorithm>(
    view: ComplexRect,
    resolution: Resolution,
    algorithm: &Alg,
) -> Vec<EscapeResult> {
    PlaneSampler::new(view, resolution)
        .samples()
        .map(|sample| algorithm.iterations(sample.point))
        .collect()
}
