use rayon::prelude::*;

use crate::core::actions::generate_fractal::ports::fractal_algorithm::FractalAlgorithm;
use crate::core::data::complex_rect::ComplexRect;
use crate::core::data::resolution::Resolution;
use crate::core::fractals::escape_result::EscapeResult;
use crate::core::sampling::plane_sampler::{PlaneSampler, Sample};

/// Runs the point algorithm over every sample in parallel with rayon's
/// work-stealing scheduler.
///
/// Point evaluations are independent, and the indexed parallel collect
/// keeps the results in the sampler's row-major order, so output is
/// identical to [`generate_fractal`](super::generate_fractal::generate_fractal).
#[must_use]
pub fn generate_fractal_rayon<Alg>(
    view: ComplexRect,
    resolution: Resolution,
    algorithm: &Alg,
) -> Vec<EscapeResult>
where
    Alg: FractalAlgorithm + Sync,
{
    let samples: Vec<Sample> = PlaneSampler::new(view, resolution).samples().collect();

    samples
        .into_par_iter()
        .map(|sample| algorithm.iterations(sample.point))
        .collect()
}
