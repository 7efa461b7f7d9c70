use crate::core::data::complex_rect::ComplexRect;
use crate::core::data::fractal_params::FractalParams;
use crate::core::data::resolution::Resolution;

/// A snapshot of the parameters for one render job.
///
/// Immutable: it captures exactly what a single frame should show.
/// `PartialEq` enables change detection to skip redundant renders.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct RenderRequest {
    /// View region in the complex plane.
    pub view: ComplexRect,
    /// Target render dimensions in pixels.
    pub resolution: Resolution,
    /// Iterated-map parameters.
    pub params: FractalParams,
}
