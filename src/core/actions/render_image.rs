use crate::core::actions::generate_fractal::generate_fractal_rayon::generate_fractal_rayon;
use crate::core::actions::generate_pixel_buffer::generate_pixel_buffer::{
    GeneratePixelBufferError, generate_pixel_buffer,
};
use crate::core::data::complex_rect::ComplexRect;
use crate::core::data::fractal_params::FractalParams;
use crate::core::data::pixel_buffer::PixelBuffer;
use crate::core::data::resolution::Resolution;
use crate::core::fractals::multibrot::algorithm::MultibrotAlgorithm;
use crate::core::fractals::multibrot::grayscale::GrayscaleMap;

/// Renders one full frame: samples the view, runs the divergence test over
/// every point (in parallel), and maps the results to the grayscale buffer.
///
/// Every pixel of the returned buffer is assigned exactly once; no partial
/// buffer is ever returned. The output is deterministic for identical
/// inputs regardless of how rayon schedules the work.
pub fn render_image(
    view: ComplexRect,
    resolution: Resolution,
    params: FractalParams,
) -> Result<PixelBuffer, GeneratePixelBufferError> {
    let algorithm = MultibrotAlgorithm::new(params);
    let escapes = generate_fractal_rayon(view, resolution, &algorithm);

    let colour_map = GrayscaleMap::new(params.max_iterations());
    generate_pixel_buffer(escapes, &colour_map, resolution)
}
