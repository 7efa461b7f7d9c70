mod controllers;
mod core;
mod presenters;

pub use crate::controllers::explorer::{ExplorerCommand, ExplorerController};
pub use crate::controllers::interactive::controller::InteractiveController;
pub use crate::controllers::interactive::data::frame_data::FrameData;
pub use crate::controllers::interactive::data::render_request::RenderRequest;
pub use crate::controllers::interactive::errors::render::RenderError;
pub use crate::controllers::interactive::events::render_event::RenderEvent;
pub use crate::controllers::interactive::ports::presenter::InteractivePresenterPort;
pub use crate::controllers::ports::file_presenter::FilePresenterPort;
pub use crate::core::actions::generate_fractal::generate_fractal::generate_fractal;
pub use crate::core::actions::generate_fractal::generate_fractal_rayon::generate_fractal_rayon;
pub use crate::core::actions::generate_fractal::ports::fractal_algorithm::FractalAlgorithm;
pub use crate::core::actions::generate_pixel_buffer::generate_pixel_buffer::{
    GeneratePixelBufferError, generate_pixel_buffer,
};
pub use crate::core::actions::generate_pixel_buffer::ports::colour_map::ColourMap;
pub use crate::core::actions::render_image::render_image;
pub use crate::core::data::colour::Colour;
pub use crate::core::data::complex::Complex;
pub use crate::core::data::complex_rect::{ComplexRect, ComplexRectError};
pub use crate::core::data::fractal_params::{FractalParams, FractalParamsError};
pub use crate::core::data::pixel_buffer::{PixelBuffer, PixelBufferData, PixelBufferError};
pub use crate::core::data::point::Point;
pub use crate::core::data::resolution::{Resolution, ResolutionError};
pub use crate::core::fractals::escape_result::EscapeResult;
pub use crate::core::fractals::multibrot::algorithm::MultibrotAlgorithm;
pub use crate::core::fractals::multibrot::grayscale::{GrayscaleMap, GrayscaleMapError};
pub use crate::core::sampling::plane_sampler::{PlaneSampler, Sample, Samples};
pub use crate::core::view::view_state::ViewState;
pub use crate::presenters::file::ppm::PpmFilePresenter;
