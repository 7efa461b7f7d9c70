use crate::core::actions::generate_pixel_buffer::generate_pixel_buffer::GeneratePixelBufferError;
use crate::core::actions::render_image::render_image;
use crate::core::data::fractal_params::FractalParams;
use crate::core::data::pixel_buffer::PixelBuffer;
use crate::core::data::point::Point;
use crate::core::view::view_state::ViewState;

/// Commands the UI layer dispatches at the explorer.
///
/// Recentering and rendering are separate commands: input handling can be
/// tested without computing a frame, and a render can be scheduled
/// elsewhere (see the interactive controller) without touching the
/// event-handling layer.
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum ExplorerCommand {
    Recenter(Point),
    Render,
}

/// Owns the current [`ViewState`] and the fractal parameters, and applies
/// commands against them.
#[derive(Debug)]
pub struct ExplorerController {
    view_state: ViewState,
    params: FractalParams,
}

impl ExplorerController {
    #[must_use]
    pub fn new(view_state: ViewState, params: FractalParams) -> Self {
        Self { view_state, params }
    }

    #[must_use]
    pub fn view_state(&self) -> ViewState {
        self.view_state
    }

    #[must_use]
    pub fn params(&self) -> FractalParams {
        self.params
    }

    /// Replaces the view state with one centred on the clicked pixel.
    /// Renders nothing.
    pub fn recenter(&mut self, clicked: Point) {
        self.view_state = self.view_state.recenter(clicked);
    }

    /// Renders a frame for the current view state.
    pub fn render(&self) -> Result<PixelBuffer, GeneratePixelBufferError> {
        render_image(
            self.view_state.view(),
            self.view_state.resolution(),
            self.params,
        )
    }

    /// Applies a command. `Recenter` yields no buffer; `Render` yields the
    /// finished frame.
    pub fn dispatch(
        &mut self,
        command: ExplorerCommand,
    ) -> Result<Option<PixelBuffer>, GeneratePixelBufferError> {
        match command {
            ExplorerCommand::Recenter(clicked) => {
                self.recenter(clicked);
                Ok(None)
            }
            ExplorerCommand::Render => self.render().map(Some),
        }
    }
}
