use crate::core::data::complex_rect::ComplexRect;
use crate::core::data::point::Point;
use crate::core::data::resolution::Resolution;
use crate::core::util::pixel_to_complex_coords::pixel_to_complex_coords;

/// The view rectangle currently on screen together with its sampling
/// resolution.
///
/// An explicit, passed-around value: the UI layer holds one and feeds it
/// into render and recenter calls. Recentering replaces the whole value,
/// never mutates it, so an in-flight render keeps reading a consistent
/// view.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct ViewState {
    view: ComplexRect,
    resolution: Resolution,
}

impl ViewState {
    #[must_use]
    pub fn new(view: ComplexRect, resolution: Resolution) -> Self {
        Self { view, resolution }
    }

    #[must_use]
    pub fn view(&self) -> ComplexRect {
        self.view
    }

    #[must_use]
    pub fn resolution(&self) -> Resolution {
        self.resolution
    }

    /// Pans the view so the clicked pixel's sample point becomes the new
    /// center. Width, height and zoom are unchanged.
    ///
    /// `clicked` must lie inside `[0,width) × [0,height)`; the GUI
    /// collaborator clamps before calling.
    #[must_use]
    pub fn recenter(&self, clicked: Point) -> Self {
        debug_assert!(
            clicked.x < self.resolution.width() && clicked.y < self.resolution.height(),
            "clicked pixel outside the sampled grid"
        );

        let new_center = pixel_to_complex_coords(clicked, self.resolution, self.view);
        let displacement = new_center - self.view.center();

        Self {
            view: self.view.translated(displacement),
            resolution: self.resolution,
        }
    }
}
