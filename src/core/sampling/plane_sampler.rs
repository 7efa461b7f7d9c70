use crate::core::data::complex::Complex;
use crate::core::data::complex_rect::ComplexRect;
use crate::core::data::point::Point;
use crate::core::data::resolution::Resolution;
use crate::core::util::pixel_to_complex_coords::pixel_to_complex_coords;

/// One grid position together with the complex point it samples.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Sample {
    pub row: u32,
    pub col: u32,
    pub point: Complex,
}

/// Pairs a view rectangle with a resolution and hands out the sample
/// points one per pixel.
///
/// Downstream buffer writes assume the row-major order `samples()`
/// guarantees: row 0 first, and within a row column 0 first.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct PlaneSampler {
    view: ComplexRect,
    resolution: Resolution,
}

impl PlaneSampler {
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

    /// A fresh pass over all `width * height` samples. The sampler is
    /// `Copy`, so calling this again restarts from the first pixel.
    #[must_use]
    pub fn samples(&self) -> Samples {
        Samples {
            sampler: *self,
            index: 0,
        }
    }
}

#[derive(Debug, Clone)]
pub struct Samples {
    sampler: PlaneSampler,
    index: usize,
}

impl Iterator for Samples {
    type Item = Sample;

    fn next(&mut self) -> Option<Sample> {
        if self.index >= self.sampler.resolution.sample_count() {
            return None;
        }

        let width = self.sampler.resolution.width() as usize;
        let col = (self.index % width) as u32;
        let row = (self.index / width) as u32;
        self.index += 1;

        let point = pixel_to_complex_coords(
            Point { x: col, y: row },
            self.sampler.resolution,
            self.sampler.view,
        );

        Some(Sample { row, col, point })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.sampler.resolution.sample_count() - self.index;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for Samples {}
