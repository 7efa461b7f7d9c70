use crate::core::actions::generate_pixel_buffer::ports::colour_map::ColourMap;
use crate::core::data::colour::Colour;
use crate::core::fractals::escape_result::EscapeResult;
use std::error::Error;
use std::fmt;

#[derive(Debug)]
pub enum GrayscaleMapError {
    IterationsExceedMax {
        iterations: u32,
        max_iterations: u32,
    },
}

impl fmt::Display for GrayscaleMapError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::IterationsExceedMax {
                iterations,
                max_iterations,
            } => {
                write!(
                    f,
                    "escape iteration {} exceeds maximum {}",
                    iterations, max_iterations
                )
            }
        }
    }
}

impl Error for GrayscaleMapError {}

/// Grayscale colouring: bounded points are black, escaped points fade from
/// white (immediate escape) towards black as the escape iteration
/// approaches the cap.
#[derive(Debug)]
pub struct GrayscaleMap {
    max_iterations: u32,
}

impl GrayscaleMap {
    #[must_use]
    pub fn new(max_iterations: u32) -> Self {
        Self { max_iterations }
    }
}

impl ColourMap<EscapeResult> for GrayscaleMap {
    fn map(&self, escape: EscapeResult) -> Result<Colour, Box<dyn Error>> {
        match escape {
            EscapeResult::Bounded => Ok(Colour::BLACK),
            EscapeResult::Escaped(iterations) => {
                if iterations >= self.max_iterations {
                    return Err(Box::new(GrayscaleMapError::IterationsExceedMax {
                        iterations,
                        max_iterations: self.max_iterations,
                    }));
                }

                let t = f64::from(iterations) / f64::from(self.max_iterations);
                let level = ((1.0 - t) * 255.0).round() as u8;

                Ok(Colour {
                    r: level,
                    g: level,
                    b: level,
                })
            }
        }
    }
}
