use std::path::Path;

use crate::core::data::pixel_buffer::PixelBuffer;

/// Hands a finished frame to whatever writes images to disk.
pub trait FilePresenterPort {
    fn present(&self, buffer: &PixelBuffer, filepath: impl AsRef<Path>) -> std::io::Result<()>;
}
