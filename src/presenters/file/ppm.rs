use crate::controllers::ports::file_presenter::FilePresenterPort;
use crate::core::data::pixel_buffer::PixelBuffer;
use std::io::Write;
use std::path::Path;

pub struct PpmFilePresenter {}

impl FilePresenterPort for PpmFilePresenter {
    fn present(&self, buffer: &PixelBuffer, filepath: impl AsRef<Path>) -> std::io::Result<()> {
        let mut file = std::fs::File::create(filepath)?;
        let width = buffer.resolution().width();
        let height = buffer.resolution().height();

        // PPM header: P6 means binary RGB, then width, height and max_colour
        writeln!(file, "P6")?;
        writeln!(file, "{} {}", width, height)?;
        writeln!(file, "255")?;
        file.write_all(buffer.buffer())?;

        Ok(())
    }
}

impl Default for PpmFilePresenter {
    fn default() -> Self {
        Self::new()
    }
}

impl PpmFilePresenter {
    #[must_use]
    pub fn new() -> Self {
        Self {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::data::resolution::Resolution;

    #[test]
    fn test_present_writes_header_and_raw_rgb_bytes() {
        let resolution = Resolution::new(2, 2).unwrap();
        let data: Vec<u8> = vec![255, 0, 0, 0, 255, 0, 0, 0, 255, 255, 255, 0];
        let buffer = PixelBuffer::from_data(resolution, data.clone()).unwrap();

        let path = std::env::temp_dir().join("multibrot_explorer_ppm_test.ppm");
        let presenter = PpmFilePresenter::new();
        presenter.present(&buffer, &path).unwrap();

        let written = std::fs::read(&path).unwrap();
        let _ = std::fs::remove_file(&path);

        let mut expected = b"P6\n2 2\n255\n".to_vec();
        expected.extend_from_slice(&data);
        assert_eq!(written, expected);
    }
}
