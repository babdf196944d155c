use std::path::Path;

use image::{ColorType, ImageFormat};

use crate::controllers::ports::frame_presenter::{FramePresenterPort, PresentError};
use crate::core::data::frame_buffer::FrameView;

/// 8-bit grayscale BMP files.
#[derive(Debug, Default, Clone, Copy)]
pub struct BmpFilePresenter;

impl BmpFilePresenter {
    pub fn new() -> Self {
        Self
    }
}

impl FramePresenterPort for BmpFilePresenter {
    fn extension(&self) -> &'static str {
        "bmp"
    }

    fn present(&self, frame: &FrameView<'_>, filepath: &Path) -> Result<(), PresentError> {
        let too_large = || PresentError::TooLarge {
            index: frame.index,
            width: frame.width,
            height: frame.height,
        };
        let width = u32::try_from(frame.width).map_err(|_| too_large())?;
        let height = u32::try_from(frame.height).map_err(|_| too_large())?;

        image::save_buffer_with_format(
            filepath,
            frame.pixels,
            width,
            height,
            ColorType::L8,
            ImageFormat::Bmp,
        )
        .map_err(|source| PresentError::Encode {
            path: filepath.to_path_buf(),
            source,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::data::frame_buffer::FrameStatus;

    #[test]
    fn test_written_bmp_decodes_to_same_pixels() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("frame.bmp");
        let pixels: Vec<u8> = (0..=255).cycle().take(12 * 10).collect();
        let frame = FrameView {
            index: 0,
            width: 12,
            height: 10,
            pixels: &pixels,
            status: FrameStatus::Rendered,
        };

        BmpFilePresenter::new().present(&frame, &path).unwrap();

        let decoded = image::open(&path).unwrap().to_rgb8();
        let greys: Vec<u8> = decoded.pixels().map(|p| p[0]).collect();
        assert_eq!(decoded.dimensions(), (12, 10));
        assert_eq!(greys, pixels);
    }

    #[test]
    fn test_missing_directory_is_reported() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing").join("frame.bmp");
        let pixels = vec![0; 100];
        let frame = FrameView {
            index: 0,
            width: 10,
            height: 10,
            pixels: &pixels,
            status: FrameStatus::Rendered,
        };

        let result = BmpFilePresenter::new().present(&frame, &path);

        assert!(matches!(result, Err(PresentError::Encode { .. })));
    }
}
