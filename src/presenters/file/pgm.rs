use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use image::codecs::pnm::{PnmEncoder, PnmSubtype, SampleEncoding};
use image::{ExtendedColorType, ImageEncoder};

use crate::controllers::ports::frame_presenter::{FramePresenterPort, PresentError};
use crate::core::data::frame_buffer::FrameView;

/// Binary greymap (PGM) files.
#[derive(Debug, Default, Clone, Copy)]
pub struct PgmFilePresenter;

impl PgmFilePresenter {
    pub fn new() -> Self {
        Self
    }
}

impl FramePresenterPort for PgmFilePresenter {
    fn extension(&self) -> &'static str {
        "pgm"
    }

    fn present(&self, frame: &FrameView<'_>, filepath: &Path) -> Result<(), PresentError> {
        let too_large = || PresentError::TooLarge {
            index: frame.index,
            width: frame.width,
            height: frame.height,
        };
        let width = u32::try_from(frame.width).map_err(|_| too_large())?;
        let height = u32::try_from(frame.height).map_err(|_| too_large())?;
        let io_error = |source| PresentError::Io {
            path: filepath.to_path_buf(),
            source,
        };

        let mut file = BufWriter::new(File::create(filepath).map_err(io_error)?);
        PnmEncoder::new(&mut file)
            .with_subtype(PnmSubtype::Graymap(SampleEncoding::Binary))
            .write_image(frame.pixels, width, height, ExtendedColorType::L8)
            .map_err(|source| PresentError::Encode {
                path: filepath.to_path_buf(),
                source,
            })?;
        file.flush().map_err(io_error)
    }
}
