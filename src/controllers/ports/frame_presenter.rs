use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::core::data::frame_buffer::FrameView;

#[derive(Debug, Error)]
pub enum PresentError {
    #[error("failed to write {}: {source}", .path.display())]
    Io { path: PathBuf, source: io::Error },
    #[error("failed to encode {}: {source}", .path.display())]
    Encode {
        path: PathBuf,
        source: image::ImageError,
    },
    #[error("frame {index} is {width}x{height}, too large for the encoder")]
    TooLarge {
        index: usize,
        width: usize,
        height: usize,
    },
}

/// Writes a single frame's depth bytes to an image file.
pub trait FramePresenterPort {
    /// File extension, without the dot, of the files this presenter writes.
    fn extension(&self) -> &'static str;

    fn present(&self, frame: &FrameView<'_>, filepath: &Path) -> Result<(), PresentError>;
}
