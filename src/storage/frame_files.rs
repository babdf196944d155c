use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use crate::controllers::ports::frame_presenter::{FramePresenterPort, PresentError};
use crate::core::data::frame_buffer::{FrameBuffer, FrameStatus};

/// Added to the frame index in file names so names sort the same way
/// lexically and numerically for the first thousand frames.
pub const FRAME_NUMBER_OFFSET: usize = 1000;

#[must_use]
pub fn frame_file_name(index: usize, extension: &str) -> String {
    format!("fractal{}.{}", index + FRAME_NUMBER_OFFSET, extension)
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct WrittenFrames {
    pub paths: Vec<PathBuf>,
    /// Frames left out because they were not rendered successfully.
    pub skipped: Vec<usize>,
}

/// Writes every rendered frame of `buffer` into `dir`, creating it if needed.
pub fn write_frames<P: FramePresenterPort>(
    buffer: &FrameBuffer,
    presenter: &P,
    dir: &Path,
) -> Result<WrittenFrames, PresentError> {
    fs::create_dir_all(dir).map_err(|source| PresentError::Io {
        path: dir.to_path_buf(),
        source,
    })?;

    let mut written = WrittenFrames::default();
    for frame in buffer.frames() {
        if frame.status != FrameStatus::Rendered {
            warn!(frame = frame.index, status = ?frame.status, "not writing unrendered frame");
            written.skipped.push(frame.index);
            continue;
        }

        let path = dir.join(frame_file_name(frame.index, presenter.extension()));
        presenter.present(&frame, &path)?;
        debug!(path = %path.display(), "wrote frame");
        written.paths.push(path);
    }

    Ok(written)
}
