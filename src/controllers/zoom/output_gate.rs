use crate::core::data::frame_geometry::FrameGeometry;

pub const MAX_OUTPUT_WIDTH: usize = 4096;
pub const MAX_OUTPUT_FRAMES: usize = 120;

/// Decides whether a run is small enough for its frames to be written to disk.
/// Larger runs are still rendered, the buffer is just not saved.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct OutputGate {
    pub max_width: usize,
    pub max_frames: usize,
}

impl Default for OutputGate {
    fn default() -> Self {
        Self {
            max_width: MAX_OUTPUT_WIDTH,
            max_frames: MAX_OUTPUT_FRAMES,
        }
    }
}

impl OutputGate {
    #[must_use]
    pub fn allows(&self, geometry: FrameGeometry) -> bool {
        geometry.width() <= self.max_width && geometry.num_frames() <= self.max_frames
    }
}
