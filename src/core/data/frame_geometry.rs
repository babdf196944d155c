use thiserror::Error;

use crate::core::data::pixel_rect::PixelRect;

pub const MIN_FRAME_WIDTH: usize = 10;
pub const MIN_FRAME_HEIGHT: usize = 10;
pub const MIN_NUM_FRAMES: usize = 1;

#[derive(Debug, Copy, Clone, PartialEq, Eq, Error)]
pub enum FrameGeometryError {
    #[error("frame width must be at least {}, got {width}", MIN_FRAME_WIDTH)]
    WidthTooSmall { width: usize },
    #[error("frame height must be at least {}, got {height}", MIN_FRAME_HEIGHT)]
    HeightTooSmall { height: usize },
    #[error("number of frames must be at least {}, got {num_frames}", MIN_NUM_FRAMES)]
    TooFewFrames { num_frames: usize },
    #[error("{num_frames} frames of {width}x{height} pixels overflow the address space")]
    TooLarge {
        width: usize,
        height: usize,
        num_frames: usize,
    },
}

/// Validated dimensions of an animation: every frame is `width` x `height`
/// pixels and there are `num_frames` of them.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct FrameGeometry {
    width: usize,
    height: usize,
    num_frames: usize,
}

impl FrameGeometry {
    pub fn new(width: usize, height: usize, num_frames: usize) -> Result<Self, FrameGeometryError> {
        if width < MIN_FRAME_WIDTH {
            return Err(FrameGeometryError::WidthTooSmall { width });
        }
        if height < MIN_FRAME_HEIGHT {
            return Err(FrameGeometryError::HeightTooSmall { height });
        }
        if num_frames < MIN_NUM_FRAMES {
            return Err(FrameGeometryError::TooFewFrames { num_frames });
        }

        let fits = width
            .checked_mul(height)
            .and_then(|frame| frame.checked_mul(num_frames))
            .is_some_and(|total| total <= isize::MAX as usize);
        if !fits {
            return Err(FrameGeometryError::TooLarge {
                width,
                height,
                num_frames,
            });
        }

        Ok(Self {
            width,
            height,
            num_frames,
        })
    }

    #[must_use]
    pub fn width(&self) -> usize {
        self.width
    }

    #[must_use]
    pub fn height(&self) -> usize {
        self.height
    }

    #[must_use]
    pub fn num_frames(&self) -> usize {
        self.num_frames
    }

    #[must_use]
    pub fn aspect_ratio(&self) -> f64 {
        self.width as f64 / self.height as f64
    }

    #[must_use]
    pub fn pixels_per_frame(&self) -> usize {
        self.width * self.height
    }

    #[must_use]
    pub fn total_pixels(&self) -> usize {
        self.pixels_per_frame() * self.num_frames
    }

    /// Offset of `(frame, row, col)` in a buffer holding every frame back to back.
    #[must_use]
    pub fn offset(&self, frame: usize, row: usize, col: usize) -> usize {
        frame * self.pixels_per_frame() + row * self.width + col
    }

    #[must_use]
    pub fn pixel_rect(&self) -> PixelRect {
        PixelRect::from_size(self.width, self.height)
            .expect("validated geometry is never empty")
    }
}
