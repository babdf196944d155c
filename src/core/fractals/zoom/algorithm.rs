use crate::core::actions::generate_fractal::ports::fractal_algorithm::FractalAlgorithm;
use crate::core::data::pixel_rect::PixelRect;
use crate::core::data::point::Point;
use crate::core::data::viewport_window::ViewportWindow;
use crate::core::fractals::zoom::errors::ZoomAlgorithmError;
use crate::core::fractals::zoom::escape::{EscapeDepth, escape_depth};

/// Escape-time evaluation for one frame of the zoom: maps each pixel of the
/// frame grid through the frame's viewport and measures its escape depth.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct ZoomFrameAlgorithm {
    grid: PixelRect,
    window: ViewportWindow,
}

impl ZoomFrameAlgorithm {
    #[must_use]
    pub fn new(grid: PixelRect, window: ViewportWindow) -> Self {
        Self { grid, window }
    }
}

impl FractalAlgorithm for ZoomFrameAlgorithm {
    type Success = EscapeDepth;
    type Failure = ZoomAlgorithmError;

    fn compute(&self, pixel: Point) -> Result<Self::Success, Self::Failure> {
        if !self.grid.contains_point(pixel) {
            return Err(ZoomAlgorithmError::PixelOutsideFrame {
                pixel,
                grid: self.grid,
            });
        }

        Ok(escape_depth(self.window.point_at(pixel)))
    }
}
