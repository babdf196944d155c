use thiserror::Error;

use crate::core::data::pixel_rect::PixelRect;
use crate::core::data::point::Point;

#[derive(Debug, Copy, Clone, PartialEq, Eq, Error)]
pub enum ZoomAlgorithmError {
    #[error(
        "pixel (x: {}, y: {}) is outside the {}x{} frame",
        .pixel.x, .pixel.y, .grid.width(), .grid.height()
    )]
    PixelOutsideFrame { pixel: Point, grid: PixelRect },
}
