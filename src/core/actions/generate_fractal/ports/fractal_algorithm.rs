use std::error::Error;

use crate::core::data::pixel_rect::PixelRect;
use crate::core::data::point::Point;

/// A per-pixel computation the frame executors can dispatch in any order.
pub trait FractalAlgorithm {
    type Success;
    type Failure: Error;

    fn compute(&self, pixel: Point) -> Result<Self::Success, Self::Failure>;

    /// Computes every pixel of `rect` in row-major order.
    fn compute_rect(&self, rect: PixelRect) -> Result<Vec<Self::Success>, Self::Failure> {
        let mut results = Vec::with_capacity(rect.size());
        for pixel in rect.points() {
            results.push(self.compute(pixel)?);
        }

        Ok(results)
    }
}
