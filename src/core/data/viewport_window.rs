use crate::core::data::complex::Complex;
use crate::core::data::point::Point;

/// The region of the complex plane a single frame shows, expressed as the
/// plane coordinate of pixel `(0, 0)` plus the plane distance between
/// neighbouring pixels along each axis.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct ViewportWindow {
    pub frame: usize,
    pub origin_x: f64,
    pub origin_y: f64,
    pub pixel_delta_x: f64,
    pub pixel_delta_y: f64,
}

impl ViewportWindow {
    #[must_use]
    pub fn point_at(&self, pixel: Point) -> Complex {
        Complex {
            real: self.origin_x + pixel.x as f64 * self.pixel_delta_x,
            imag: self.origin_y + pixel.y as f64 * self.pixel_delta_y,
        }
    }
}
