use crate::core::data::frame_geometry::FrameGeometry;
use crate::core::data::viewport_window::ViewportWindow;
use crate::core::fractals::zoom::zoom_config::ZoomConfig;

/// Derives the plane window shown by each frame of the zoom. Every window is
/// a pure function of the frame index, so frames can be generated in any order.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct ViewportGenerator {
    config: ZoomConfig,
    geometry: FrameGeometry,
}

impl ViewportGenerator {
    #[must_use]
    pub fn new(config: ZoomConfig, geometry: FrameGeometry) -> Self {
        Self { config, geometry }
    }

    #[must_use]
    pub fn window(&self, frame: usize) -> ViewportWindow {
        let delta = self.config.delta(frame);
        let aspect_ratio = self.geometry.aspect_ratio();

        ViewportWindow {
            frame,
            origin_x: self.config.center.real - delta * aspect_ratio,
            origin_y: self.config.center.imag - delta,
            pixel_delta_x: 2.0 * delta * aspect_ratio / self.geometry.width() as f64,
            pixel_delta_y: 2.0 * delta / self.geometry.height() as f64,
        }
    }
}
