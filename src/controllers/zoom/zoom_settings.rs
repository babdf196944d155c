use std::num::NonZeroUsize;
use std::path::PathBuf;

use crate::controllers::zoom::output_gate::OutputGate;
use crate::core::actions::generate_fractal::frame_grid_executor::ExecutionStrategy;
use crate::core::actions::render_animation::animation_driver::FrameOrder;
use crate::core::data::frame_geometry::FrameGeometry;
use crate::core::fractals::zoom::zoom_config::ZoomConfig;

pub const DEFAULT_OUTPUT_DIR: &str = "fractal_frames";

/// Everything a zoom run needs, fixed before rendering starts.
#[derive(Debug, Clone, PartialEq)]
pub struct ZoomSettings {
    pub geometry: FrameGeometry,
    pub zoom: ZoomConfig,
    pub strategy: ExecutionStrategy,
    pub order: FrameOrder,
    /// Size of a dedicated worker pool; rayon's global pool when `None`.
    pub threads: Option<NonZeroUsize>,
    pub output_dir: PathBuf,
    pub gate: OutputGate,
}

impl ZoomSettings {
    #[must_use]
    pub fn new(geometry: FrameGeometry) -> Self {
        Self {
            geometry,
            zoom: ZoomConfig::default(),
            strategy: ExecutionStrategy::default(),
            order: FrameOrder::default(),
            threads: None,
            output_dir: PathBuf::from(DEFAULT_OUTPUT_DIR),
            gate: OutputGate::default(),
        }
    }
}
