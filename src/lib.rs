mod controllers;
mod core;
mod presenters;
mod storage;

pub use crate::controllers::ports::frame_presenter::{FramePresenterPort, PresentError};
pub use crate::controllers::zoom::output_gate::{MAX_OUTPUT_FRAMES, MAX_OUTPUT_WIDTH, OutputGate};
pub use crate::controllers::zoom::zoom_controller::{
    OutputOutcome, RenderReport, ZoomController, ZoomControllerError,
};
pub use crate::controllers::zoom::zoom_settings::{DEFAULT_OUTPUT_DIR, ZoomSettings};
pub use crate::core::actions::generate_fractal::frame_grid_executor::{
    DEFAULT_TILE_SIZE, ExecutionStrategy, FrameFault, FrameGridExecutor,
};
pub use crate::core::actions::generate_fractal::ports::fractal_algorithm::FractalAlgorithm;
pub use crate::core::actions::render_animation::animation_driver::{
    AnimationDriver, FrameOrder, ZoomFrameFactory,
};
pub use crate::core::data::complex::Complex;
pub use crate::core::data::frame_buffer::{
    FrameBuffer, FrameBufferError, FrameSlot, FrameStatus, FrameView,
};
pub use crate::core::data::frame_geometry::{FrameGeometry, FrameGeometryError};
pub use crate::core::data::pixel_rect::{PixelRect, PixelRectError};
pub use crate::core::data::point::Point;
pub use crate::core::data::viewport_window::ViewportWindow;
pub use crate::core::fractals::zoom::algorithm::ZoomFrameAlgorithm;
pub use crate::core::fractals::zoom::errors::ZoomAlgorithmError;
pub use crate::core::fractals::zoom::escape::{
    ESCAPE_RADIUS_SQUARED, EscapeDepth, MAX_DEPTH, depth_to_byte, escape_depth,
};
pub use crate::core::fractals::zoom::viewport::ViewportGenerator;
pub use crate::core::fractals::zoom::zoom_config::{
    DEFAULT_BASE_DELTA, DEFAULT_CENTER, ZOOM_DECAY, ZoomConfig,
};
pub use crate::presenters::file::bmp::BmpFilePresenter;
pub use crate::presenters::file::pgm::PgmFilePresenter;
pub use crate::storage::frame_files::{FRAME_NUMBER_OFFSET, WrittenFrames, frame_file_name, write_frames};
