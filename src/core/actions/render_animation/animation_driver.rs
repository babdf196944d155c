use rayon::prelude::*;
use tracing::info;

use crate::core::actions::generate_fractal::frame_grid_executor::FrameGridExecutor;
use crate::core::actions::generate_fractal::ports::fractal_algorithm::FractalAlgorithm;
use crate::core::data::frame_buffer::{FrameBuffer, FrameBufferError, FrameSlot, FrameStatus};
use crate::core::data::frame_geometry::FrameGeometry;
use crate::core::data::pixel_rect::PixelRect;
use crate::core::data::viewport_window::ViewportWindow;
use crate::core::fractals::zoom::algorithm::ZoomFrameAlgorithm;
use crate::core::fractals::zoom::escape::EscapeDepth;
use crate::core::fractals::zoom::viewport::ViewportGenerator;
use crate::core::fractals::zoom::zoom_config::ZoomConfig;

/// Order in which the driver visits frames.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub enum FrameOrder {
    /// One frame at a time in increasing order, each fully finished before
    /// the next starts.
    #[default]
    Sequential,
    /// Frames are filled concurrently. Frames never read each other's
    /// output, so the buffer contents are identical to the sequential order.
    Parallel,
}

/// Builds the algorithm that evaluates one frame from the frame grid and
/// that frame's window.
pub type ZoomFrameFactory = fn(PixelRect, ViewportWindow) -> ZoomFrameAlgorithm;

/// Renders every frame of the zoom into one buffer.
///
/// A frame whose dispatch faults is zeroed and marked
/// [`FrameStatus::Faulted`]; the remaining frames are still rendered.
#[derive(Copy, Clone)]
pub struct AnimationDriver<F = ZoomFrameFactory> {
    zoom: ZoomConfig,
    executor: FrameGridExecutor,
    order: FrameOrder,
    make_algorithm: F,
}

impl AnimationDriver {
    #[must_use]
    pub fn new(zoom: ZoomConfig, executor: FrameGridExecutor, order: FrameOrder) -> Self {
        Self::with_algorithm(zoom, executor, order, ZoomFrameAlgorithm::new)
    }
}

impl<F, Alg> AnimationDriver<F>
where
    F: Fn(PixelRect, ViewportWindow) -> Alg + Sync,
    Alg: FractalAlgorithm<Success = EscapeDepth> + Sync,
    Alg::Failure: Send,
{
    /// Like [`AnimationDriver::new`], but each frame is evaluated by the
    /// algorithm `make_algorithm` returns for it.
    #[must_use]
    pub fn with_algorithm(
        zoom: ZoomConfig,
        executor: FrameGridExecutor,
        order: FrameOrder,
        make_algorithm: F,
    ) -> Self {
        Self {
            zoom,
            executor,
            order,
            make_algorithm,
        }
    }

    #[tracing::instrument(skip(self), fields(order = ?self.order))]
    pub fn run(&self, geometry: FrameGeometry) -> Result<FrameBuffer, FrameBufferError> {
        let generator = ViewportGenerator::new(self.zoom, geometry);
        let grid = geometry.pixel_rect();
        let mut buffer = FrameBuffer::new(geometry)?;

        let render = |slot: FrameSlot<'_>| {
            let algorithm = (self.make_algorithm)(grid, generator.window(slot.index));
            self.executor.fill_slot(slot, grid, &algorithm);
        };
        let slots = buffer.frame_slots_mut();
        match self.order {
            FrameOrder::Sequential => slots.into_iter().for_each(&render),
            FrameOrder::Parallel => slots.into_par_iter().for_each(&render),
        }

        info!(
            rendered = buffer.count_with_status(FrameStatus::Rendered),
            faulted = buffer.count_with_status(FrameStatus::Faulted),
            "all frames dispatched"
        );

        Ok(buffer)
    }
}
