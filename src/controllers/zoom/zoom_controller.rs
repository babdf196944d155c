use std::time::{Duration, Instant};

use thiserror::Error;
use tracing::info;

use crate::controllers::ports::frame_presenter::{FramePresenterPort, PresentError};
use crate::controllers::zoom::zoom_settings::ZoomSettings;
use crate::core::actions::generate_fractal::frame_grid_executor::FrameGridExecutor;
use crate::core::actions::generate_fractal::ports::fractal_algorithm::FractalAlgorithm;
use crate::core::actions::render_animation::animation_driver::AnimationDriver;
use crate::core::data::frame_buffer::{FrameBuffer, FrameBufferError, FrameStatus};
use crate::core::data::pixel_rect::PixelRect;
use crate::core::data::viewport_window::ViewportWindow;
use crate::core::fractals::zoom::algorithm::ZoomFrameAlgorithm;
use crate::core::fractals::zoom::escape::EscapeDepth;
use crate::storage::frame_files::{WrittenFrames, write_frames};

#[derive(Debug, Error)]
pub enum ZoomControllerError {
    #[error(transparent)]
    FrameBuffer(#[from] FrameBufferError),
    #[error("failed to build a pool of {threads} worker threads: {source}")]
    ThreadPool {
        threads: usize,
        source: rayon::ThreadPoolBuildError,
    },
    #[error(transparent)]
    Present(#[from] PresentError),
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct RenderReport {
    pub rendered: usize,
    pub faulted: usize,
    pub elapsed: Duration,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OutputOutcome {
    Written(WrittenFrames),
    /// The run was too large to save; see [`OutputGate`](crate::controllers::zoom::output_gate::OutputGate).
    SkippedBySizeLimit,
    NothingRendered,
}

/// Renders the zoom described by its settings and hands the frames to a presenter.
pub struct ZoomController<P: FramePresenterPort> {
    presenter: P,
    settings: ZoomSettings,
    buffer: Option<FrameBuffer>,
}

impl<P: FramePresenterPort> ZoomController<P> {
    pub fn new(presenter: P, settings: ZoomSettings) -> Self {
        Self {
            presenter,
            settings,
            buffer: None,
        }
    }

    pub fn settings(&self) -> &ZoomSettings {
        &self.settings
    }

    pub fn buffer(&self) -> Option<&FrameBuffer> {
        self.buffer.as_ref()
    }

    pub fn generate(&mut self) -> Result<RenderReport, ZoomControllerError> {
        self.generate_with(ZoomFrameAlgorithm::new)
    }

    /// Renders every frame with the algorithm `make_algorithm` builds for it.
    pub fn generate_with<F, Alg>(&mut self, make_algorithm: F) -> Result<RenderReport, ZoomControllerError>
    where
        F: Fn(PixelRect, ViewportWindow) -> Alg + Sync,
        Alg: FractalAlgorithm<Success = EscapeDepth> + Sync,
        Alg::Failure: Send,
    {
        let geometry = self.settings.geometry;
        let driver = AnimationDriver::with_algorithm(
            self.settings.zoom,
            FrameGridExecutor::new(self.settings.strategy),
            self.settings.order,
            make_algorithm,
        );

        info!(
            frames = geometry.num_frames(),
            width = geometry.width(),
            height = geometry.height(),
            "rendering fractal zoom"
        );

        let start = Instant::now();
        let buffer = match self.settings.threads {
            Some(threads) => rayon::ThreadPoolBuilder::new()
                .num_threads(threads.get())
                .build()
                .map_err(|source| ZoomControllerError::ThreadPool {
                    threads: threads.get(),
                    source,
                })?
                .install(|| driver.run(geometry))?,
            None => driver.run(geometry)?,
        };
        let elapsed = start.elapsed();

        let report = RenderReport {
            rendered: buffer.count_with_status(FrameStatus::Rendered),
            faulted: buffer.count_with_status(FrameStatus::Faulted),
            elapsed,
        };
        info!(
            rendered = report.rendered,
            faulted = report.faulted,
            "compute time: {:.4} s",
            elapsed.as_secs_f64()
        );

        self.buffer = Some(buffer);
        Ok(report)
    }

    pub fn write(&self) -> Result<OutputOutcome, ZoomControllerError> {
        let Some(buffer) = &self.buffer else {
            return Ok(OutputOutcome::NothingRendered);
        };

        if !self.settings.gate.allows(buffer.geometry()) {
            info!(
                max_width = self.settings.gate.max_width,
                max_frames = self.settings.gate.max_frames,
                "run exceeds the output size limit, no files written"
            );
            return Ok(OutputOutcome::SkippedBySizeLimit);
        }

        let written = write_frames(buffer, &self.presenter, &self.settings.output_dir)?;
        info!(
            files = written.paths.len(),
            skipped = written.skipped.len(),
            dir = %self.settings.output_dir.display(),
            "frames written"
        );

        Ok(OutputOutcome::Written(written))
    }
}
