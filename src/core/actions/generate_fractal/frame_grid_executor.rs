use std::any::Any;
use std::num::NonZeroUsize;
use std::panic::{self, AssertUnwindSafe};

use thiserror::Error;
use tracing::{debug, error};

use crate::core::actions::generate_fractal::fill_frame_serial::fill_frame_serial;
use crate::core::actions::generate_fractal::fill_frame_tiled::fill_frame_tiled;
use crate::core::actions::generate_fractal::ports::fractal_algorithm::FractalAlgorithm;
use crate::core::data::frame_buffer::{FrameBuffer, FrameBufferError, FrameSlot, FrameStatus};
use crate::core::data::pixel_rect::PixelRect;
use crate::core::data::viewport_window::ViewportWindow;
use crate::core::fractals::zoom::algorithm::ZoomFrameAlgorithm;
use crate::core::fractals::zoom::escape::EscapeDepth;
use crate::core::util::calculate_tiles_in_pixel_rect::calculate_tiles_in_pixel_rect;

pub const DEFAULT_TILE_SIZE: NonZeroUsize = NonZeroUsize::new(16).unwrap();

/// How a frame's pixels are spread over workers.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum ExecutionStrategy {
    /// Every pixel on the calling thread.
    Serial,
    /// Rectangular tiles dispatched to rayon's pool.
    Tiled {
        tile_width: NonZeroUsize,
        tile_height: NonZeroUsize,
    },
}

impl Default for ExecutionStrategy {
    fn default() -> Self {
        Self::Tiled {
            tile_width: DEFAULT_TILE_SIZE,
            tile_height: DEFAULT_TILE_SIZE,
        }
    }
}

impl ExecutionStrategy {
    #[must_use]
    pub fn square_tiles(tile_size: NonZeroUsize) -> Self {
        Self::Tiled {
            tile_width: tile_size,
            tile_height: tile_size,
        }
    }
}

/// Why a frame's dispatch did not complete.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FrameFault {
    #[error("worker panicked while rendering frame {frame}: {message}")]
    Panicked { frame: usize, message: String },
    #[error("evaluation failed for frame {frame}: {message}")]
    Evaluation { frame: usize, message: String },
    #[error("frame {frame} region holds {actual} bytes but the grid has {expected} pixels")]
    RegionMismatch {
        frame: usize,
        expected: usize,
        actual: usize,
    },
}

/// Renders whole frames into their region of a [`FrameBuffer`].
///
/// Each call returns only after every worker for the frame has finished. A
/// dispatch that fails is logged, its region is zeroed and the frame is marked
/// [`FrameStatus::Faulted`]; the caller carries on with the next frame.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub struct FrameGridExecutor {
    strategy: ExecutionStrategy,
}

impl FrameGridExecutor {
    #[must_use]
    pub fn new(strategy: ExecutionStrategy) -> Self {
        Self { strategy }
    }

    /// Evaluates the escape depth of every pixel of `frame` through `window`
    /// and stores it at the frame's offset in `buffer`.
    pub fn fill_frame(
        &self,
        buffer: &mut FrameBuffer,
        frame: usize,
        window: &ViewportWindow,
    ) -> Result<FrameStatus, FrameBufferError> {
        let grid = buffer.geometry().pixel_rect();
        let slot = buffer.frame_mut(frame)?;

        Ok(self.fill_slot(slot, grid, &ZoomFrameAlgorithm::new(grid, *window)))
    }

    /// Runs `algorithm` over `grid` into `slot` and records the outcome in the
    /// slot's status.
    pub fn fill_slot<Alg>(&self, slot: FrameSlot<'_>, grid: PixelRect, algorithm: &Alg) -> FrameStatus
    where
        Alg: FractalAlgorithm<Success = EscapeDepth> + Sync,
        Alg::Failure: Send,
    {
        let FrameSlot {
            index,
            pixels,
            status,
        } = slot;

        *status = match self.dispatch(index, pixels, grid, algorithm) {
            Ok(()) => {
                debug!(frame = index, "frame rendered");
                FrameStatus::Rendered
            }
            Err(fault) => {
                error!(frame = index, %fault, "frame dispatch faulted, zeroing its region");
                pixels.fill(0);
                FrameStatus::Faulted
            }
        };

        *status
    }

    /// Dispatches one frame and waits for it. Worker panics are caught here
    /// and reported as [`FrameFault::Panicked`].
    pub fn dispatch<Alg>(
        &self,
        frame: usize,
        pixels: &mut [u8],
        grid: PixelRect,
        algorithm: &Alg,
    ) -> Result<(), FrameFault>
    where
        Alg: FractalAlgorithm<Success = EscapeDepth> + Sync,
        Alg::Failure: Send,
    {
        if pixels.len() != grid.size() {
            return Err(FrameFault::RegionMismatch {
                frame,
                expected: grid.size(),
                actual: pixels.len(),
            });
        }

        let outcome = panic::catch_unwind(AssertUnwindSafe(|| match self.strategy {
            ExecutionStrategy::Serial => fill_frame_serial(pixels, grid, algorithm),
            ExecutionStrategy::Tiled {
                tile_width,
                tile_height,
            } => {
                let tiles = calculate_tiles_in_pixel_rect(grid, tile_width, tile_height);
                fill_frame_tiled(pixels, grid, &tiles, algorithm)
            }
        }));

        match outcome {
            Ok(Ok(())) => Ok(()),
            Ok(Err(failure)) => Err(FrameFault::Evaluation {
                frame,
                message: failure.to_string(),
            }),
            Err(payload) => Err(FrameFault::Panicked {
                frame,
                message: panic_message(payload.as_ref()),
            }),
        }
    }
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(message) = payload.downcast_ref::<&str>() {
        (*message).to_string()
    } else if let Some(message) = payload.downcast_ref::<String>() {
        message.clone()
    } else {
        "unknown panic payload".to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::data::complex::Complex;
    use crate::core::data::frame_geometry::FrameGeometry;
    use crate::core::data::point::Point;
    use crate::core::fractals::zoom::escape::MAX_DEPTH;
    use crate::core::fractals::zoom::viewport::ViewportGenerator;
    use crate::core::fractals::zoom::zoom_config::ZoomConfig;

    #[derive(Debug, Error)]
    #[error("StubError")]
    struct StubError;

    struct StubFailureAlgorithm;

    impl FractalAlgorithm for StubFailureAlgorithm {
        type Success = EscapeDepth;
        type Failure = StubError;

        fn compute(&self, _: Point) -> Result<Self::Success, Self::Failure> {
            Err(StubError)
        }
    }

    struct StubPanicAlgorithm;

    impl FractalAlgorithm for StubPanicAlgorithm {
        type Success = EscapeDepth;
        type Failure = StubError;

        fn compute(&self, pixel: Point) -> Result<Self::Success, Self::Failure> {
            if pixel.x == 3 && pixel.y == 4 {
                panic!("device lost");
            }
            Ok(1)
        }
    }

    fn buffer(width: usize, height: usize, num_frames: usize) -> FrameBuffer {
        FrameBuffer::new(FrameGeometry::new(width, height, num_frames).unwrap()).unwrap()
    }

    fn strategies() -> Vec<ExecutionStrategy> {
        vec![
            ExecutionStrategy::Serial,
            ExecutionStrategy::default(),
            ExecutionStrategy::square_tiles(NonZeroUsize::new(3).unwrap()),
        ]
    }

    #[test]
    fn test_fill_frame_writes_only_its_frame() {
        let generator = ViewportGenerator::new(ZoomConfig::default(), FrameGeometry::new(20, 10, 1).unwrap());
        let executor = FrameGridExecutor::default();
        let mut buffer = buffer(20, 10, 3);
        buffer.frame_mut(0).unwrap().pixels.fill(0xAA);
        buffer.frame_mut(2).unwrap().pixels.fill(0xBB);

        let status = executor.fill_frame(&mut buffer, 1, &generator.window(1)).unwrap();

        assert_eq!(status, FrameStatus::Rendered);
        assert!(buffer.frame(0).unwrap().pixels.iter().all(|b| *b == 0xAA));
        assert!(buffer.frame(2).unwrap().pixels.iter().all(|b| *b == 0xBB));
        assert_eq!(buffer.statuses()[0], FrameStatus::Pending);
        assert_eq!(buffer.statuses()[1], FrameStatus::Rendered);
    }

    #[test]
    fn test_fill_frame_stores_escape_depth_at_offset() {
        let config = ZoomConfig::default().with_center(Complex::new(3.0, 3.0));
        let generator = ViewportGenerator::new(config, FrameGeometry::new(10, 10, 1).unwrap());
        let executor = FrameGridExecutor::default();
        let mut buffer = buffer(10, 10, 1);

        executor.fill_frame(&mut buffer, 0, &generator.window(0)).unwrap();

        // Every point starts outside the escape radius and keeps MAX_DEPTH,
        // which is stored as its low byte.
        assert!(buffer.data().iter().all(|b| *b == (MAX_DEPTH & 0xff) as u8));
    }

    #[test]
    fn test_all_strategies_agree() {
        let generator = ViewportGenerator::new(ZoomConfig::default(), FrameGeometry::new(37, 23, 1).unwrap());
        let window = generator.window(4);

        let outputs: Vec<Vec<u8>> = strategies()
            .into_iter()
            .map(|strategy| {
                let mut buffer = buffer(37, 23, 1);
                FrameGridExecutor::new(strategy)
                    .fill_frame(&mut buffer, 0, &window)
                    .unwrap();
                buffer.data().to_vec()
            })
            .collect();

        assert!(outputs.windows(2).all(|pair| pair[0] == pair[1]));
    }

    #[test]
    fn test_fill_frame_is_idempotent() {
        let generator = ViewportGenerator::new(ZoomConfig::default(), FrameGeometry::new(40, 30, 1).unwrap());
        let executor = FrameGridExecutor::default();
        let window = generator.window(9);
        let mut first = buffer(40, 30, 1);
        let mut second = buffer(40, 30, 1);

        executor.fill_frame(&mut first, 0, &window).unwrap();
        executor.fill_frame(&mut second, 0, &window).unwrap();

        assert_eq!(first.data(), second.data());
    }

    #[test]
    fn test_fill_frame_out_of_range() {
        let generator = ViewportGenerator::new(ZoomConfig::default(), FrameGeometry::new(10, 10, 1).unwrap());
        let mut buffer = buffer(10, 10, 1);

        let result = FrameGridExecutor::default().fill_frame(&mut buffer, 1, &generator.window(1));

        assert_eq!(
            result,
            Err(FrameBufferError::FrameOutOfRange {
                frame: 1,
                num_frames: 1
            })
        );
    }

    #[test]
    fn test_evaluation_failure_marks_frame_faulted_and_zeroed() {
        for strategy in strategies() {
            let mut buffer = buffer(10, 10, 1);
            let grid = buffer.geometry().pixel_rect();
            let slot = buffer.frame_mut(0).unwrap();
            slot.pixels.fill(0x55);

            let status = FrameGridExecutor::new(strategy).fill_slot(slot, grid, &StubFailureAlgorithm);

            assert_eq!(status, FrameStatus::Faulted);
            assert!(buffer.data().iter().all(|b| *b == 0));
            assert_eq!(buffer.statuses(), &[FrameStatus::Faulted]);
        }
    }

    #[test]
    fn test_worker_panic_is_caught_as_fault() {
        for strategy in strategies() {
            let mut buffer = buffer(10, 10, 1);
            let grid = buffer.geometry().pixel_rect();
            let slot = buffer.frame_mut(0).unwrap();

            let result =
                FrameGridExecutor::new(strategy).dispatch(0, slot.pixels, grid, &StubPanicAlgorithm);

            assert_eq!(
                result,
                Err(FrameFault::Panicked {
                    frame: 0,
                    message: "device lost".to_string()
                })
            );
        }
    }

    #[test]
    fn test_region_mismatch_is_a_fault() {
        let grid = PixelRect::from_size(10, 10).unwrap();
        let mut pixels = vec![0; 99];

        let result = FrameGridExecutor::default().dispatch(
            2,
            &mut pixels,
            grid,
            &StubFailureAlgorithm,
        );

        assert_eq!(
            result,
            Err(FrameFault::RegionMismatch {
                frame: 2,
                expected: 100,
                actual: 99
            })
        );
    }

    #[test]
    fn test_fault_messages() {
        let fault = FrameFault::Evaluation {
            frame: 3,
            message: "StubError".to_string(),
        };

        assert_eq!(fault.to_string(), "evaluation failed for frame 3: StubError");
    }
}
