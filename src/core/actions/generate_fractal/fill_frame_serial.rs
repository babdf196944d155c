use crate::core::actions::generate_fractal::ports::fractal_algorithm::FractalAlgorithm;
use crate::core::data::pixel_rect::PixelRect;
use crate::core::fractals::zoom::escape::{EscapeDepth, depth_to_byte};

/// Fills `pixels` one pixel at a time on the calling thread. `grid` must be
/// anchored at the origin and `pixels` must hold exactly one byte per pixel.
pub fn fill_frame_serial<Alg>(
    pixels: &mut [u8],
    grid: PixelRect,
    algorithm: &Alg,
) -> Result<(), Alg::Failure>
where
    Alg: FractalAlgorithm<Success = EscapeDepth>,
{
    debug_assert_eq!(pixels.len(), grid.size());

    for (byte, pixel) in pixels.iter_mut().zip(grid.points()) {
        *byte = depth_to_byte(algorithm.compute(pixel)?);
    }

    Ok(())
}
