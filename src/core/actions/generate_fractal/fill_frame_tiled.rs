use rayon::prelude::*;

use crate::core::actions::generate_fractal::ports::fractal_algorithm::FractalAlgorithm;
use crate::core::data::pixel_rect::PixelRect;
use crate::core::fractals::zoom::escape::{EscapeDepth, depth_to_byte};

/// Computes every tile on rayon's pool, then copies the finished tiles into
/// `pixels`. The copy only starts once every tile has completed, and the first
/// failing tile aborts the whole frame.
///
/// `tiles` must cover `grid` exactly once; `grid` must be anchored at the origin.
pub fn fill_frame_tiled<Alg>(
    pixels: &mut [u8],
    grid: PixelRect,
    tiles: &[PixelRect],
    algorithm: &Alg,
) -> Result<(), Alg::Failure>
where
    Alg: FractalAlgorithm<Success = EscapeDepth> + Sync,
    Alg::Failure: Send,
{
    debug_assert_eq!(pixels.len(), grid.size());

    let computed: Vec<(PixelRect, Vec<EscapeDepth>)> = tiles
        .par_iter()
        .map(|tile| algorithm.compute_rect(*tile).map(|depths| (*tile, depths)))
        .collect::<Result<_, _>>()?;

    let width = grid.width();
    for (tile, depths) in computed {
        let left = tile.top_left().x;
        for (row, tile_row) in depths.chunks_exact(tile.width()).enumerate() {
            let start = (tile.top_left().y + row) * width + left;
            let dst = &mut pixels[start..start + tile.width()];
            for (byte, depth) in dst.iter_mut().zip(tile_row) {
                *byte = depth_to_byte(*depth);
            }
        }
    }

    Ok(())
}
