use std::num::NonZeroUsize;

use crate::core::data::pixel_rect::PixelRect;
use crate::core::data::point::Point;

/// Splits `pixel_rect` into row-major tiles of at most `tile_width` x
/// `tile_height` pixels. Tiles on the right and bottom edges are clipped, so
/// every pixel belongs to exactly one tile.
pub fn calculate_tiles_in_pixel_rect(
    pixel_rect: PixelRect,
    tile_width: NonZeroUsize,
    tile_height: NonZeroUsize,
) -> Vec<PixelRect> {
    let Point { x: left, y: top } = pixel_rect.top_left();
    let Point { x: right, y: bottom } = pixel_rect.bottom_right();

    (top..=bottom)
        .step_by(tile_height.get())
        .flat_map(|tile_top| {
            (left..=right).step_by(tile_width.get()).map(move |tile_left| {
                let tile_right = (tile_left + tile_width.get() - 1).min(right);
                let tile_bottom = (tile_top + tile_height.get() - 1).min(bottom);

                PixelRect::new(
                    Point {
                        x: tile_left,
                        y: tile_top,
                    },
                    Point {
                        x: tile_right,
                        y: tile_bottom,
                    },
                )
                .expect("tile corners are clamped inside the parent rect")
            })
        })
        .collect()
}
