pub mod calculate_tiles_in_pixel_rect;
