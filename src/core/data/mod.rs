pub mod complex;
pub mod frame_buffer;
pub mod frame_geometry;
pub mod pixel_rect;
pub mod point;
pub mod viewport_window;
