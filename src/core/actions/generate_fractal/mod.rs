pub mod fill_frame_serial;
pub mod fill_frame_tiled;
pub mod frame_grid_executor;
pub mod ports;
