pub mod bmp;
pub mod pgm;
