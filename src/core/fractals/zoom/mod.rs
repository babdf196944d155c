pub mod algorithm;
pub mod errors;
pub mod escape;
pub mod viewport;
pub mod zoom_config;
