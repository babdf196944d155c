pub mod output_gate;
pub mod zoom_controller;
pub mod zoom_settings;
