pub mod animation_driver;
