//! Host application
//!
//! Handles windowing, configuration and user input.

pub mod config;
pub mod input;
mod runner;
mod window;

pub use config::{AppConfig, CameraConfig, InputConfig, LogConfig, WindowConfig, WorldConfig};
pub use runner::App;
pub use window::{camera_title, window_attributes_from_config};
