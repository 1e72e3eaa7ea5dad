//! Field Camera
//!
//! Pan and zoom controller for a large bounded 2D scene, driven by keyboard,
//! mouse drag, wheel and two-finger pinch. Built on winit.

/// Host application - windowing, configuration and input handling
pub mod app;

/// Build-time information (timestamp, target, compiler)
pub mod build_info;

/// Startup self-tests
pub mod health;

/// World extent and camera state
pub mod sim;
