//! Scene model
//!
//! Holds the world extent and the camera that views it.

pub mod camera;

use thiserror::Error;

pub use camera::{Bounds, CameraTransform, MAX_ZOOM, MIN_ZOOM, ViewportState};

/// Errors raised while building a world
#[derive(Debug, Error, PartialEq)]
pub enum WorldError {
    #[error("world dimensions must be positive and finite, got {width}x{height}")]
    InvalidDimensions { width: f32, height: f32 },
}

/// Scrollable world extent in world units
///
/// Immutable once created; the camera receives a copy at initialization.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct World {
    width: f32,
    height: f32,
}

impl World {
    /// Creates a world, rejecting non-positive or non-finite dimensions
    pub fn new(width: f32, height: f32) -> Result<Self, WorldError> {
        let valid = |v: f32| v.is_finite() && v > 0.0;
        if !valid(width) || !valid(height) {
            return Err(WorldError::InvalidDimensions { width, height });
        }
        Ok(Self { width, height })
    }

    /// Creates a world spanning `across` by `down` viewports
    ///
    /// A zero-sized viewport (window starting minimized) counts as 1 px.
    pub fn from_viewport(viewport: [f32; 2], across: f32, down: f32) -> Result<Self, WorldError> {
        let [width, height] = viewport.map(camera::sanitize_extent);
        Self::new(width * across, height * down)
    }

    pub fn width(&self) -> f32 {
        self.width
    }

    pub fn height(&self) -> f32 {
        self.height
    }

    /// Center point of the world
    pub fn center(&self) -> [f32; 2] {
        [self.width / 2.0, self.height / 2.0]
    }
}
