//! Camera state for viewing a bounded world

use super::World;

/// Smallest allowed magnification
pub const MIN_ZOOM: f32 = 0.2;

/// Largest allowed magnification
pub const MAX_ZOOM: f32 = 5.0;

/// Scroll offset and zoom handed to the renderer once per frame
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CameraTransform {
    pub scroll: [f32; 2],
    pub zoom: f32,
}

/// Camera view into a bounded world
///
/// `scroll` is the world coordinate of the top-left corner of the visible
/// area. The visible area spans `viewport / zoom` world units and never leaves
/// the world on an axis where the world is large enough to contain it; on a
/// smaller axis the scroll pins to zero.
#[derive(Debug, Clone)]
pub struct ViewportState {
    world: World,
    scroll: [f32; 2],
    zoom: f32,
    viewport: [f32; 2],
}

impl ViewportState {
    /// Create a camera centered on the world at zoom 1
    pub fn new(world: World, viewport_width: f32, viewport_height: f32) -> Self {
        let mut state = Self {
            world,
            scroll: [0.0, 0.0],
            zoom: 1.0,
            viewport: [sanitize_extent(viewport_width), sanitize_extent(viewport_height)],
        };
        let [cx, cy] = world.center();
        state.center_on(cx, cy);
        state
    }

    pub fn world(&self) -> &World {
        &self.world
    }

    pub fn scroll(&self) -> [f32; 2] {
        self.scroll
    }

    pub fn zoom(&self) -> f32 {
        self.zoom
    }

    /// Viewport size in screen pixels
    pub fn viewport_size(&self) -> [f32; 2] {
        self.viewport
    }

    pub fn transform(&self) -> CameraTransform {
        CameraTransform {
            scroll: self.scroll,
            zoom: self.zoom,
        }
    }

    /// Size of the visible area in world units
    pub fn visible_extent(&self) -> [f32; 2] {
        [self.viewport[0] / self.zoom, self.viewport[1] / self.zoom]
    }

    /// World-space rectangle currently on screen
    pub fn visible_bounds(&self) -> Bounds {
        let [w, h] = self.visible_extent();
        Bounds::new(self.scroll, [self.scroll[0] + w, self.scroll[1] + h])
    }

    /// Convert a screen position (pixels) into world coordinates
    pub fn screen_to_world(&self, pos: [f32; 2]) -> [f32; 2] {
        [
            self.scroll[0] + pos[0] / self.zoom,
            self.scroll[1] + pos[1] / self.zoom,
        ]
    }

    /// Pull the scroll offset back inside the world
    ///
    /// Pure function of the current scroll, zoom, viewport and world, so
    /// calling it repeatedly is a no-op.
    pub fn clamp(&mut self) {
        let [visible_w, visible_h] = self.visible_extent();
        let max_x = (self.world.width() - visible_w).max(0.0);
        let max_y = (self.world.height() - visible_h).max(0.0);
        self.scroll[0] = clamp_axis(self.scroll[0], max_x);
        self.scroll[1] = clamp_axis(self.scroll[1], max_y);
    }

    /// Set the zoom, limited to `[MIN_ZOOM, MAX_ZOOM]`, then re-clamp scroll
    ///
    /// Non-finite requests leave the zoom unchanged.
    pub fn set_zoom(&mut self, zoom: f32) {
        if zoom.is_finite() {
            self.zoom = zoom.clamp(MIN_ZOOM, MAX_ZOOM);
        }
        self.clamp();
    }

    /// Relative zoom change
    pub fn adjust_zoom(&mut self, delta: f32) {
        self.set_zoom(self.zoom + delta);
    }

    /// Move the camera by a world-space delta
    pub fn scroll_by(&mut self, dx: f32, dy: f32) {
        if dx.is_finite() {
            self.scroll[0] += dx;
        }
        if dy.is_finite() {
            self.scroll[1] += dy;
        }
        self.clamp();
    }

    /// Place the top-left corner of the view
    pub fn set_scroll(&mut self, x: f32, y: f32) {
        if x.is_finite() {
            self.scroll[0] = x;
        }
        if y.is_finite() {
            self.scroll[1] = y;
        }
        self.clamp();
    }

    /// Place the view so the given world point is in its middle (when bounds allow)
    pub fn center_on(&mut self, x: f32, y: f32) {
        let [w, h] = self.visible_extent();
        self.set_scroll(x - w / 2.0, y - h / 2.0);
    }

    /// Update the viewport size after the surface changed
    pub fn resize(&mut self, width: f32, height: f32) {
        self.viewport = [sanitize_extent(width), sanitize_extent(height)];
        self.clamp();
    }
}

fn clamp_axis(value: f32, max: f32) -> f32 {
    if value.is_nan() {
        return 0.0;
    }
    value.clamp(0.0, max)
}

// Zero-sized surfaces (minimized windows) still need a usable extent
pub(crate) fn sanitize_extent(value: f32) -> f32 {
    if value.is_finite() { value.max(1.0) } else { 1.0 }
}

/// Axis-aligned rectangle in world space
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    pub min: [f32; 2],
    pub max: [f32; 2],
}

impl Bounds {
    pub fn new(min: [f32; 2], max: [f32; 2]) -> Self {
        Self { min, max }
    }

    pub fn center(&self) -> [f32; 2] {
        [
            (self.min[0] + self.max[0]) / 2.0,
            (self.min[1] + self.max[1]) / 2.0,
        ]
    }

    /// True if `other` lies entirely inside this rectangle, with a small tolerance
    pub fn contains_bounds(&self, other: &Bounds) -> bool {
        const EPS: f32 = 1e-3;
        other.min[0] >= self.min[0] - EPS
            && other.min[1] >= self.min[1] - EPS
            && other.max[0] <= self.max[0] + EPS
            && other.max[1] <= self.max[1] + EPS
    }
}
