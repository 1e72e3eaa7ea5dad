//! Camera input handler
//!
//! Turns keyboard, pointer drag, wheel and pinch input into scroll and zoom
//! changes on a [`ViewportState`]. Discrete events apply immediately; held
//! keys and pinch gestures are polled once per frame.

use std::any::Any;

use bitflags::bitflags;
use thiserror::Error;
use tracing::{debug, info, trace};

use super::collector::InputSource;
use super::events::{InputEvent, KeyCode};
use super::handler::InputHandler;
use super::pinch::PinchTracker;
use super::state::{InputState, PointerTable};
use crate::sim::{ViewportState, World};

/// Pan speed in world units per second at zoom 1
pub const BASE_SPEED: f32 = 800.0;

/// Zoom change per wheel notch
pub const WHEEL_ZOOM_STEP: f32 = 0.1;

/// Zoom change per pixel of pinch separation change
pub const PINCH_SENSITIVITY: f32 = 0.004;

/// Name used to look the controller up in an `InputContext`
pub const CAMERA_HANDLER_NAME: &str = "camera";

/// Errors raised while setting up the controller
#[derive(Debug, Error, PartialEq)]
pub enum ControllerError {
    #[error("keyboard input is unavailable")]
    KeyboardUnavailable,
}

/// Rejected tuning values
#[derive(Debug, Error, PartialEq)]
pub enum SettingsError {
    #[error("{name} must be positive and finite, got {value}")]
    NotPositive { name: &'static str, value: f32 },
}

/// Tuning for the controller
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ControllerSettings {
    pub base_speed: f32,
    pub wheel_step: f32,
    pub pinch_sensitivity: f32,
}

impl ControllerSettings {
    /// Checks every value is positive and finite
    pub fn validate(self) -> Result<Self, SettingsError> {
        for (name, value) in [
            ("base_speed", self.base_speed),
            ("wheel_step", self.wheel_step),
            ("pinch_sensitivity", self.pinch_sensitivity),
        ] {
            if !value.is_finite() || value <= 0.0 {
                return Err(SettingsError::NotPositive { name, value });
            }
        }
        Ok(self)
    }
}

impl Default for ControllerSettings {
    fn default() -> Self {
        Self {
            base_speed: BASE_SPEED,
            wheel_step: WHEEL_ZOOM_STEP,
            pinch_sensitivity: PINCH_SENSITIVITY,
        }
    }
}

bitflags! {
    /// Pan directions currently held
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct Directions: u8 {
        const UP = 1;
        const DOWN = 1 << 1;
        const LEFT = 1 << 2;
        const RIGHT = 1 << 3;
    }
}

impl Directions {
    /// WASD mapping
    pub fn from_key(key: KeyCode) -> Option<Self> {
        match key {
            KeyCode::W => Some(Self::UP),
            KeyCode::S => Some(Self::DOWN),
            KeyCode::A => Some(Self::LEFT),
            KeyCode::D => Some(Self::RIGHT),
            KeyCode::Other => None,
        }
    }

    /// Unit movement per axis; opposing directions cancel
    pub fn axis(self) -> [f32; 2] {
        let signed = |neg: Self, pos: Self| {
            f32::from(u8::from(self.contains(pos))) - f32::from(u8::from(self.contains(neg)))
        };
        [signed(Self::LEFT, Self::RIGHT), signed(Self::UP, Self::DOWN)]
    }
}

/// Pointer drag state
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DragState {
    Idle,
    /// `last` is the pointer position at the previous move
    Dragging { last: [f32; 2] },
}

/// Maps every input source onto one camera
#[derive(Debug, Clone)]
pub struct CameraController {
    viewport: ViewportState,
    settings: ControllerSettings,
    held: Directions,
    drag: DragState,
    pinch: PinchTracker,
}

impl CameraController {
    /// Create the controller centered on `world` at zoom 1
    ///
    /// Fails if the input source has no keyboard.
    pub fn init(
        world: World,
        viewport: [f32; 2],
        source: &dyn InputSource,
        settings: ControllerSettings,
    ) -> Result<Self, ControllerError> {
        if !source.has_keyboard() {
            return Err(ControllerError::KeyboardUnavailable);
        }

        let viewport = ViewportState::new(world, viewport[0], viewport[1]);
        info!(
            world.width = world.width(),
            world.height = world.height(),
            scroll = ?viewport.scroll(),
            "Camera initialized"
        );

        Ok(Self {
            viewport,
            settings,
            held: Directions::empty(),
            drag: DragState::Idle,
            pinch: PinchTracker::new(),
        })
    }

    pub fn viewport(&self) -> &ViewportState {
        &self.viewport
    }

    pub fn viewport_mut(&mut self) -> &mut ViewportState {
        &mut self.viewport
    }

    pub fn held(&self) -> Directions {
        self.held
    }

    pub fn drag(&self) -> DragState {
        self.drag
    }

    pub fn pinch(&self) -> &PinchTracker {
        &self.pinch
    }

    pub fn on_key_down(&mut self, directions: Directions) {
        self.held.insert(directions);
    }

    pub fn on_key_up(&mut self, directions: Directions) {
        self.held.remove(directions);
    }

    /// Per-frame update: held-key panning, then pinch polling
    pub fn on_tick(&mut self, dt: f32, pointers: &PointerTable) {
        let dt = if dt.is_finite() { dt.max(0.0) } else { 0.0 };
        self.pan(dt);
        self.poll_pinch(pointers);
        self.viewport.clamp();
    }

    fn pan(&mut self, dt: f32) {
        let [ax, ay] = self.held.axis();
        if ax == 0.0 && ay == 0.0 {
            return;
        }
        let speed = self.settings.base_speed * dt / self.viewport.zoom();
        self.viewport.scroll_by(ax * speed, ay * speed);
    }

    fn poll_pinch(&mut self, pointers: &PointerTable) {
        let had_baseline = self.pinch.last_distance().is_some();
        if let Some(change) = self.pinch.sample(pointers.active_touches()) {
            self.viewport
                .adjust_zoom(change * self.settings.pinch_sensitivity);
            trace!(change, zoom = self.viewport.zoom(), "Pinch zoom");
        } else if !had_baseline && self.pinch.last_distance().is_some() {
            debug!(distance = ?self.pinch.last_distance(), "Pinch started");
        }
    }

    pub fn on_pointer_down(&mut self, pos: [f32; 2]) {
        self.drag = DragState::Dragging { last: pos };
        debug!(?pos, "Drag started");
    }

    /// Move of a pointer; only drags while the pointer is pressed
    pub fn on_pointer_move(&mut self, pos: [f32; 2], is_down: bool) {
        let DragState::Dragging { last } = self.drag else {
            return;
        };
        if !is_down {
            return;
        }

        let zoom = self.viewport.zoom();
        let delta = [pos[0] - last[0], pos[1] - last[1]];
        self.viewport.scroll_by(-delta[0] / zoom, -delta[1] / zoom);
        self.drag = DragState::Dragging { last: pos };
    }

    /// Any pointer release ends the drag and invalidates the pinch pairing
    pub fn on_pointer_up(&mut self) {
        if self.drag != DragState::Idle {
            debug!("Drag ended");
        }
        self.drag = DragState::Idle;
        self.pinch.reset();
    }

    /// Wheel notch; only the sign of `delta_y` matters
    pub fn on_wheel(&mut self, delta_y: f32) {
        let step = if delta_y > 0.0 {
            -self.settings.wheel_step
        } else if delta_y < 0.0 {
            self.settings.wheel_step
        } else {
            return;
        };
        self.viewport.adjust_zoom(step);
        debug!(zoom = self.viewport.zoom(), "Wheel zoom");
    }

    /// Surface changed size
    pub fn on_resize(&mut self, width: f32, height: f32) {
        self.viewport.resize(width, height);
    }
}

impl InputHandler for CameraController {
    fn name(&self) -> &str {
        CAMERA_HANDLER_NAME
    }

    fn priority(&self) -> u32 {
        10
    }

    fn handle_event(&mut self, event: &InputEvent, _state: &InputState) -> bool {
        match *event {
            InputEvent::KeyPress { key } => match Directions::from_key(key) {
                Some(dir) => self.on_key_down(dir),
                None => return false,
            },
            InputEvent::KeyRelease { key } => match Directions::from_key(key) {
                Some(dir) => self.on_key_up(dir),
                None => return false,
            },
            InputEvent::PointerDown { pos, .. } => self.on_pointer_down(pos),
            InputEvent::PointerMove { pos, is_down, .. } => self.on_pointer_move(pos, is_down),
            InputEvent::PointerUp { .. } => self.on_pointer_up(),
            InputEvent::Wheel { delta } => self.on_wheel(delta[1]),
        }
        true
    }

    fn update(&mut self, state: &InputState, dt: f32) {
        self.on_tick(dt, &state.pointers);
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::input::{InputCollector, PointerId};

    const EPS: f32 = 1e-4;

    fn controller() -> CameraController {
        let world = World::new(2000.0, 2000.0).unwrap();
        CameraController::init(
            world,
            [800.0, 600.0],
            &InputCollector::default(),
            ControllerSettings::default(),
        )
        .unwrap()
    }

    #[test]
    fn test_init_requires_keyboard() {
        let world = World::new(2000.0, 2000.0).unwrap();
        let err = CameraController::init(
            world,
            [800.0, 600.0],
            &InputCollector::new(false, 3),
            ControllerSettings::default(),
        )
        .unwrap_err();
        assert_eq!(err, ControllerError::KeyboardUnavailable);
    }

    #[test]
    fn test_axis_cancellation() {
        assert_eq!((Directions::LEFT | Directions::RIGHT).axis(), [0.0, 0.0]);
        assert_eq!((Directions::RIGHT | Directions::UP).axis(), [1.0, -1.0]);
        assert_eq!(Directions::empty().axis(), [0.0, 0.0]);
    }

    #[test]
    fn test_pan_speed_scales_with_zoom() {
        let mut cam = controller();
        cam.viewport_mut().set_scroll(100.0, 100.0);
        cam.viewport_mut().set_zoom(2.0);
        cam.on_key_down(Directions::RIGHT);
        cam.on_tick(0.1, &PointerTable::default());
        // 800 * 0.1 / 2
        assert!((cam.viewport().scroll()[0] - 140.0).abs() < EPS);
        assert_eq!(cam.viewport().scroll()[1], 100.0);

        cam.on_key_up(Directions::RIGHT);
        cam.on_tick(0.1, &PointerTable::default());
        assert!((cam.viewport().scroll()[0] - 140.0).abs() < EPS);
    }

    #[test]
    fn test_negative_dt_ignored() {
        let mut cam = controller();
        let before = cam.viewport().scroll();
        cam.on_key_down(Directions::LEFT);
        cam.on_tick(-1.0, &PointerTable::default());
        cam.on_tick(f32::NAN, &PointerTable::default());
        assert_eq!(cam.viewport().scroll(), before);
    }

    #[test]
    fn test_move_without_press_ignored() {
        let mut cam = controller();
        let before = cam.viewport().scroll();
        cam.on_pointer_move([10.0, 10.0], true);
        assert_eq!(cam.viewport().scroll(), before);

        cam.on_pointer_down([100.0, 100.0]);
        cam.on_pointer_move([50.0, 50.0], false);
        assert_eq!(cam.viewport().scroll(), before);
    }

    #[test]
    fn test_drag_deltas_are_frame_to_frame() {
        let mut cam = controller();
        let start = cam.viewport().scroll();
        cam.on_pointer_down([100.0, 100.0]);
        cam.on_pointer_move([90.0, 100.0], true);
        cam.on_pointer_move([80.0, 100.0], true);
        assert_eq!(cam.viewport().scroll()[0], start[0] + 20.0);
        assert_eq!(cam.drag(), DragState::Dragging { last: [80.0, 100.0] });
    }

    #[test]
    fn test_zero_wheel_delta_ignored() {
        let mut cam = controller();
        cam.on_wheel(0.0);
        assert_eq!(cam.viewport().zoom(), 1.0);
    }

    #[test]
    fn test_settings_validation() {
        assert!(ControllerSettings::default().validate().is_ok());
        let bad = ControllerSettings {
            wheel_step: 0.0,
            ..Default::default()
        };
        assert_eq!(
            bad.validate(),
            Err(SettingsError::NotPositive {
                name: "wheel_step",
                value: 0.0
            })
        );
    }

    #[test]
    fn test_handles_routed_events() {
        let mut cam = controller();
        let state = InputState::default();
        assert!(cam.handle_event(&InputEvent::KeyPress { key: KeyCode::W }, &state));
        assert!(!cam.handle_event(&InputEvent::KeyPress { key: KeyCode::Other }, &state));
        assert_eq!(cam.held(), Directions::UP);

        cam.handle_event(
            &InputEvent::PointerDown {
                id: PointerId::Touch(1),
                pos: [0.0, 0.0],
                touch: true,
            },
            &state,
        );
        assert!(matches!(cam.drag(), DragState::Dragging { .. }));
        cam.handle_event(
            &InputEvent::PointerUp {
                id: PointerId::Touch(1),
                pos: [0.0, 0.0],
                touch: true,
            },
            &state,
        );
        assert_eq!(cam.drag(), DragState::Idle);
    }
}
