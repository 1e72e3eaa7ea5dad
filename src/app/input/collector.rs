//! Raw input collection from winit events

use tracing::{debug, trace};
use winit::event::{ElementState, MouseScrollDelta, TouchPhase, WindowEvent};
use winit::keyboard::PhysicalKey;

use super::events::{InputEvent, KeyCode};
use super::state::{InputState, PointerId};

/// Pixels per wheel line, for devices that report line deltas
const LINE_HEIGHT_PX: f32 = 20.0;

/// Something the camera can read input from
pub trait InputSource {
    /// Whether a keyboard is available for held-key panning
    fn has_keyboard(&self) -> bool;

    /// Current raw input state
    fn state(&self) -> &InputState;
}

/// Collects raw input from winit events
///
/// Maintains the pointer table and held keys, and queues semantic events in
/// arrival order until the host drains them.
pub struct InputCollector {
    state: InputState,
    scale_factor: f32,
    keyboard: bool,
    // Button went down before the cursor position was ever reported
    press_pending: bool,
    events: Vec<InputEvent>,
}

impl InputCollector {
    /// Creates a collector with `touch_slots` simultaneous touch contacts
    pub fn new(keyboard: bool, touch_slots: usize) -> Self {
        Self {
            state: InputState::new(touch_slots),
            scale_factor: 1.0,
            keyboard,
            press_pending: false,
            events: Vec::new(),
        }
    }

    /// Update scale factor (DPI scaling)
    pub fn set_scale_factor(&mut self, scale_factor: f32) {
        if scale_factor.is_finite() && scale_factor > 0.0 {
            self.scale_factor = scale_factor;
        }
    }

    /// Handle a winit window event
    pub fn handle_window_event(&mut self, event: &WindowEvent) {
        match event {
            WindowEvent::CursorMoved { position, .. } => {
                let pos = self.to_logical(position.x, position.y);
                self.cursor_moved(pos);
            }

            WindowEvent::MouseInput {
                state,
                button: winit::event::MouseButton::Left,
                ..
            } => {
                self.mouse_button(*state == ElementState::Pressed);
            }

            WindowEvent::MouseWheel { delta, .. } => {
                let pixels = match delta {
                    MouseScrollDelta::LineDelta(x, y) => [*x * LINE_HEIGHT_PX, *y * LINE_HEIGHT_PX],
                    MouseScrollDelta::PixelDelta(pos) => [pos.x as f32, pos.y as f32],
                };
                // winit reports scrolling up as positive; events use down-positive
                self.wheel([-pixels[0], -pixels[1]]);
            }

            WindowEvent::KeyboardInput { event, .. } => {
                if let PhysicalKey::Code(code) = event.physical_key {
                    self.key(code.into(), event.state.is_pressed(), event.repeat);
                }
            }

            WindowEvent::Touch(touch) => {
                let pos = self.to_logical(touch.location.x, touch.location.y);
                self.touch(touch.id, touch.phase, pos);
            }

            WindowEvent::Focused(false) => self.focus_lost(),

            _ => {}
        }
    }

    fn to_logical(&self, x: f64, y: f64) -> [f32; 2] {
        [x as f32 / self.scale_factor, y as f32 / self.scale_factor]
    }

    /// Mouse cursor moved to a logical position
    pub fn cursor_moved(&mut self, pos: [f32; 2]) {
        if self.press_pending {
            // First known position anchors the press instead of dragging from it
            self.press_pending = false;
            self.state.pointers.press(PointerId::Mouse, pos);
            self.events.push(InputEvent::PointerDown {
                id: PointerId::Mouse,
                pos,
                touch: false,
            });
            return;
        }
        if let Some(pointer) = self.state.pointers.move_to(PointerId::Mouse, pos) {
            self.events.push(InputEvent::PointerMove {
                id: PointerId::Mouse,
                pos,
                is_down: pointer.is_down,
                touch: false,
            });
        }
    }

    /// Primary mouse button changed
    ///
    /// A press before any cursor position is known is held back until the
    /// first `cursor_moved`, which then reports it as the pointer-down.
    pub fn mouse_button(&mut self, pressed: bool) {
        let Some(pos) = self.state.pointers.get(PointerId::Mouse).map(|p| p.position) else {
            self.press_pending = pressed;
            return;
        };
        if pressed {
            self.state.pointers.press(PointerId::Mouse, pos);
            self.events.push(InputEvent::PointerDown {
                id: PointerId::Mouse,
                pos,
                touch: false,
            });
        } else if self.state.pointers.release(PointerId::Mouse, None).is_some() {
            self.events.push(InputEvent::PointerUp {
                id: PointerId::Mouse,
                pos,
                touch: false,
            });
        }
    }

    /// Wheel moved; positive y scrolls down
    pub fn wheel(&mut self, delta: [f32; 2]) {
        self.events.push(InputEvent::Wheel { delta });
    }

    /// Key state changed
    pub fn key(&mut self, key: KeyCode, pressed: bool, repeat: bool) {
        if key == KeyCode::Other || repeat {
            return;
        }
        if pressed {
            if self.state.held_keys.insert(key) {
                self.events.push(InputEvent::KeyPress { key });
            }
        } else if self.state.held_keys.remove(&key) {
            self.events.push(InputEvent::KeyRelease { key });
        }
    }

    /// Touch contact changed
    pub fn touch(&mut self, id: u64, phase: TouchPhase, pos: [f32; 2]) {
        let id = PointerId::Touch(id);
        match phase {
            TouchPhase::Started => {
                if self.state.pointers.press(id, pos) {
                    self.events.push(InputEvent::PointerDown { id, pos, touch: true });
                } else {
                    trace!(?id, "No free touch slot, ignoring contact");
                }
            }
            TouchPhase::Moved => {
                if let Some(pointer) = self.state.pointers.move_to(id, pos) {
                    self.events.push(InputEvent::PointerMove {
                        id,
                        pos,
                        is_down: pointer.is_down,
                        touch: true,
                    });
                }
            }
            TouchPhase::Ended | TouchPhase::Cancelled => {
                if self.state.pointers.release(id, Some(pos)).is_some() {
                    self.events.push(InputEvent::PointerUp { id, pos, touch: true });
                }
            }
        }
    }

    /// Window lost focus; keys released elsewhere will never be reported
    pub fn focus_lost(&mut self) {
        if !self.state.held_keys.is_empty() {
            debug!(count = self.state.held_keys.len(), "Focus lost, releasing held keys");
        }
        for key in self.state.held_keys.drain() {
            self.events.push(InputEvent::KeyRelease { key });
        }
    }

    /// Take queued events in arrival order
    pub fn drain_events(&mut self) -> Vec<InputEvent> {
        std::mem::take(&mut self.events)
    }
}

impl InputSource for InputCollector {
    fn has_keyboard(&self) -> bool {
        self.keyboard
    }

    fn state(&self) -> &InputState {
        &self.state
    }
}

impl Default for InputCollector {
    fn default() -> Self {
        Self::new(true, super::state::DEFAULT_TOUCH_POINTERS)
    }
}
