//! Semantic input events

use super::state::PointerId;

/// Input events produced by the collector and routed to handlers
#[derive(Debug, Clone, PartialEq)]
pub enum InputEvent {
    /// A pointer was pressed (mouse button or new touch)
    PointerDown {
        id: PointerId,
        /// Logical screen position
        pos: [f32; 2],
        touch: bool,
    },

    /// A tracked pointer moved
    PointerMove {
        id: PointerId,
        pos: [f32; 2],
        /// Whether the pointer is currently pressed
        is_down: bool,
        touch: bool,
    },

    /// A pointer was released (mouse button up, touch ended or cancelled)
    PointerUp {
        id: PointerId,
        pos: [f32; 2],
        touch: bool,
    },

    /// Mouse wheel. Positive `delta[1]` means scrolling down (towards the user).
    Wheel { delta: [f32; 2] },

    /// Key went down (repeats are not reported)
    KeyPress { key: KeyCode },

    /// Key went up
    KeyRelease { key: KeyCode },
}

/// Keys the camera cares about
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyCode {
    W,
    A,
    S,
    D,
    Other,
}

/// Convert from winit key code
impl From<winit::keyboard::KeyCode> for KeyCode {
    fn from(key: winit::keyboard::KeyCode) -> Self {
        use winit::keyboard::KeyCode as WK;
        match key {
            WK::KeyW => Self::W,
            WK::KeyA => Self::A,
            WK::KeyS => Self::S,
            WK::KeyD => Self::D,
            _ => Self::Other,
        }
    }
}
