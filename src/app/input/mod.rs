//! Input handling system
//!
//! Collects raw winit input, turns it into semantic events and routes them
//! to handlers in priority order.
//!
//! # Architecture
//!
//! ```text
//! Raw Input (winit) → InputCollector → InputState + queued InputEvents
//!                                          ↓
//!                                    InputContext
//!                          (dispatch on arrival, tick per frame)
//!                                          ↓
//!                                   CameraController
//! ```
//!
//! # Usage
//!
//! ```ignore
//! // In window_event()
//! collector.handle_window_event(&event);
//! for event in collector.drain_events() {
//!     context.dispatch(&event, collector.state());
//! }
//!
//! // Each frame
//! context.tick(collector.state(), dt);
//! ```

mod camera_handler;
mod collector;
mod context;
mod events;
mod handler;
mod pinch;
mod state;

// Re-export public API
pub use camera_handler::{
    BASE_SPEED, CAMERA_HANDLER_NAME, CameraController, ControllerError, ControllerSettings,
    Directions, DragState, PINCH_SENSITIVITY, SettingsError, WHEEL_ZOOM_STEP,
};
pub use collector::{InputCollector, InputSource};
pub use context::InputContext;
pub use events::{InputEvent, KeyCode};
pub use handler::InputHandler;
pub use pinch::PinchTracker;
pub use state::{DEFAULT_TOUCH_POINTERS, InputState, Pointer, PointerId, PointerTable};
