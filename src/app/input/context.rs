//! Input event routing and distribution

use super::events::InputEvent;
use super::handler::InputHandler;
use super::state::InputState;

/// Central input routing
///
/// Discrete events are dispatched as they arrive; `tick` runs the per-frame
/// update of every handler afterwards.
#[derive(Default)]
pub struct InputContext {
    /// Registered handlers, sorted by priority (highest first)
    handlers: Vec<Box<dyn InputHandler>>,
}

impl InputContext {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register an input handler
    ///
    /// Handlers are kept sorted by priority; equal priorities keep
    /// registration order.
    pub fn register_handler(&mut self, handler: Box<dyn InputHandler>) {
        self.handlers.push(handler);
        self.handlers.sort_by_key(|h| std::cmp::Reverse(h.priority()));
    }

    /// Deliver one event; returns true if some handler consumed it
    pub fn dispatch(&mut self, event: &InputEvent, state: &InputState) -> bool {
        for handler in &mut self.handlers {
            if handler.handle_event(event, state) {
                return true;
            }
        }
        false
    }

    /// Run every handler's per-frame update
    pub fn tick(&mut self, state: &InputState, dt: f32) {
        for handler in &mut self.handlers {
            handler.update(state, dt);
        }
    }

    pub fn handler_count(&self) -> usize {
        self.handlers.len()
    }

    /// Get a typed reference to a handler by name
    pub fn handler<T: 'static>(&self, name: &str) -> Option<&T> {
        self.handlers
            .iter()
            .find(|h| h.name() == name)
            .and_then(|h| h.as_any().downcast_ref::<T>())
    }

    /// Get a typed mutable reference to a handler by name
    pub fn handler_mut<T: 'static>(&mut self, name: &str) -> Option<&mut T> {
        self.handlers
            .iter_mut()
            .find(|h| h.name() == name)
            .and_then(|h| h.as_any_mut().downcast_mut::<T>())
    }

    /// Names and priorities in dispatch order
    pub fn debug_handlers(&self) -> Vec<(String, u32)> {
        self.handlers
            .iter()
            .map(|h| (h.name().to_string(), h.priority()))
            .collect()
    }
}
