//! Input handler trait for subsystems

use std::any::Any;

use super::events::InputEvent;
use super::state::InputState;

/// Trait for subsystems that handle input
///
/// Handlers are called in priority order (highest first).
/// When a handler consumes an event (returns true), propagation stops.
pub trait InputHandler {
    /// Name of this handler for lookup and logging
    fn name(&self) -> &str;

    /// Priority for input routing (higher = earlier)
    ///
    /// - 100+: overlays that should see input before the scene
    /// - 0-99: scene handlers (camera)
    fn priority(&self) -> u32;

    /// Handle a discrete event the moment it arrives
    ///
    /// Returns `true` if the event was consumed.
    fn handle_event(&mut self, event: &InputEvent, state: &InputState) -> bool;

    /// Called once per frame with the elapsed time in seconds
    ///
    /// Used for continuous input such as held keys and touch polling.
    fn update(&mut self, _state: &InputState, _dt: f32) {}

    fn as_any(&self) -> &dyn Any;

    fn as_any_mut(&mut self) -> &mut dyn Any;
}
