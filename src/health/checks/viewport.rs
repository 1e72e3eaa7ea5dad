//! Camera clamping health check

use crate::app::input::{CameraController, ControllerSettings, InputCollector, PointerTable};
use crate::health::check::{CheckResult, Steps, SystemCheck};
use crate::sim::{MAX_ZOOM, MIN_ZOOM, World};

const VIEWPORT: [f32; 2] = [800.0, 600.0];

/// Drives a camera over a reference world and verifies it stays in bounds
pub struct ViewportCheck {
    world_size: [f32; 2],
}

impl ViewportCheck {
    pub fn new() -> Self {
        Self::with_world(2000.0, 2000.0)
    }

    /// Runs against a world of the given size
    pub fn with_world(width: f32, height: f32) -> Self {
        Self {
            world_size: [width, height],
        }
    }

    fn run(&self, steps: &mut Steps) -> Result<CheckResult, CheckResult> {
        let [width, height] = self.world_size;
        steps.note(format!(
            "World {width}x{height}, viewport {}x{}",
            VIEWPORT[0], VIEWPORT[1]
        ));
        let world = World::new(width, height)
            .map_err(|e| CheckResult::fail(format!("Reference world rejected: {e}")))?;
        let mut camera = CameraController::init(
            world,
            VIEWPORT,
            &InputCollector::default(),
            ControllerSettings::default(),
        )
        .map_err(|e| CheckResult::fail(format!("Camera init failed: {e}")))?;

        let center = camera.viewport().visible_bounds().center();
        steps.expect(
            center == world.center(),
            format!("Starts centered at {center:?}"),
        )?;

        camera.viewport_mut().set_scroll(width + 3000.0, height + 3000.0);
        let scroll = camera.viewport().scroll();
        let edge = [
            (width - VIEWPORT[0]).max(0.0),
            (height - VIEWPORT[1]).max(0.0),
        ];
        steps.expect(
            scroll == edge,
            format!("Far scroll clamps to {scroll:?}"),
        )?;

        camera.viewport_mut().set_zoom(100.0);
        let high = camera.viewport().zoom();
        camera.viewport_mut().set_zoom(-1.0);
        let low = camera.viewport().zoom();
        steps.expect(
            high == MAX_ZOOM && low == MIN_ZOOM,
            format!("Zoom limited to [{low}, {high}]"),
        )?;

        let world_bounds = crate::sim::Bounds::new([0.0, 0.0], [world.width(), world.height()]);
        camera.viewport_mut().set_zoom(1.0);
        camera.on_pointer_down([0.0, 0.0]);
        camera.on_pointer_move([-10_000.0, -10_000.0], true);
        camera.on_tick(1.0, &PointerTable::default());
        let visible = camera.viewport().visible_bounds();
        steps.expect(
            world_bounds.contains_bounds(&visible),
            format!("Large drag stays inside world ({visible:?})"),
        )?;

        Ok(CheckResult::pass("Camera stays inside the world"))
    }
}

impl Default for ViewportCheck {
    fn default() -> Self {
        Self::new()
    }
}

impl SystemCheck for ViewportCheck {
    fn name(&self) -> &'static str {
        "Viewport"
    }

    fn description(&self) -> Option<&'static str> {
        Some("Validates camera centering, scroll clamping and zoom limits")
    }

    fn check(&self) -> CheckResult {
        let mut steps = Steps::new();
        match self.run(&mut steps) {
            Ok(result) | Err(result) => steps.finish(result),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reference_world_passes_with_details() {
        let result = ViewportCheck::new().check();
        assert!(result.status.is_ok(), "{}", result.message);
        assert!(result.details.iter().any(|d| d.contains("clamps to [1200.0, 1400.0]")));
    }

    #[test]
    fn test_rejected_world_keeps_details() {
        let result = ViewportCheck::with_world(0.0, 2000.0).check();
        assert!(result.status.is_fail());
        assert!(result.message.contains("Reference world rejected"));
        assert_eq!(result.details, vec!["  World 0x2000, viewport 800x600".to_string()]);
    }
}
