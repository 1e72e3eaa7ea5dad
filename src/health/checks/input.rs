//! Input setup health check

use crate::app::AppConfig;
use crate::app::input::{
    CAMERA_HANDLER_NAME, CameraController, ControllerError, InputCollector, InputContext,
    InputSource,
};
use crate::health::check::{CheckResult, Steps, SystemCheck};
use crate::sim::World;

/// Verifies the configured input devices can drive the camera
#[derive(Default)]
pub struct InputCheck {
    config: Option<AppConfig>,
}

impl InputCheck {
    /// Checks the configuration selected by the environment
    pub fn new() -> Self {
        Self::default()
    }

    /// Checks an explicit configuration
    pub fn with_config(config: AppConfig) -> Self {
        Self {
            config: Some(config),
        }
    }

    fn run(&self, config: &AppConfig, steps: &mut Steps) -> Result<CheckResult, CheckResult> {
        let collector = InputCollector::new(config.input.keyboard, config.input.touch_pointers);
        let world = World::new(1000.0, 1000.0)
            .map_err(|e| CheckResult::fail(format!("Reference world rejected: {e}")))?;
        let settings = config
            .camera
            .settings()
            .map_err(|e| CheckResult::fail(format!("Invalid camera settings: {e}")))?;

        let controller = match CameraController::init(world, [400.0, 300.0], &collector, settings) {
            Ok(controller) => controller,
            Err(ControllerError::KeyboardUnavailable) => {
                steps.note("✗ Keyboard disabled in configuration");
                return Err(CheckResult::fail("Camera requires a keyboard"));
            }
        };
        steps.expect(collector.has_keyboard(), "Keyboard available")?;

        let mut context = InputContext::new();
        context.register_handler(Box::new(controller));
        steps.expect(
            context.handler::<CameraController>(CAMERA_HANDLER_NAME).is_some(),
            "Camera handler registered",
        )?;

        if config.input.touch_pointers < 2 {
            steps.note(format!(
                "⚠ Only {} touch slot(s); pinch zoom needs two",
                config.input.touch_pointers
            ));
            return Ok(CheckResult::warn("Pinch zoom unavailable"));
        }
        steps.note(format!("✓ {} touch slots", config.input.touch_pointers));
        Ok(CheckResult::pass("Keyboard, pointer and touch input ready"))
    }
}

impl SystemCheck for InputCheck {
    fn name(&self) -> &'static str {
        "Input"
    }

    fn description(&self) -> Option<&'static str> {
        Some("Validates that configured input devices can drive the camera")
    }

    fn check(&self) -> CheckResult {
        let config = self
            .config
            .clone()
            .unwrap_or_else(|| AppConfig::load_from_env().unwrap_or_default());

        let mut steps = Steps::new();
        match self.run(&config, &mut steps) {
            Ok(result) | Err(result) => steps.finish(result),
        }
    }
}
