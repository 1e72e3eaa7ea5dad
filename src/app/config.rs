//! Application configuration
//!
//! Supports multiple profiles (debug, release) with different settings.

use std::path::{Path, PathBuf};

use config::{Config, ConfigError, Environment, File};
use serde::{Deserialize, Serialize};

use super::input::{ControllerSettings, DEFAULT_TOUCH_POINTERS, SettingsError};

/// Window configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    pub title: String,
    /// Logical width
    pub width: f64,
    /// Logical height
    pub height: f64,
    pub fullscreen: bool,
    pub resizable: bool,
    /// Whether the window has a title bar and borders
    pub decorated: bool,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            title: "Field Camera".to_string(),
            width: 1280.0,
            height: 720.0,
            fullscreen: false,
            resizable: true,
            decorated: true,
        }
    }
}

/// World size, in multiples of the initial viewport
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct WorldConfig {
    pub viewports_across: f32,
    pub viewports_down: f32,
}

impl Default for WorldConfig {
    fn default() -> Self {
        Self {
            viewports_across: 10.0,
            viewports_down: 10.0,
        }
    }
}

/// Camera tuning
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CameraConfig {
    /// World units per second at zoom 1
    pub base_speed: f32,
    /// Zoom change per wheel notch
    pub wheel_step: f32,
    /// Zoom change per pixel of pinch separation
    pub pinch_sensitivity: f32,
}

impl Default for CameraConfig {
    fn default() -> Self {
        let settings = ControllerSettings::default();
        Self {
            base_speed: settings.base_speed,
            wheel_step: settings.wheel_step,
            pinch_sensitivity: settings.pinch_sensitivity,
        }
    }
}

impl CameraConfig {
    /// Validated controller settings
    pub fn settings(&self) -> Result<ControllerSettings, SettingsError> {
        ControllerSettings {
            base_speed: self.base_speed,
            wheel_step: self.wheel_step,
            pinch_sensitivity: self.pinch_sensitivity,
        }
        .validate()
    }
}

/// Input devices the host exposes
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct InputConfig {
    /// Whether a keyboard is attached; the camera refuses to start without one
    pub keyboard: bool,
    /// Simultaneous touch contacts tracked besides the mouse
    pub touch_pointers: usize,
}

impl Default for InputConfig {
    fn default() -> Self {
        Self {
            keyboard: true,
            touch_pointers: DEFAULT_TOUCH_POINTERS,
        }
    }
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LogConfig {
    /// `tracing_subscriber::EnvFilter` directive, overridden by `RUST_LOG`
    pub filter: String,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            filter: "info".to_string(),
        }
    }
}

/// Application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// The active profile (debug, release, etc.)
    pub profile: String,
    pub window: WindowConfig,
    pub world: WorldConfig,
    pub camera: CameraConfig,
    pub input: InputConfig,
    pub log: LogConfig,
}

impl AppConfig {
    /// Loads configuration based on the specified profile
    ///
    /// Sources, later ones overriding earlier ones:
    /// 1. `config/{profile}.toml`, next to the executable or in the current directory
    /// 2. Environment variables with prefix APP_ (e.g., APP_WINDOW__WIDTH=1920)
    pub fn load(profile: &str) -> Result<Self, ConfigError> {
        let dir = Self::find_config_dir().unwrap_or_else(|| PathBuf::from("config"));
        Self::load_from_dir(&dir, profile)
    }

    /// Loads a profile from an explicit config directory
    pub fn load_from_dir(dir: &Path, profile: &str) -> Result<Self, ConfigError> {
        let profile_path = dir.join(profile);

        Config::builder()
            .add_source(File::from(profile_path.as_path()).required(false))
            // Use __ as separator for nested fields (e.g., APP_CAMERA__BASE_SPEED)
            .add_source(
                Environment::with_prefix("APP")
                    .separator("__")
                    .try_parsing(true),
            )
            .set_override("profile", profile)?
            .build()?
            .try_deserialize()
    }

    /// Finds the config directory by searching in multiple locations
    fn find_config_dir() -> Option<PathBuf> {
        // Try to find config dir relative to executable
        if let Some(config_dir) = std::env::current_exe()
            .ok()
            .and_then(|exe| exe.parent().map(|dir| dir.join("config")))
            .filter(|dir| dir.exists())
        {
            return Some(config_dir);
        }

        // Fall back to current directory
        let cwd_config = PathBuf::from("config");
        cwd_config.exists().then_some(cwd_config)
    }

    /// Loads configuration using the APP_PROFILE environment variable,
    /// defaulting to "release"
    pub fn load_from_env() -> Result<Self, ConfigError> {
        let profile = std::env::var("APP_PROFILE").unwrap_or_else(|_| "release".to_string());
        Self::load(&profile)
    }
}
