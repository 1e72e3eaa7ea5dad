//! Window configuration and management

use winit::dpi::LogicalSize;
use winit::window::{Fullscreen, WindowAttributes};

use super::config::WindowConfig;
use crate::sim::CameraTransform;

/// Creates window attributes from configuration
pub fn window_attributes_from_config(config: &WindowConfig) -> WindowAttributes {
    let mut attrs = WindowAttributes::default()
        .with_title(config.title.clone())
        .with_inner_size(LogicalSize::new(config.width, config.height))
        .with_resizable(config.resizable)
        .with_decorations(config.decorated);

    if config.fullscreen {
        attrs = attrs.with_fullscreen(Some(Fullscreen::Borderless(None)));
    }

    attrs
}

/// Window title showing where the camera is
pub fn camera_title(base: &str, transform: &CameraTransform) -> String {
    format!(
        "{base} | x {:.0} y {:.0} | {:.1}x",
        transform.scroll[0], transform.scroll[1], transform.zoom
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_camera_title() {
        let transform = CameraTransform {
            scroll: [1200.4, 99.6],
            zoom: 1.5,
        };
        assert_eq!(camera_title("Field", &transform), "Field | x 1200 y 100 | 1.5x");
    }
}
