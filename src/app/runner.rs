//! Main application handler

use std::time::Instant;

use anyhow::Context;
use tracing::{debug, error, info, warn};
use winit::application::ApplicationHandler;
use winit::event::WindowEvent;
use winit::event_loop::ActiveEventLoop;
use winit::window::{Window, WindowId};

use super::config::AppConfig;
use super::input::{
    CAMERA_HANDLER_NAME, CameraController, InputCollector, InputContext, InputSource,
};
use super::window::{camera_title, window_attributes_from_config};
use crate::sim::{CameraTransform, World};

/// Host application: owns the window and feeds input into the camera
pub struct App {
    config: AppConfig,
    window: Option<Window>,
    last_update: Option<Instant>,
    input_collector: InputCollector,
    input_context: InputContext,
    last_transform: Option<CameraTransform>,
    startup_error: Option<anyhow::Error>,
}

impl App {
    /// Creates a new application with the provided configuration
    pub fn new(config: AppConfig) -> Self {
        info!(profile = %config.profile, "Starting field camera");
        info!(?config.window, "Window configuration");

        let input_collector =
            InputCollector::new(config.input.keyboard, config.input.touch_pointers);

        Self {
            config,
            window: None,
            last_update: None,
            input_collector,
            input_context: InputContext::new(),
            last_transform: None,
            startup_error: None,
        }
    }

    /// Creates a new application with configuration loaded from environment
    pub fn from_env() -> Self {
        let config = AppConfig::load_from_env().unwrap_or_else(|e| {
            warn!(error = %e, "Failed to load config, using default configuration");
            AppConfig::default()
        });
        Self::new(config)
    }

    /// Error that stopped the event loop during setup, if any
    pub fn take_startup_error(&mut self) -> Option<anyhow::Error> {
        self.startup_error.take()
    }

    /// Camera controller, once the window exists
    pub fn camera(&self) -> Option<&CameraController> {
        self.input_context.handler::<CameraController>(CAMERA_HANDLER_NAME)
    }

    /// Builds the world from the window size and registers the camera
    fn start_camera(&mut self, window: &Window) -> anyhow::Result<()> {
        let viewport = logical_size(window);
        let world = World::from_viewport(
            viewport,
            self.config.world.viewports_across,
            self.config.world.viewports_down,
        )
        .context("Invalid world size")?;
        let settings = self
            .config
            .camera
            .settings()
            .context("Invalid camera configuration")?;

        let controller = CameraController::init(world, viewport, &self.input_collector, settings)
            .context("Failed to set up camera controls")?;
        self.input_context.register_handler(Box::new(controller));
        debug!(handlers = ?self.input_context.debug_handlers(), "Input handlers registered");
        Ok(())
    }

    /// Route queued input events to handlers as soon as they arrive
    fn dispatch_input(&mut self) {
        for event in self.input_collector.drain_events() {
            self.input_context
                .dispatch(&event, self.input_collector.state());
        }
    }

    /// Publish the camera transform to the window when it changed
    fn present(&mut self) {
        let Some(transform) = self.camera().map(|c| c.viewport().transform()) else {
            return;
        };
        if self.last_transform == Some(transform) {
            return;
        }
        debug!(scroll = ?transform.scroll, zoom = transform.zoom, "Camera moved");
        if let Some(window) = &self.window {
            window.set_title(&camera_title(&self.config.window.title, &transform));
        }
        self.last_transform = Some(transform);
    }
}

impl Default for App {
    fn default() -> Self {
        Self::from_env()
    }
}

fn logical_size(window: &Window) -> [f32; 2] {
    let size = window.inner_size().to_logical::<f64>(window.scale_factor());
    [size.width as f32, size.height as f32]
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }

        let window_attributes = window_attributes_from_config(&self.config.window);
        let window = match event_loop.create_window(window_attributes) {
            Ok(window) => window,
            Err(e) => {
                error!(error = %e, "Failed to create window");
                self.startup_error = Some(anyhow::anyhow!("Failed to create window: {e}"));
                event_loop.exit();
                return;
            }
        };

        let size = window.inner_size();
        info!(
            window.width = size.width,
            window.height = size.height,
            "Window created successfully"
        );
        self.input_collector
            .set_scale_factor(window.scale_factor() as f32);

        if let Err(e) = self.start_camera(&window) {
            error!(error = %format!("{e:#}"), "Camera setup failed");
            self.startup_error = Some(e);
            event_loop.exit();
            return;
        }

        self.window = Some(window);
        self.last_update = Some(Instant::now());
        self.present();
    }

    fn about_to_wait(&mut self, _event_loop: &ActiveEventLoop) {
        let Some(last_update) = self.last_update else {
            return;
        };
        let now = Instant::now();
        let delta_time = (now - last_update).as_secs_f32();
        self.last_update = Some(now);

        self.input_context
            .tick(self.input_collector.state(), delta_time);
        self.present();

        if let Some(window) = &self.window {
            window.request_redraw();
        }
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: WindowId,
        event: WindowEvent,
    ) {
        self.input_collector.handle_window_event(&event);
        self.dispatch_input();

        match event {
            WindowEvent::CloseRequested => {
                info!("Close requested, exiting");
                event_loop.exit();
            }
            WindowEvent::Resized(_) => {
                if let Some(window) = &self.window {
                    let [width, height] = logical_size(window);
                    if let Some(camera) = self
                        .input_context
                        .handler_mut::<CameraController>(CAMERA_HANDLER_NAME)
                    {
                        camera.on_resize(width, height);
                    }
                    debug!(width, height, "Viewport resized");
                }
            }
            WindowEvent::ScaleFactorChanged { scale_factor, .. } => {
                self.input_collector.set_scale_factor(scale_factor as f32);
            }
            _ => {}
        }
    }
}
