use anyhow::Context;
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;
use winit::event_loop::{ControlFlow, EventLoop};

use field_camera::app::{App, AppConfig};
use field_camera::{build_info, health};

/// Pan and zoom around a large field with WASD, mouse drag, wheel or pinch
#[derive(Debug, Parser)]
#[command(name = "field-camera", version, about)]
struct Cli {
    /// Configuration profile to load (defaults to APP_PROFILE, then "release")
    #[arg(long)]
    profile: Option<String>,

    /// Run the startup health checks, print the report and exit
    #[arg(long)]
    health: bool,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config = match &cli.profile {
        Some(profile) => AppConfig::load(profile),
        None => AppConfig::load_from_env(),
    };
    // Logging is not up yet, so a bad config is reported after init
    let (config, config_error) = match config {
        Ok(config) => (config, None),
        Err(e) => (AppConfig::default(), Some(e)),
    };

    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.log.filter))
        .unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    if let Some(e) = config_error {
        tracing::warn!(error = %e, "Failed to load config, using default configuration");
    }

    if cli.health {
        let report = health::run_all_checks();
        health::print_report(&report);
        std::process::exit(report.exit_code());
    }

    info!(version = %build_info::version_string(), "field-camera");

    let event_loop = EventLoop::new().context("Failed to create event loop")?;
    event_loop.set_control_flow(ControlFlow::Poll);

    let mut app = App::new(config);
    event_loop
        .run_app(&mut app)
        .context("Failed to run event loop")?;

    match app.take_startup_error() {
        Some(e) => Err(e),
        None => Ok(()),
    }
}
