#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Demo host for the map screen.
//!
//! Stands in for the mobile host: wires a logging map surface, a console
//! notifier, and the HTTP point source to the screen controller, then
//! replays the host callback sequence (start → resume → map-ready →
//! teardown). Useful for exercising the overlay pipeline against a live
//! endpoint without a device.

use std::sync::Arc;

use clap::Parser;
use gheatmap_overlay::HeatmapSpec;
use gheatmap_screen::config::ScreenConfig;
use gheatmap_screen::controller::ScreenController;
use gheatmap_screen::surface::{
    CameraPosition, LifecycleEvent, LocationPermissions, MapSurface, MapType, MapUiSettings,
    MarkerSpec, Notifier,
};
use gheatmap_source::HttpPointSource;
use tokio::sync::Mutex;

#[derive(Parser)]
#[command(name = "gheatmap_app", about = "Map screen demo host")]
struct Cli {
    /// Override the rated-point endpoint URL.
    #[arg(long)]
    url: Option<String>,

    /// Cycle the map type once through all modes before fetching.
    #[arg(long)]
    cycle_map_types: bool,
}

/// Map surface that logs every call instead of rendering.
struct LoggingSurface;

impl MapSurface for LoggingSurface {
    fn apply_ui_settings(&mut self, settings: &MapUiSettings) {
        log::info!("surface: ui settings {settings:?}");
    }

    fn set_map_type(&mut self, map_type: MapType) {
        log::info!("surface: map type {map_type}");
    }

    fn move_camera(&mut self, camera: &CameraPosition) {
        log::info!(
            "surface: camera to ({}, {}) zoom {}",
            camera.latitude,
            camera.longitude,
            camera.zoom
        );
    }

    fn set_my_location_enabled(&mut self, enabled: bool) {
        log::info!("surface: live location {enabled}");
    }

    fn add_marker(&mut self, marker: &MarkerSpec) {
        log::info!(
            "surface: marker '{}' at ({}, {})",
            marker.title,
            marker.latitude,
            marker.longitude
        );
    }

    fn set_heatmap(&mut self, spec: HeatmapSpec) {
        log::info!(
            "surface: heatmap overlay with {} points (radius {}, opacity {})",
            spec.len(),
            spec.radius,
            spec.opacity
        );
    }

    fn dispatch_lifecycle(&mut self, event: LifecycleEvent) {
        log::debug!("surface: lifecycle {event}");
    }
}

/// Notifier that prints the transient message to the terminal.
struct ConsoleNotifier;

impl Notifier for ConsoleNotifier {
    fn notify(&self, message: &str) {
        println!("[notice] {message}");
    }
}

/// Permission stub: the demo host always grants location access.
struct AlwaysGranted;

impl LocationPermissions for AlwaysGranted {
    fn granted(&self) -> bool {
        true
    }

    fn request(&self) {}
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    pretty_env_logger::init();
    let cli = Cli::parse();

    let mut config = ScreenConfig::embedded_defaults();
    if let Some(url) = cli.url {
        config.source.url = url;
    }

    let source = HttpPointSource::new(&config.source.url)?;
    log::info!("Fetching rated points from {}", source.url());

    let surface: Arc<Mutex<dyn MapSurface>> = Arc::new(Mutex::new(LoggingSurface));
    let mut controller = ScreenController::new(
        config,
        surface,
        Arc::new(source),
        Arc::new(ConsoleNotifier),
        Arc::new(AlwaysGranted),
    );

    controller.on_lifecycle(LifecycleEvent::Start).await;
    controller.on_lifecycle(LifecycleEvent::Resume).await;
    controller.on_map_ready().await;

    if cli.cycle_map_types {
        for _ in 0..MapType::all().len() {
            controller.cycle_map_type().await;
        }
    }

    controller.wait_for_pipeline().await;

    controller.on_lifecycle(LifecycleEvent::Pause).await;
    controller.on_lifecycle(LifecycleEvent::Stop).await;
    controller.on_lifecycle(LifecycleEvent::Destroy).await;

    Ok(())
}
