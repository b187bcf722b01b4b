//! Screen controller: host callbacks in, surface mutations out.
//!
//! The controller is a small state machine driven by the host's map-ready
//! and permission-result callbacks. Activation kicks off the overlay
//! pipeline as a structured background task; the stored handle gives the
//! screen single-flight refreshes and cancellation on teardown.

use std::sync::Arc;

use gheatmap_overlay::OverlayConfig;
use gheatmap_source::PointSource;
use strum_macros::Display;
use tokio::sync::Mutex;
use tokio::task::JoinHandle;

use crate::config::ScreenConfig;
use crate::surface::{LifecycleEvent, LocationPermissions, MapSurface, MapType, Notifier};

/// Message shown to the user when the overlay pipeline fails, regardless
/// of which stage failed.
pub const LOAD_FAILURE_MESSAGE: &str = "Could not load heatmap data.";

/// Lifecycle phase of one map screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum ScreenPhase {
    /// The map surface has not signalled readiness yet.
    Uninitialized,
    /// Surface configured; waiting to resolve location permission.
    MapReady,
    /// Permission dialog shown; waiting for the result callback.
    PermissionPending,
    /// Fully activated. Re-entrant: refreshes replace the overlay.
    Active,
}

/// Orchestrates one map screen against its injected collaborators.
pub struct ScreenController {
    config: ScreenConfig,
    surface: Arc<Mutex<dyn MapSurface>>,
    source: Arc<dyn PointSource>,
    notifier: Arc<dyn Notifier>,
    permissions: Arc<dyn LocationPermissions>,
    phase: ScreenPhase,
    map_type: MapType,
    pipeline: Option<JoinHandle<()>>,
}

impl ScreenController {
    /// Creates a controller in the [`ScreenPhase::Uninitialized`] phase.
    #[must_use]
    pub fn new(
        config: ScreenConfig,
        surface: Arc<Mutex<dyn MapSurface>>,
        source: Arc<dyn PointSource>,
        notifier: Arc<dyn Notifier>,
        permissions: Arc<dyn LocationPermissions>,
    ) -> Self {
        let map_type = config.map.initial_type;
        Self {
            config,
            surface,
            source,
            notifier,
            permissions,
            phase: ScreenPhase::Uninitialized,
            map_type,
            pipeline: None,
        }
    }

    /// Current lifecycle phase.
    #[must_use]
    pub const fn phase(&self) -> ScreenPhase {
        self.phase
    }

    /// Currently applied map type.
    #[must_use]
    pub const fn map_type(&self) -> MapType {
        self.map_type
    }

    /// Map-ready callback: configures the surface and resolves the
    /// location permission.
    ///
    /// With permission already granted the screen activates immediately.
    /// Otherwise the permission dialog is requested and the screen parks
    /// in [`ScreenPhase::PermissionPending`] until
    /// [`Self::on_permission_result`] resumes it.
    pub async fn on_map_ready(&mut self) {
        log::info!("Map surface ready");

        {
            let mut surface = self.surface.lock().await;
            surface.apply_ui_settings(&self.config.ui);
            surface.set_map_type(self.map_type);
            surface.move_camera(&self.config.camera);
        }
        self.phase = ScreenPhase::MapReady;

        if self.permissions.granted() {
            self.activate(true).await;
        } else {
            log::info!("Location permission not granted, requesting");
            self.permissions.request();
            self.phase = ScreenPhase::PermissionPending;
        }
    }

    /// Permission-result callback: resumes activation.
    ///
    /// A denial degrades gracefully: the live-location indicator stays
    /// off, but the marker, camera, and overlay pipeline do not need
    /// device location and proceed regardless.
    pub async fn on_permission_result(&mut self, granted: bool) {
        if self.phase != ScreenPhase::PermissionPending {
            log::warn!("Ignoring permission result in phase {}", self.phase);
            return;
        }

        if granted {
            log::info!("Location permission granted");
        } else {
            log::info!("Location permission denied, continuing without live location");
        }
        self.activate(granted).await;
    }

    /// Map-type toggle: advances to the next mode and applies it.
    pub async fn cycle_map_type(&mut self) {
        self.map_type = self.map_type.next();
        self.surface.lock().await.set_map_type(self.map_type);
        log::info!("Map type switched to {}", self.map_type);
    }

    /// Re-runs the overlay pipeline, replacing the current overlay
    /// wholesale on success.
    ///
    /// Returns `false` without spawning if the screen is not active or a
    /// previous pipeline run is still in flight.
    pub fn refresh(&mut self) -> bool {
        if self.phase != ScreenPhase::Active {
            log::warn!("Overlay refresh requested in phase {}, ignoring", self.phase);
            return false;
        }
        if self.pipeline.as_ref().is_some_and(|h| !h.is_finished()) {
            log::warn!("Overlay refresh skipped: previous pipeline run still in flight");
            return false;
        }

        let surface = Arc::clone(&self.surface);
        let source = Arc::clone(&self.source);
        let notifier = Arc::clone(&self.notifier);
        let overlay = self.config.overlay.clone();
        self.pipeline = Some(tokio::spawn(run_pipeline(
            surface, source, notifier, overlay,
        )));
        true
    }

    /// Host lifecycle callback, forwarded to the map surface.
    ///
    /// [`LifecycleEvent::Destroy`] additionally cancels any in-flight
    /// pipeline task so nothing outlives the screen.
    pub async fn on_lifecycle(&mut self, event: LifecycleEvent) {
        if event == LifecycleEvent::Destroy {
            if let Some(handle) = self.pipeline.take() {
                handle.abort();
                log::info!("Cancelled in-flight overlay pipeline");
            }
        }
        self.surface.lock().await.dispatch_lifecycle(event);
    }

    /// Waits for the in-flight pipeline run, if any, to finish.
    ///
    /// Used by hosts that want to observe the overlay before tearing the
    /// screen down; the production host callbacks never need to wait.
    pub async fn wait_for_pipeline(&mut self) {
        if let Some(handle) = self.pipeline.take() {
            if let Err(e) = handle.await {
                log::warn!("Overlay pipeline task did not complete: {e}");
            }
        }
    }

    /// Completes activation: location indicator, marker, and the first
    /// pipeline run.
    async fn activate(&mut self, location_enabled: bool) {
        {
            let mut surface = self.surface.lock().await;
            surface.set_my_location_enabled(location_enabled);
            surface.add_marker(&self.config.marker_spec());
        }
        self.phase = ScreenPhase::Active;
        self.refresh();
    }
}

/// One overlay pipeline run: fetch → decode → build → attach.
///
/// Every failure is caught here, logged with its specific kind, and
/// converted into a single user notification; the screen never crashes.
async fn run_pipeline(
    surface: Arc<Mutex<dyn MapSurface>>,
    source: Arc<dyn PointSource>,
    notifier: Arc<dyn Notifier>,
    overlay: OverlayConfig,
) {
    log::info!("Fetching heatmap points...");
    match source.fetch_points().await {
        Ok(points) => {
            log::info!("Fetched {} rated points", points.len());
            let spec = gheatmap_overlay::build(points, &overlay);
            surface.lock().await.set_heatmap(spec);
            log::info!("Heatmap overlay attached");
        }
        Err(e) => {
            log::error!("Overlay pipeline failed: {e}");
            notifier.notify(LOAD_FAILURE_MESSAGE);
        }
    }
}
