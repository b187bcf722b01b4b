//! Seams between the screen controller and its host.
//!
//! Implementations of these traits stand in for the commercial map SDK's
//! view object, the host permission dialog, and the transient
//! notification surface.

use gheatmap_overlay::HeatmapSpec;
use serde::{Deserialize, Serialize};
use strum_macros::{AsRefStr, Display, EnumString};

/// Map projection/style modes, in toggle order.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    AsRefStr,
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum MapType {
    /// Standard road map.
    Normal,
    /// Satellite imagery.
    Satellite,
    /// Topographic detail.
    Terrain,
    /// Satellite imagery with road overlay.
    Hybrid,
}

impl MapType {
    /// Returns the next mode in the toggle cycle, wrapping after the last.
    #[must_use]
    pub const fn next(self) -> Self {
        match self {
            Self::Normal => Self::Satellite,
            Self::Satellite => Self::Terrain,
            Self::Terrain => Self::Hybrid,
            Self::Hybrid => Self::Normal,
        }
    }

    /// Returns all variants of this enum.
    #[must_use]
    pub const fn all() -> &'static [Self] {
        &[Self::Normal, Self::Satellite, Self::Terrain, Self::Hybrid]
    }
}

/// Interaction toggles applied when the surface becomes ready.
///
/// All flags are independent booleans with no interdependency.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MapUiSettings {
    /// On-screen zoom buttons.
    pub zoom_controls: bool,
    /// Compass indicator.
    pub compass: bool,
    /// Button that recenters on the device location.
    pub my_location_button: bool,
    /// Contextual toolbar shown on marker tap.
    pub map_toolbar: bool,
    /// Pan by dragging.
    pub scroll_gestures: bool,
    /// Pinch to zoom.
    pub zoom_gestures: bool,
    /// Two-finger tilt.
    pub tilt_gestures: bool,
    /// Two-finger rotate.
    pub rotate_gestures: bool,
}

impl Default for MapUiSettings {
    fn default() -> Self {
        Self {
            zoom_controls: true,
            compass: true,
            my_location_button: true,
            map_toolbar: true,
            scroll_gestures: true,
            zoom_gestures: true,
            tilt_gestures: true,
            rotate_gestures: true,
        }
    }
}

/// Camera target and zoom level.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CameraPosition {
    /// Target latitude in degrees.
    pub latitude: f64,
    /// Target longitude in degrees.
    pub longitude: f64,
    /// Zoom level in the map SDK's scale.
    pub zoom: f64,
}

/// A single static marker with an info window.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MarkerSpec {
    /// Marker latitude in degrees.
    pub latitude: f64,
    /// Marker longitude in degrees.
    pub longitude: f64,
    /// Info window title.
    pub title: String,
    /// Info window detail line.
    pub snippet: String,
}

/// Host lifecycle callbacks forwarded to the map surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum LifecycleEvent {
    /// Screen became visible.
    Start,
    /// Screen gained input focus.
    Resume,
    /// Screen lost input focus.
    Pause,
    /// Screen is no longer visible.
    Stop,
    /// Host asked the screen to persist transient state.
    SaveState,
    /// Screen is being torn down.
    Destroy,
    /// Host is under memory pressure.
    LowMemory,
}

/// The rendering surface owned by the host.
///
/// The surface must only be touched by one owner at a time; the
/// controller serializes all access through its surface lock. Methods
/// mutate view state and cannot fail.
pub trait MapSurface: Send {
    /// Applies the interaction toggles.
    fn apply_ui_settings(&mut self, settings: &MapUiSettings);

    /// Switches the projection/style mode.
    fn set_map_type(&mut self, map_type: MapType);

    /// Moves the camera to the given target and zoom.
    fn move_camera(&mut self, camera: &CameraPosition);

    /// Shows or hides the live-location indicator.
    fn set_my_location_enabled(&mut self, enabled: bool);

    /// Places a static marker.
    fn add_marker(&mut self, marker: &MarkerSpec);

    /// Attaches a heatmap overlay, replacing any previous one.
    fn set_heatmap(&mut self, spec: HeatmapSpec);

    /// Forwards a host lifecycle callback to the underlying view.
    fn dispatch_lifecycle(&mut self, event: LifecycleEvent);
}

/// Transient user notifications (toasts on the observed hosts).
pub trait Notifier: Send + Sync {
    /// Shows one transient message to the user.
    fn notify(&self, message: &str);
}

/// Device location permission state and request dialog.
pub trait LocationPermissions: Send + Sync {
    /// Returns `true` if location permission is currently granted.
    fn granted(&self) -> bool;

    /// Asks the host to show the permission dialog. The outcome arrives
    /// later via the permission-result callback.
    fn request(&self);
}

#[cfg(test)]
mod tests {
    use std::str::FromStr as _;

    use super::*;

    #[test]
    fn map_type_cycle_visits_all_modes_and_wraps() {
        let mut seen = Vec::new();
        let mut current = MapType::Normal;
        for _ in 0..MapType::all().len() {
            seen.push(current);
            current = current.next();
        }
        assert_eq!(current, MapType::Normal);
        seen.sort_by_key(|t| *t as u8);
        seen.dedup();
        assert_eq!(seen.len(), MapType::all().len());
    }

    #[test]
    fn map_type_round_trips_through_strings() {
        for map_type in MapType::all() {
            let parsed = MapType::from_str(map_type.as_ref()).unwrap();
            assert_eq!(parsed, *map_type);
        }
    }

    #[test]
    fn map_type_displays_screaming_snake_case() {
        assert_eq!(MapType::Satellite.to_string(), "SATELLITE");
        assert_eq!(MapType::Hybrid.to_string(), "HYBRID");
    }

    #[test]
    fn default_ui_settings_enable_everything() {
        let ui = MapUiSettings::default();
        assert!(ui.zoom_controls);
        assert!(ui.compass);
        assert!(ui.my_location_button);
        assert!(ui.map_toolbar);
        assert!(ui.scroll_gestures);
        assert!(ui.zoom_gestures);
        assert!(ui.tilt_gestures);
        assert!(ui.rotate_gestures);
    }
}
