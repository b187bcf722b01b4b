//! Screen configuration, embedded at compile time.
//!
//! Defaults live in `packages/screen/config/defaults.toml` and are baked
//! into the binary via [`include_str!`]. Callers that need different
//! settings parse their own document with [`parse_config_toml`].

use gheatmap_overlay::OverlayConfig;
use serde::{Deserialize, Serialize};

use crate::surface::{CameraPosition, MapType, MapUiSettings, MarkerSpec};

/// Default configuration document embedded at compile time.
const DEFAULT_CONFIG_TOML: &str = include_str!("../config/defaults.toml");

/// Remote point endpoint settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourceConfig {
    /// Absolute URL of the rated-point endpoint.
    pub url: String,
}

/// Static marker settings. The marker sits at the camera target.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MarkerConfig {
    /// Info window title.
    pub title: String,
    /// Info window detail line.
    pub snippet: String,
}

/// Map appearance settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MapConfig {
    /// Projection/style mode applied when the surface becomes ready.
    pub initial_type: MapType,
}

/// Complete configuration for one map screen.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScreenConfig {
    /// Initial camera target and zoom.
    pub camera: CameraPosition,
    /// Heatmap overlay rendering knobs.
    pub overlay: OverlayConfig,
    /// Remote point endpoint.
    pub source: SourceConfig,
    /// Static marker contents.
    pub marker: MarkerConfig,
    /// Map appearance.
    pub map: MapConfig,
    /// Interaction toggles.
    pub ui: MapUiSettings,
}

impl ScreenConfig {
    /// Returns the compiled-in default configuration.
    ///
    /// # Panics
    ///
    /// Panics if the embedded TOML is malformed (a compile-time
    /// guarantee, covered by tests).
    #[must_use]
    pub fn embedded_defaults() -> Self {
        parse_config_toml(DEFAULT_CONFIG_TOML)
            .unwrap_or_else(|e| panic!("Failed to parse embedded defaults.toml: {e}"))
    }

    /// The marker placed during activation, positioned at the camera
    /// target.
    #[must_use]
    pub fn marker_spec(&self) -> MarkerSpec {
        MarkerSpec {
            latitude: self.camera.latitude,
            longitude: self.camera.longitude,
            title: self.marker.title.clone(),
            snippet: self.marker.snippet.clone(),
        }
    }
}

/// Error returned when a configuration document cannot be parsed.
#[derive(Debug, thiserror::Error)]
#[error("Invalid screen config: {0}")]
pub struct ConfigError(#[from] toml::de::Error);

/// Parses a configuration document.
///
/// # Errors
///
/// Returns [`ConfigError`] if the document is not valid TOML or is
/// missing required fields.
pub fn parse_config_toml(doc: &str) -> Result<ScreenConfig, ConfigError> {
    Ok(toml::from_str(doc)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn embedded_defaults_parse() {
        let config = ScreenConfig::embedded_defaults();
        assert!(!config.source.url.is_empty());
    }

    #[test]
    fn embedded_camera_matches_documented_constants() {
        let config = ScreenConfig::embedded_defaults();
        assert!((config.camera.latitude - 19.0).abs() < f64::EPSILON);
        assert!((config.camera.longitude - 73.0).abs() < f64::EPSILON);
        assert!((config.camera.zoom - 8.0).abs() < f64::EPSILON);
    }

    #[test]
    fn embedded_overlay_matches_documented_constants() {
        let config = ScreenConfig::embedded_defaults();
        assert_eq!(config.overlay.radius, 50);
        assert!((config.overlay.opacity - 1.0).abs() < f64::EPSILON);
    }

    #[test]
    fn embedded_defaults_start_on_satellite() {
        let config = ScreenConfig::embedded_defaults();
        assert_eq!(config.map.initial_type, MapType::Satellite);
    }

    #[test]
    fn embedded_defaults_enable_all_interactions() {
        let config = ScreenConfig::embedded_defaults();
        assert_eq!(config.ui, MapUiSettings::default());
    }

    #[test]
    fn marker_spec_sits_at_camera_target() {
        let config = ScreenConfig::embedded_defaults();
        let marker = config.marker_spec();
        assert!((marker.latitude - config.camera.latitude).abs() < f64::EPSILON);
        assert!((marker.longitude - config.camera.longitude).abs() < f64::EPSILON);
        assert!(!marker.title.is_empty());
    }

    #[test]
    fn rejects_malformed_document() {
        assert!(parse_config_toml("not toml [").is_err());
    }

    #[test]
    fn rejects_document_missing_sections() {
        assert!(parse_config_toml("[camera]\nlatitude = 1.0\n").is_err());
    }
}
