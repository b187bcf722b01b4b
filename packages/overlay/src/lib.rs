#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions)]

//! Heatmap overlay composition.
//!
//! Pure assembly of decoded points into the overlay description the map
//! surface renders. No I/O, no failure path: the overlay is replaced
//! wholesale on every refresh.

use gheatmap_points_models::RatedPoint;
use serde::{Deserialize, Serialize};

/// Default overlay radius in pixels.
pub const DEFAULT_RADIUS: u32 = 50;

/// Default overlay opacity.
pub const DEFAULT_OPACITY: f64 = 1.0;

/// Rendering knobs for the heatmap overlay.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OverlayConfig {
    /// Blur radius of each point, in pixels.
    pub radius: u32,
    /// Overlay opacity, from 0.0 (invisible) to 1.0 (opaque).
    pub opacity: f64,
}

impl Default for OverlayConfig {
    fn default() -> Self {
        Self {
            radius: DEFAULT_RADIUS,
            opacity: DEFAULT_OPACITY,
        }
    }
}

/// A complete heatmap overlay description.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HeatmapSpec {
    /// Weighted points, in the order they were decoded.
    pub points: Vec<RatedPoint>,
    /// Blur radius of each point, in pixels.
    pub radius: u32,
    /// Overlay opacity.
    pub opacity: f64,
}

impl HeatmapSpec {
    /// Number of points in the overlay.
    #[must_use]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Returns `true` if the overlay has no points.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}

/// Composes decoded points into a heatmap overlay description.
///
/// Points are retained as given: no filtering, no deduplication.
#[must_use]
pub fn build(points: Vec<RatedPoint>, config: &OverlayConfig) -> HeatmapSpec {
    HeatmapSpec {
        points,
        radius: config.radius,
        opacity: config.opacity,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_points(n: u32) -> Vec<RatedPoint> {
        (0..n)
            .map(|i| RatedPoint::new(10.0 + f64::from(i), 70.0 + f64::from(i), 1.0).unwrap())
            .collect()
    }

    #[test]
    fn build_keeps_every_point_in_order() {
        let spec = build(sample_points(3), &OverlayConfig::default());
        assert_eq!(spec.len(), 3);
        assert!((spec.points[0].latitude - 10.0).abs() < f64::EPSILON);
        assert!((spec.points[2].latitude - 12.0).abs() < f64::EPSILON);
    }

    #[test]
    fn build_applies_default_radius_and_opacity() {
        let spec = build(sample_points(2), &OverlayConfig::default());
        assert_eq!(spec.radius, 50);
        assert!((spec.opacity - 1.0).abs() < f64::EPSILON);
    }

    #[test]
    fn build_applies_custom_config() {
        let config = OverlayConfig {
            radius: 25,
            opacity: 0.6,
        };
        let spec = build(sample_points(1), &config);
        assert_eq!(spec.radius, 25);
        assert!((spec.opacity - 0.6).abs() < f64::EPSILON);
    }

    #[test]
    fn empty_input_builds_empty_overlay() {
        let spec = build(Vec::new(), &OverlayConfig::default());
        assert!(spec.is_empty());
    }
}
