#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions)]

//! Rated geo point types shared across the gheatmap system.
//!
//! A [`RatedPoint`] is one weighted coordinate, the unit of heatmap input.
//! Coordinate bounds are enforced at construction so every downstream
//! consumer can rely on points being on the globe.

use serde::{Deserialize, Serialize};

/// Inclusive latitude bounds in degrees.
pub const LATITUDE_RANGE: (f64, f64) = (-90.0, 90.0);

/// Inclusive longitude bounds in degrees.
pub const LONGITUDE_RANGE: (f64, f64) = (-180.0, 180.0);

/// One geo coordinate with a non-negative heatmap weight.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RatedPoint {
    /// Latitude in degrees, within [`LATITUDE_RANGE`].
    pub latitude: f64,
    /// Longitude in degrees, within [`LONGITUDE_RANGE`].
    pub longitude: f64,
    /// Arbitrary non-negative weight. No upper bound is enforced.
    pub rating: f64,
}

impl RatedPoint {
    /// Creates a point, validating coordinate bounds and the rating sign.
    ///
    /// # Errors
    ///
    /// Returns [`PointRangeError`] if the latitude or longitude is outside
    /// its valid range, the rating is negative, or any field is not a
    /// finite number.
    pub fn new(latitude: f64, longitude: f64, rating: f64) -> Result<Self, PointRangeError> {
        if !(LATITUDE_RANGE.0..=LATITUDE_RANGE.1).contains(&latitude) {
            return Err(PointRangeError::Latitude(latitude));
        }
        if !(LONGITUDE_RANGE.0..=LONGITUDE_RANGE.1).contains(&longitude) {
            return Err(PointRangeError::Longitude(longitude));
        }
        if !rating.is_finite() || rating < 0.0 {
            return Err(PointRangeError::Rating(rating));
        }
        Ok(Self {
            latitude,
            longitude,
            rating,
        })
    }
}

/// Error returned when a [`RatedPoint`] field is outside its valid range.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PointRangeError {
    /// Latitude outside [-90, 90], or not a finite number.
    Latitude(f64),
    /// Longitude outside [-180, 180], or not a finite number.
    Longitude(f64),
    /// Negative or non-finite rating.
    Rating(f64),
}

impl std::fmt::Display for PointRangeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Latitude(v) => write!(f, "latitude {v} is outside [-90, 90]"),
            Self::Longitude(v) => write!(f, "longitude {v} is outside [-180, 180]"),
            Self::Rating(v) => write!(f, "rating {v} is not a non-negative number"),
        }
    }
}

impl std::error::Error for PointRangeError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_valid_point() {
        let point = RatedPoint::new(19.0, 73.0, 4.5).unwrap();
        assert!((point.latitude - 19.0).abs() < f64::EPSILON);
        assert!((point.longitude - 73.0).abs() < f64::EPSILON);
        assert!((point.rating - 4.5).abs() < f64::EPSILON);
    }

    #[test]
    fn accepts_boundary_coordinates() {
        assert!(RatedPoint::new(90.0, 180.0, 0.0).is_ok());
        assert!(RatedPoint::new(-90.0, -180.0, 0.0).is_ok());
    }

    #[test]
    fn rejects_out_of_range_latitude() {
        let err = RatedPoint::new(90.5, 73.0, 1.0).unwrap_err();
        assert_eq!(err, PointRangeError::Latitude(90.5));
    }

    #[test]
    fn rejects_out_of_range_longitude() {
        let err = RatedPoint::new(19.0, -181.0, 1.0).unwrap_err();
        assert_eq!(err, PointRangeError::Longitude(-181.0));
    }

    #[test]
    fn rejects_negative_rating() {
        let err = RatedPoint::new(19.0, 73.0, -1.0).unwrap_err();
        assert_eq!(err, PointRangeError::Rating(-1.0));
    }

    #[test]
    fn rejects_non_finite_fields() {
        assert!(RatedPoint::new(f64::NAN, 73.0, 1.0).is_err());
        assert!(RatedPoint::new(19.0, f64::INFINITY, 1.0).is_err());
        assert!(RatedPoint::new(19.0, 73.0, f64::NAN).is_err());
    }

    #[test]
    fn range_error_messages_name_the_field() {
        assert!(
            PointRangeError::Latitude(95.0)
                .to_string()
                .contains("latitude")
        );
        assert!(
            PointRangeError::Rating(-2.0)
                .to_string()
                .contains("rating")
        );
    }
}
