#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions)]

//! Wire decoding of remotely fetched rated points.
//!
//! The point endpoint returns a JSON array of flat records. This crate
//! turns one response body into a sequence of validated
//! [`RatedPoint`](gheatmap_points_models::RatedPoint)s, with a typed error
//! for every way the body can be wrong.

pub mod decode;

pub use gheatmap_points_models::{PointRangeError, RatedPoint};

/// Errors that can occur while decoding a point payload.
#[derive(Debug, thiserror::Error)]
pub enum DecodeError {
    /// The body is not valid JSON, not an array, or an element is not an
    /// object.
    #[error("Malformed JSON: {message}")]
    MalformedJson {
        /// Description of what went wrong.
        message: String,
    },

    /// A record lacks one of the required fields.
    #[error("Record {index} is missing required field `{field}`")]
    MissingField {
        /// Name of the absent field.
        field: &'static str,
        /// Zero-based position of the record in the array.
        index: usize,
    },

    /// A required field is present but not numeric.
    #[error("Field `{field}` of record {index} is not a number")]
    TypeMismatch {
        /// Name of the offending field.
        field: &'static str,
        /// Zero-based position of the record in the array.
        index: usize,
    },

    /// A field value is outside its valid range.
    #[error("Record {index}: {source}")]
    Range {
        /// Zero-based position of the record in the array.
        index: usize,
        /// The underlying range violation.
        source: PointRangeError,
    },
}
