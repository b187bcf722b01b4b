//! JSON decoding of rated point arrays.
//!
//! Records are decoded by walking [`serde_json::Value`] rather than a
//! derived struct so each failure carries the offending field name and
//! record index.

use gheatmap_points_models::RatedPoint;

use crate::DecodeError;

/// Decodes a response body into rated points, preserving record order.
///
/// An empty array yields an empty vector. Any failure aborts the decode:
/// no partial results are returned.
///
/// # Errors
///
/// Returns [`DecodeError`] if the body is not a JSON array of objects, a
/// record lacks a required numeric field, or a value is out of range.
pub fn decode(body: &str) -> Result<Vec<RatedPoint>, DecodeError> {
    let json: serde_json::Value =
        serde_json::from_str(body).map_err(|e| DecodeError::MalformedJson {
            message: e.to_string(),
        })?;

    let records = json.as_array().ok_or_else(|| DecodeError::MalformedJson {
        message: "expected a JSON array of records".to_string(),
    })?;

    let mut points = Vec::with_capacity(records.len());
    for (index, record) in records.iter().enumerate() {
        if !record.is_object() {
            return Err(DecodeError::MalformedJson {
                message: format!("record {index} is not a JSON object"),
            });
        }

        let latitude = require_number(record, "latitude", index)?;
        let longitude = require_number(record, "longitude", index)?;
        let rating = require_number(record, "rating", index)?;

        let point = RatedPoint::new(latitude, longitude, rating)
            .map_err(|source| DecodeError::Range { index, source })?;
        points.push(point);
    }

    Ok(points)
}

/// Extracts a required numeric field from one record.
fn require_number(
    record: &serde_json::Value,
    field: &'static str,
    index: usize,
) -> Result<f64, DecodeError> {
    let value = record
        .get(field)
        .ok_or(DecodeError::MissingField { field, index })?;
    value.as_f64().ok_or(DecodeError::TypeMismatch { field, index })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_array_yields_no_points() {
        let points = decode("[]").unwrap();
        assert!(points.is_empty());
    }

    #[test]
    fn decodes_single_record() {
        let points = decode(r#"[{"latitude":19.0,"longitude":73.0,"rating":4.5}]"#).unwrap();
        assert_eq!(points.len(), 1);
        assert!((points[0].latitude - 19.0).abs() < f64::EPSILON);
        assert!((points[0].longitude - 73.0).abs() < f64::EPSILON);
        assert!((points[0].rating - 4.5).abs() < f64::EPSILON);
    }

    #[test]
    fn preserves_record_order() {
        let body = r#"[
            {"latitude":19.0,"longitude":73.0,"rating":1.0},
            {"latitude":20.0,"longitude":74.0,"rating":2.0}
        ]"#;
        let points = decode(body).unwrap();
        assert_eq!(points.len(), 2);
        assert!((points[0].rating - 1.0).abs() < f64::EPSILON);
        assert!((points[1].rating - 2.0).abs() < f64::EPSILON);
    }

    #[test]
    fn accepts_integer_values() {
        let points = decode(r#"[{"latitude":19,"longitude":73,"rating":4}]"#).unwrap();
        assert!((points[0].rating - 4.0).abs() < f64::EPSILON);
    }

    #[test]
    fn ignores_extra_fields() {
        let points =
            decode(r#"[{"latitude":19.0,"longitude":73.0,"rating":4.5,"label":"x"}]"#).unwrap();
        assert_eq!(points.len(), 1);
    }

    #[test]
    fn missing_field_names_field_and_record() {
        let err = decode(r#"[{"latitude":19.0,"longitude":73.0}]"#).unwrap_err();
        assert!(matches!(
            err,
            DecodeError::MissingField {
                field: "rating",
                index: 0
            }
        ));
    }

    #[test]
    fn non_numeric_field_is_a_type_mismatch() {
        let err = decode(r#"[{"latitude":"19.0","longitude":73.0,"rating":4.5}]"#).unwrap_err();
        assert!(matches!(
            err,
            DecodeError::TypeMismatch {
                field: "latitude",
                index: 0
            }
        ));
    }

    #[test]
    fn non_json_body_is_malformed() {
        let err = decode("not json at all").unwrap_err();
        assert!(matches!(err, DecodeError::MalformedJson { .. }));
    }

    #[test]
    fn non_array_body_is_malformed() {
        let err = decode(r#"{"latitude":19.0}"#).unwrap_err();
        assert!(matches!(err, DecodeError::MalformedJson { .. }));
    }

    #[test]
    fn non_object_record_is_malformed() {
        let err = decode("[1, 2, 3]").unwrap_err();
        assert!(matches!(err, DecodeError::MalformedJson { .. }));
    }

    #[test]
    fn out_of_range_latitude_is_rejected() {
        let err = decode(r#"[{"latitude":95.0,"longitude":73.0,"rating":1.0}]"#).unwrap_err();
        assert!(matches!(err, DecodeError::Range { index: 0, .. }));
    }

    #[test]
    fn failure_in_later_record_yields_no_partial_results() {
        let body = r#"[
            {"latitude":19.0,"longitude":73.0,"rating":1.0},
            {"latitude":20.0,"longitude":74.0}
        ]"#;
        let err = decode(body).unwrap_err();
        assert!(matches!(
            err,
            DecodeError::MissingField {
                field: "rating",
                index: 1
            }
        ));
    }
}
