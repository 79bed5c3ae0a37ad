// src/message.rs
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use crate::error::AppError;

/// A `[longitude, latitude]` pair, in the order the routing provider expects.
///
/// Deserializes from an array of at least two numbers; anything past the
/// second (an elevation, say) is dropped.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Vec<f64>")]
pub struct Coordinate(pub f64, pub f64);

impl TryFrom<Vec<f64>> for Coordinate {
    type Error = String;

    fn try_from(values: Vec<f64>) -> Result<Self, Self::Error> {
        match values[..] {
            [lon, lat, ..] => Ok(Coordinate(lon, lat)),
            _ => Err(format!("expected [lon, lat], got {} number(s)", values.len())),
        }
    }
}

impl Coordinate {
    pub fn lon(&self) -> f64 {
        self.0
    }

    pub fn lat(&self) -> f64 {
        self.1
    }
}

#[derive(Debug, Default, PartialEq)]
pub struct ChatRequest {
    pub message: String,
    pub coordinates: Option<Vec<Coordinate>>,
}

// Wire shape. `coordinates` stays untyped so a bad value degrades to "none"
// instead of rejecting the whole request.
#[derive(Deserialize)]
struct RawChatRequest {
    #[serde(default, deserialize_with = "present")]
    message: Option<Value>,
    #[serde(default)]
    coordinates: Option<Value>,
}

// Keeps an explicit `null` as `Some(Value::Null)`; only a missing key is `None`.
fn present<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<Value>, D::Error> {
    Value::deserialize(deserializer).map(Some)
}

impl ChatRequest {
    /// Parses a `/chat` body.
    ///
    /// Fails only when the body is not a JSON object or `message` is present
    /// but not a string (`null` included). Coordinates that are missing,
    /// malformed, or shorter than two points become `None`.
    pub fn from_json(body: &[u8]) -> Result<Self, AppError> {
        let raw: RawChatRequest = serde_json::from_slice(body)
            .map_err(|e| AppError::MalformedRequest(e.to_string()))?;

        let message = match raw.message {
            None => String::new(),
            Some(Value::String(s)) => s,
            Some(other) => {
                return Err(AppError::MalformedRequest(format!(
                    "`message` must be a string, got {other}"
                )));
            }
        };

        let coordinates = raw
            .coordinates
            .and_then(|v| serde_json::from_value::<Vec<Coordinate>>(v).ok())
            .filter(|c| c.len() >= 2);

        Ok(Self {
            message,
            coordinates,
        })
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ChatReply {
    pub reply: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_fields_take_defaults() {
        let req = ChatRequest::from_json(b"{}").unwrap();
        assert_eq!(req, ChatRequest::default());
    }

    #[test]
    fn rejects_null_message() {
        let err = ChatRequest::from_json(br#"{"message": null}"#).unwrap_err();
        assert!(matches!(err, AppError::MalformedRequest(_)));
    }

    #[test]
    fn extra_coordinate_values_are_dropped() {
        let req = ChatRequest::from_json(
            br#"{"message": "x", "coordinates": [[8.68, 49.41, 100.0], [8.69, 49.42, 120.0]]}"#,
        )
        .unwrap();
        assert_eq!(
            req.coordinates,
            Some(vec![Coordinate(8.68, 49.41), Coordinate(8.69, 49.42)])
        );
    }

    #[test]
    fn parses_coordinate_pairs() {
        let req = ChatRequest::from_json(
            br#"{"message": "route?", "coordinates": [[8.68, 49.41], [8.69, 49.42]]}"#,
        )
        .unwrap();
        let coords = req.coordinates.unwrap();
        assert_eq!(coords.len(), 2);
        assert_eq!(coords[0].lon(), 8.68);
        assert_eq!(coords[1].lat(), 49.42);
    }

    #[test]
    fn bad_coordinates_are_dropped() {
        for body in [
            r#"{"message": "x", "coordinates": "nope"}"#,
            r#"{"message": "x", "coordinates": [[1.0]]}"#,
            r#"{"message": "x", "coordinates": [[1.0, 2.0]]}"#,
            r#"{"message": "x", "coordinates": [{"lon": 1.0}, [2.0, 3.0]]}"#,
        ] {
            let req = ChatRequest::from_json(body.as_bytes()).unwrap();
            assert_eq!(req.coordinates, None, "body: {body}");
        }
    }

    #[test]
    fn rejects_non_string_message() {
        let err = ChatRequest::from_json(br#"{"message": 42}"#).unwrap_err();
        assert!(matches!(err, AppError::MalformedRequest(_)));
    }

    #[test]
    fn rejects_invalid_json() {
        assert!(ChatRequest::from_json(b"{not json").is_err());
        assert!(ChatRequest::from_json(b"[1, 2]").is_err());
    }
}
