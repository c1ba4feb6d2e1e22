//! Best-effort decoding of the places search response
//!
//! Decoding never fails. Every field is read independently and falls back
//! to its default when absent or of the wrong type, so a partially matching
//! body yields a partially populated result and a body that is not JSON at
//! all yields an empty one. Diagnostics go to the log only.

use crate::coord::Coordinates;
use crate::places::{PlaceEntry, Rating, SearchResult};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer};
use serde_json::Value;
use tracing::{debug, warn};

/// Decode a raw response body
pub fn decode_search_result(body: &[u8]) -> SearchResult {
    match serde_json::from_slice::<WireResponse>(body) {
        Ok(wire) => wire.into(),
        Err(e) => {
            warn!(error = %e, bytes = body.len(), "Places response is not valid JSON; treating as no results");
            SearchResult::default()
        }
    }
}

/// Top-level response as sent upstream
#[derive(Debug, Default, Deserialize)]
struct WireResponse {
    #[serde(default, deserialize_with = "lenient_places")]
    results: Vec<WirePlace>,
    #[serde(default, deserialize_with = "lenient")]
    status: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    error_message: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
struct WirePlace {
    #[serde(default, deserialize_with = "lenient")]
    icon: String,
    #[serde(default, deserialize_with = "lenient")]
    name: String,
    #[serde(default, deserialize_with = "lenient")]
    opening_hours: WireOpeningHours,
    #[serde(default, deserialize_with = "numeric_text")]
    rating: String,
    #[serde(default, deserialize_with = "lenient")]
    vicinity: String,
    #[serde(default, deserialize_with = "lenient")]
    geometry: WireGeometry,
}

#[derive(Debug, Default, Deserialize)]
struct WireOpeningHours {
    #[serde(default, deserialize_with = "lenient")]
    open_now: bool,
}

#[derive(Debug, Default, Deserialize)]
struct WireGeometry {
    #[serde(default, deserialize_with = "lenient")]
    location: WireLocation,
}

#[derive(Debug, Default, Deserialize)]
struct WireLocation {
    #[serde(default, deserialize_with = "lenient_number")]
    lat: f64,
    #[serde(default, deserialize_with = "lenient_number")]
    lng: f64,
}

impl From<WireResponse> for SearchResult {
    fn from(wire: WireResponse) -> Self {
        Self {
            results: wire.results.into_iter().map(PlaceEntry::from).collect(),
            status: wire.status,
            error_message: wire.error_message,
        }
    }
}

impl From<WirePlace> for PlaceEntry {
    fn from(wire: WirePlace) -> Self {
        Self {
            icon: wire.icon,
            name: wire.name,
            open_now: wire.opening_hours.open_now,
            rating: Rating::new(wire.rating),
            address: wire.vicinity,
            location: Coordinates::new(wire.geometry.location.lat, wire.geometry.location.lng),
        }
    }
}

/// Decode `T`, or its default if the value has the wrong shape
fn lenient<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned + Default,
{
    let value = Value::deserialize(deserializer)?;
    Ok(T::deserialize(value).unwrap_or_default())
}

/// Decode each array element on its own; a bad element becomes a default entry
fn lenient_places<'de, D>(deserializer: D) -> Result<Vec<WirePlace>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    let Value::Array(items) = value else {
        debug!("Places `results` is not an array");
        return Ok(Vec::new());
    };

    Ok(items
        .into_iter()
        .enumerate()
        .map(|(i, item)| {
            WirePlace::deserialize(item).unwrap_or_else(|e| {
                debug!(index = i, error = %e, "Defaulting malformed place entry");
                WirePlace::default()
            })
        })
        .collect())
}

/// Keep a number's text as-is; accept strings too
///
/// Numbers keep their source digits (`4.50` stays `4.50`) because
/// serde_json is built with `arbitrary_precision`.
fn numeric_text<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::Number(n) => n.to_string(),
        Value::String(s) => s,
        _ => String::new(),
    })
}

/// Read a number or a numeric string, else zero
fn lenient_number<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::Number(n) => n.as_f64().unwrap_or_default(),
        Value::String(s) => s.trim().parse().unwrap_or_default(),
        _ => 0.0,
    })
}
