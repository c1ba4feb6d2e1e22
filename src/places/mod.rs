//! Places search: result model, lenient decoding and the fetch client
//!
//! The model is flat and read-only once decoded. Upstream nesting
//! (`geometry.location`, `opening_hours.open_now`) is handled in [`decode`].

pub mod client;
pub mod decode;

use crate::coord::Coordinates;
use serde::Serialize;
use std::fmt;

pub use client::PlacesClient;
pub use decode::decode_search_result;

/// Textual rating as sent by the upstream service
///
/// Kept as text so it renders exactly as received. Empty means the place
/// has no rating.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Rating(String);

impl Rating {
    /// Create a rating from its textual form
    pub fn new(text: impl Into<String>) -> Self {
        Self(text.into())
    }

    /// A missing rating
    pub fn unavailable() -> Self {
        Self::default()
    }

    /// Raw rating text
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Whether the upstream service sent a rating
    pub fn is_available(&self) -> bool {
        !self.0.is_empty()
    }
}

impl fmt::Display for Rating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// One place returned by the nearby search
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct PlaceEntry {
    /// Icon URL
    pub icon: String,
    /// Place name
    pub name: String,
    /// Whether the place reports itself open right now
    pub open_now: bool,
    /// Rating text (may be unavailable)
    pub rating: Rating,
    /// Short address (`vicinity` upstream)
    pub address: String,
    /// Place location
    pub location: Coordinates,
}

/// Decoded search response
///
/// `results` keeps the upstream order, which is nearest first because the
/// request ranks by distance.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct SearchResult {
    pub results: Vec<PlaceEntry>,

    /// Upstream status code (`OK`, `ZERO_RESULTS`, `REQUEST_DENIED`, ...)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,

    /// Upstream explanation accompanying an error status
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error_message: Option<String>,
}

impl SearchResult {
    /// Whether the upstream status signals a failed request
    ///
    /// A missing status is not treated as an error.
    pub fn is_upstream_error(&self) -> bool {
        match self.status.as_deref() {
            Some(status) => !crate::constants::api::OK_STATUSES.contains(&status),
            None => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rating_availability() {
        assert!(Rating::new("4.5").is_available());
        assert!(!Rating::unavailable().is_available());
        assert_eq!(Rating::new("4.5").to_string(), "4.5");
    }

    #[test]
    fn test_upstream_error_status() {
        let mut result = SearchResult::default();
        assert!(!result.is_upstream_error());

        result.status = Some("OK".to_string());
        assert!(!result.is_upstream_error());

        result.status = Some("ZERO_RESULTS".to_string());
        assert!(!result.is_upstream_error());

        result.status = Some("REQUEST_DENIED".to_string());
        assert!(result.is_upstream_error());
    }
}
