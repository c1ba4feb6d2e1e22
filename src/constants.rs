//! Centralized constants for the nearby crate
//!
//! Fixed endpoints and request parameters shared by the fetch client and
//! the renderer.

/// External API endpoints
pub mod api {
    /// Google Places nearby search (JSON)
    pub const PLACES_URL: &str = "https://maps.googleapis.com/maps/api/place/nearbysearch/json";

    /// Google static map image
    pub const STATIC_MAP_URL: &str = "https://maps.googleapis.com/maps/api/staticmap";

    /// Upstream statuses that mean "the request was understood"
    pub const OK_STATUSES: [&str; 2] = ["OK", "ZERO_RESULTS"];
}

/// Static map parameters
pub mod map {
    /// Map zoom level
    pub const ZOOM: u8 = 15;

    /// Image size as `<width>x<height>`
    pub const SIZE: &str = "600x200";

    /// Marker pin color
    pub const MARKER_COLOR: &str = "blue";
}

/// Rendering limits
pub mod render {
    /// Number of nearest places shown in a response
    pub const MAX_RENDERED: usize = 4;

    /// Number of marker labels available (A through G)
    pub const MAX_MARKERS: usize = 7;
}

/// Returned in place of a rendered response when the search request fails
pub const ERROR_SENTINEL: &str = "error";

/// User-Agent sent with outbound requests
pub const USER_AGENT: &str = concat!("nearby/", env!("CARGO_PKG_VERSION"));
