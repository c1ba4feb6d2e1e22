//! HTML rendering of search results
//!
//! Produces the response string: a bold title, a list of the nearest
//! places and a static map image with one labeled marker per listed place.
//! Rendering is pure; the same inputs always give the same bytes.

pub mod helpers;
pub mod marker;

use crate::config::Config;
use crate::constants::api::STATIC_MAP_URL;
use crate::constants::map::{SIZE, ZOOM};
use crate::constants::render::MAX_RENDERED;
use crate::coord::Coordinates;
use crate::places::PlaceEntry;
use helpers::{format_rating, open_now_label, title_case};
use marker::{marker_param, MarkerLabel};

/// Static map image settings
#[derive(Debug, Clone, PartialEq)]
pub struct MapSettings {
    /// Static map endpoint
    pub endpoint: String,
    /// Map center (the search anchor)
    pub center: Coordinates,
    /// API key appended to the image URL, if any
    pub key: Option<String>,
}

impl MapSettings {
    /// Map centered on `center`, without a key
    pub fn new(center: Coordinates) -> Self {
        Self {
            endpoint: STATIC_MAP_URL.to_string(),
            center,
            key: None,
        }
    }

    /// Map settings for the configured anchor
    pub fn from_config(config: &Config) -> Self {
        let key = if config.map.include_key && !config.api.key.is_empty() {
            Some(config.api.key.clone())
        } else {
            None
        };

        Self {
            key,
            ..Self::new(config.anchor())
        }
    }

    /// Image URL with the given `&markers=...` parameters appended
    pub fn image_url(&self, markers: &str) -> String {
        let mut url = format!(
            "{}?center={}&zoom={}&size={}&sensor=false",
            self.endpoint, self.center, ZOOM, SIZE
        );
        if let Some(key) = &self.key {
            url.push_str("&key=");
            url.push_str(key);
        }
        url.push_str(markers);
        url
    }
}

/// The nearest places, at most [`MAX_RENDERED`] of them
///
/// Borrows the leading entries of a result list; later entries are
/// dropped.
#[derive(Debug, Clone, Copy)]
pub struct Nearest<'a> {
    entries: &'a [PlaceEntry],
}

impl<'a> Nearest<'a> {
    /// Take the first entries, in order
    pub fn from_entries(entries: &'a [PlaceEntry]) -> Self {
        let count = entries.len().min(MAX_RENDERED);
        Self {
            entries: &entries[..count],
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries paired with their marker label
    pub fn labeled(&self) -> impl Iterator<Item = (MarkerLabel, &'a PlaceEntry)> {
        MarkerLabel::ALL.into_iter().zip(self.entries)
    }
}

/// Render up to four places and their map for `query`
pub fn render(entries: &[PlaceEntry], query: &str, map: &MapSettings) -> String {
    let nearest = Nearest::from_entries(entries);

    let mut html = format!("<strong>Results for Nearby {}</strong><br>", title_case(query));
    html.push_str("<ul>");

    let mut markers = String::new();
    for (label, place) in nearest.labeled() {
        html.push_str(&format!("<li>{}<br>", place.name));
        html.push_str(&format!("{}<br>", place.address));
        html.push_str(&format!("<em>Rating: {}</em> | ", format_rating(&place.rating)));
        html.push_str(&format!("{}<br></li>", open_now_label(place.open_now)));

        markers.push_str(&marker_param(label, place.location));
    }

    html.push_str("</ul><br>");
    html.push_str(&format!("<img src='{}'>", map.image_url(&markers)));

    html
}
