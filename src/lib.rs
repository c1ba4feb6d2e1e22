//! nearby: nearest places for a keyword, rendered with a static map
//!
//! A library and CLI tool that looks up places matching a query around a
//! fixed anchor point, keeps the four nearest, and renders them as a small
//! HTML snippet with a Google static map marking each one.
//!
//! ## Features
//!
//! - Google Places nearby search, ranked by distance
//! - All outbound traffic through a forward proxy (static egress IP)
//! - Lenient decoding: bad upstream JSON degrades to "no results"
//! - HTTP API + CLI interface
//!
//! ## Quick Start
//!
//! ```rust
//! use nearby::coord::Coordinates;
//! use nearby::places::{PlaceEntry, Rating};
//! use nearby::render::{render, MapSettings};
//!
//! let map = MapSettings::new(Coordinates::new(39.9526, -75.1652));
//! let places = vec![PlaceEntry {
//!     name: "La Colombe".to_string(),
//!     address: "1414 S Penn Square".to_string(),
//!     rating: Rating::new("4.5"),
//!     open_now: true,
//!     location: Coordinates::new(39.9529, -75.1636),
//!     ..Default::default()
//! }];
//!
//! let html = render(&places, "coffee", &map);
//! assert!(html.contains("label:A|39.9529,-75.1636"));
//! ```

pub mod answer;
pub mod cli;
pub mod config;
pub mod constants;
pub mod coord;
pub mod error;
pub mod places;
pub mod render;
pub mod server;

// Re-export commonly used types
pub use answer::answer_nearby_query;
pub use config::Config;
pub use coord::Coordinates;
pub use error::{Error, Result};
pub use places::{PlaceEntry, PlacesClient, SearchResult};
pub use render::{render, MapSettings};
