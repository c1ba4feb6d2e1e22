//! Server shared state
//!
//! Built once at startup and only read by handlers.

use crate::config::Config;
use crate::error::Result;
use crate::places::PlacesClient;
use crate::render::MapSettings;

/// Shared state for the HTTP server
#[derive(Debug)]
pub struct AppState {
    /// Places search client (proxy already configured)
    pub client: PlacesClient,

    /// Static map settings
    pub map: MapSettings,
}

impl AppState {
    /// Create application state from a validated config
    ///
    /// Fails if the config cannot produce a working client.
    pub fn new(config: &Config) -> Result<Self> {
        Ok(Self {
            client: PlacesClient::new(config)?,
            map: MapSettings::from_config(config),
        })
    }

    /// Create application state around an existing client
    pub fn with_client(client: PlacesClient, map: MapSettings) -> Self {
        Self { client, map }
    }
}
