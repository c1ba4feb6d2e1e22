//! Google Places nearby search client
//!
//! All requests leave through the configured forward proxy so the upstream
//! service sees one stable outbound IP. The client is built once from the
//! startup [`Config`] and can be shared freely between concurrent requests.

use crate::config::defaults::CONNECT_TIMEOUT_SECS;
use crate::config::Config;
use crate::constants::api::PLACES_URL;
use crate::constants::USER_AGENT;
use crate::coord::Coordinates;
use crate::error::{Error, Result};
use crate::places::{decode_search_result, SearchResult};
use std::time::Duration;
use tracing::{debug, warn};

/// Places search client
#[derive(Debug, Clone)]
pub struct PlacesClient {
    client: reqwest::Client,
    endpoint: String,
    anchor: Coordinates,
    api_key: String,
}

impl PlacesClient {
    /// Create a client for the Google Places endpoint
    ///
    /// Fails if the proxy URL is missing or malformed; the caller is not
    /// meant to serve requests without one.
    pub fn new(config: &Config) -> Result<Self> {
        Self::with_endpoint(config, PLACES_URL)
    }

    /// Create a client for a different search endpoint
    pub fn with_endpoint(config: &Config, endpoint: impl Into<String>) -> Result<Self> {
        let proxy_url = config.proxy_url()?;
        let proxy = reqwest::Proxy::all(proxy_url)
            .map_err(|e| Error::Config(format!("Invalid proxy: {}", e)))?;

        let client = reqwest::Client::builder()
            .proxy(proxy)
            .timeout(config.timeout())
            .connect_timeout(Duration::from_secs(CONNECT_TIMEOUT_SECS))
            .user_agent(USER_AGENT)
            .build()
            .map_err(|e| Error::Config(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self {
            client,
            endpoint: endpoint.into(),
            anchor: config.anchor(),
            api_key: config.api.key.clone(),
        })
    }

    /// Search center
    pub fn anchor(&self) -> Coordinates {
        self.anchor
    }

    /// Full request URL for a keyword search ranked by distance
    pub fn search_url(&self, query: &str) -> String {
        format!(
            "{}?location={}&sensor=false&rankby=distance&key={}&keyword={}",
            self.endpoint,
            self.anchor,
            self.api_key,
            urlencoding::encode(query)
        )
    }

    /// Search for places matching `query`, nearest first
    ///
    /// Only transport failures are errors. Any body the service returns is
    /// decoded on a best-effort basis.
    pub async fn search(&self, query: &str) -> Result<SearchResult> {
        debug!(query, anchor = %self.anchor, "Searching nearby places");

        let response = self.client.get(self.search_url(query)).send().await?;

        let status = response.status();
        if !status.is_success() {
            warn!(%status, "Places search returned non-success status");
        }

        let body = response.bytes().await?;
        let result = decode_search_result(&body);

        if result.is_upstream_error() {
            warn!(
                status = result.status.as_deref().unwrap_or_default(),
                error_message = result.error_message.as_deref().unwrap_or_default(),
                "Places search reported an error"
            );
        }
        debug!(count = result.results.len(), "Places search complete");

        Ok(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_config() -> Config {
        let mut config = Config::default();
        config.api.key = "test-key".to_string();
        config.proxy.url = "http://127.0.0.1:3128".to_string();
        config.anchor.lat = 40.7128;
        config.anchor.lng = -74.006;
        config
    }

    #[test]
    fn test_search_url() {
        let client = PlacesClient::new(&test_config()).unwrap();

        assert_eq!(
            client.search_url("coffee"),
            "https://maps.googleapis.com/maps/api/place/nearbysearch/json\
             ?location=40.7128,-74.006&sensor=false&rankby=distance&key=test-key&keyword=coffee"
        );
    }

    #[test]
    fn test_search_url_escapes_keyword() {
        let client = PlacesClient::new(&test_config()).unwrap();
        let url = client.search_url("fish & chips?");

        assert!(url.ends_with("&keyword=fish%20%26%20chips%3F"));
    }

    #[test]
    fn test_custom_endpoint() {
        let client = PlacesClient::with_endpoint(&test_config(), "http://places.test/search").unwrap();
        assert!(client.search_url("x").starts_with("http://places.test/search?location="));
    }

    #[test]
    fn test_missing_proxy_is_config_error() {
        let mut config = test_config();
        config.proxy.url.clear();

        let err = PlacesClient::new(&config).unwrap_err();
        assert!(matches!(err, Error::Config(_)));
    }

    #[test]
    fn test_malformed_proxy_is_config_error() {
        let mut config = test_config();
        config.proxy.url = "not a url".to_string();

        assert!(matches!(PlacesClient::new(&config), Err(Error::Config(_))));
    }

    #[test]
    fn test_anchor_from_config() {
        let client = PlacesClient::new(&test_config()).unwrap();
        assert_eq!(client.anchor(), Coordinates::new(40.7128, -74.006));
    }
}
