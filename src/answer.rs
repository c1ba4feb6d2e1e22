//! Fetch-then-render entry point used by command dispatchers

use crate::constants::ERROR_SENTINEL;
use crate::places::PlacesClient;
use crate::render::{render, MapSettings};
use tracing::error;

/// Answer a "nearby <query>" command
///
/// Always returns a string: the rendered listing, or `"error"` when the
/// search request could not be completed.
pub async fn answer_nearby_query(client: &PlacesClient, map: &MapSettings, query: &str) -> String {
    match client.search(query).await {
        Ok(result) => render(&result.results, query, map),
        Err(e) => {
            error!(error = %e, query, "Places search failed");
            ERROR_SENTINEL.to_string()
        }
    }
}
