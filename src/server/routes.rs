//! HTTP API routes

use crate::answer::answer_nearby_query;
use crate::coord::Coordinates;
use crate::server::state::AppState;

use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::{Html, IntoResponse},
    routing::get,
    Json, Router,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tower_http::trace::TraceLayer;

/// Create the API router
pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/api/nearby", get(nearby_handler))
        .route("/api/status", get(status_handler))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Nearby query string
#[derive(Debug, Deserialize)]
pub struct NearbyParams {
    /// Free-text place query
    #[serde(default)]
    pub q: String,
}

/// API error response
#[derive(Debug, Serialize, Deserialize)]
pub struct ApiError {
    pub error: String,
    pub code: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> axum::response::Response {
        (StatusCode::BAD_REQUEST, Json(self)).into_response()
    }
}

/// Nearby places endpoint
///
/// GET /api/nearby?q=coffee
///
/// Responds with the rendered HTML, or the plain `error` sentinel if the
/// upstream search failed.
async fn nearby_handler(
    State(state): State<Arc<AppState>>,
    Query(params): Query<NearbyParams>,
) -> Result<Html<String>, ApiError> {
    let query = params.q.trim();
    if query.is_empty() {
        return Err(ApiError {
            error: "Query parameter `q` is required".to_string(),
            code: "MISSING_QUERY".to_string(),
        });
    }

    Ok(Html(answer_nearby_query(&state.client, &state.map, query).await))
}

/// Status response
#[derive(Debug, Serialize, Deserialize)]
pub struct StatusResponse {
    /// Server is running
    pub running: bool,
    /// Server version
    pub version: String,
    /// Search anchor
    pub anchor: Coordinates,
}

/// Server status endpoint
///
/// GET /api/status
async fn status_handler(State(state): State<Arc<AppState>>) -> Json<StatusResponse> {
    Json(StatusResponse {
        running: true,
        version: env!("CARGO_PKG_VERSION").to_string(),
        anchor: state.client.anchor(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use http_body_util::BodyExt;
    use tower::ServiceExt;

    /// State whose proxy refuses connections
    fn create_test_state() -> Arc<AppState> {
        let mut config = Config::default();
        config.proxy.url = "http://127.0.0.1:1".to_string();
        config.http.timeout_secs = 5;
        Arc::new(AppState::new(&config).unwrap())
    }

    #[tokio::test]
    async fn test_status_endpoint() {
        let app = create_router(create_test_state());

        let response = app
            .oneshot(Request::builder().uri("/api/status").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);

        let body = response.into_body().collect().await.unwrap().to_bytes();
        let status: StatusResponse = serde_json::from_slice(&body).unwrap();

        assert!(status.running);
        assert_eq!(status.anchor, Coordinates::new(39.9526, -75.1652));
    }

    #[tokio::test]
    async fn test_nearby_missing_query() {
        let app = create_router(create_test_state());

        let response = app
            .oneshot(Request::builder().uri("/api/nearby").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let body = response.into_body().collect().await.unwrap().to_bytes();
        let err: ApiError = serde_json::from_slice(&body).unwrap();

        assert_eq!(err.code, "MISSING_QUERY");
    }

    #[tokio::test]
    async fn test_nearby_blank_query() {
        let app = create_router(create_test_state());

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/api/nearby?q=%20%20")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_nearby_unreachable_proxy_returns_sentinel() {
        let app = create_router(create_test_state());

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/api/nearby?q=coffee")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);

        let body = response.into_body().collect().await.unwrap().to_bytes();
        assert_eq!(&body[..], b"error");
    }
}
