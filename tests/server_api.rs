//! HTTP API tests against a mocked upstream reached through the proxy.

use std::sync::Arc;

use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use http_body_util::BodyExt;
use serde_json::json;
use tower::ServiceExt;
use wiremock::matchers::{method, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use nearby::server::routes::create_router;
use nearby::server::state::AppState;
use nearby::{Config, Coordinates, MapSettings, PlacesClient};

async fn app_via(server: &MockServer) -> axum::Router {
    let mut config = Config::default();
    config.proxy.url = server.uri();
    config.api.key = "test-key".to_string();

    let client = PlacesClient::with_endpoint(&config, "http://places.test/search").unwrap();
    let map = MapSettings::new(Coordinates::new(39.9526, -75.1652));

    create_router(Arc::new(AppState::with_client(client, map)))
}

#[tokio::test]
async fn nearby_endpoint_returns_rendered_html() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(query_param("keyword", "pizza place"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "results": [{
                "geometry": {"location": {"lat": 1.0, "lng": 2.0}},
                "name": "Pizzeria Beddia",
                "vicinity": "1313 N Lee St",
                "rating": 4.7,
                "opening_hours": {"open_now": false}
            }],
            "status": "OK"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let response = app_via(&server)
        .await
        .oneshot(
            Request::builder()
                .uri("/api/nearby?q=pizza%20place")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let content_type = response.headers()[header::CONTENT_TYPE].to_str().unwrap().to_string();
    assert!(content_type.starts_with("text/html"));

    let body = response.into_body().collect().await.unwrap().to_bytes();
    let html = String::from_utf8(body.to_vec()).unwrap();

    assert!(html.starts_with("<strong>Results for Nearby Pizza Place</strong><br>"));
    assert!(html.contains("<li>Pizzeria Beddia<br>1313 N Lee St<br>"));
    assert!(html.contains("<em>Rating: 4.7</em> | <strong>Closed</strong>"));
    assert!(html.ends_with("&markers=color:blue|label:A|1,2'>"));
}
