//! Health check and CORS integration tests

use axum::http::{header, HeaderName, HeaderValue, StatusCode};
use serde_json::{json, Value};

use crate::common::{test_server, ALLOWED_ORIGIN};

#[tokio::test]
async fn test_health_reports_backends() {
    let server = test_server().await;
    let response = server.get("/health").await;
    assert_eq!(response.status_code(), StatusCode::OK);
    assert_eq!(
        response.json::<Value>(),
        json!({ "status": "ok", "storage": "memory", "identity": "local" })
    );
}

#[tokio::test]
async fn test_unknown_route_is_404() {
    let server = test_server().await;
    let response = server.get("/does-not-exist").await;
    assert_eq!(response.status_code(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_cors_allows_configured_origin_only() {
    let server = test_server().await;

    let response = server
        .get("/health")
        .add_header(header::ORIGIN, HeaderValue::from_static(ALLOWED_ORIGIN))
        .await;
    assert_eq!(
        response.headers().get(header::ACCESS_CONTROL_ALLOW_ORIGIN),
        Some(&HeaderValue::from_static(ALLOWED_ORIGIN))
    );
    assert_eq!(
        response.headers().get(header::ACCESS_CONTROL_ALLOW_CREDENTIALS),
        Some(&HeaderValue::from_static("true"))
    );

    let response = server
        .get("/health")
        .add_header(
            HeaderName::from_static("origin"),
            HeaderValue::from_static("https://evil.example"),
        )
        .await;
    assert!(response
        .headers()
        .get(header::ACCESS_CONTROL_ALLOW_ORIGIN)
        .is_none());
}
