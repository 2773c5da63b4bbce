//! Remote identity provider tests
//!
//! The router is configured with `IdentityConfig::Remote` pointing at a
//! wiremock server that speaks the GoTrue endpoints.

use axum::http::StatusCode;
use biszbo::backend::server::config::IdentityConfig;
use serde_json::{json, Value};
use wiremock::matchers::{bearer_token, body_partial_json, header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use crate::common::server_with;

const SERVICE_KEY: &str = "service-key";

async fn remote_server(mock: &MockServer) -> axum_test::TestServer {
    server_with(IdentityConfig::Remote {
        url: mock.uri(),
        service_key: SERVICE_KEY.to_string(),
    })
    .await
}

fn remote_user(id: &str, email: &str) -> Value {
    json!({
        "id": id,
        "email": email,
        "aud": "authenticated",
        "created_at": "2024-05-01T10:00:00.000000Z"
    })
}

#[tokio::test]
async fn test_register_forwards_to_signup() {
    let mock = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/auth/v1/signup"))
        .and(header("apikey", SERVICE_KEY))
        .and(body_partial_json(json!({ "email": "a@example.com" })))
        .respond_with(ResponseTemplate::new(200).set_body_json(remote_user("remote-1", "a@example.com")))
        .expect(1)
        .mount(&mock)
        .await;

    let server = remote_server(&mock).await;
    let response = server
        .post("/register")
        .json(&json!({ "email": "a@example.com", "password": "secret1" }))
        .await;

    assert_eq!(response.status_code(), StatusCode::OK);
    let body: Value = response.json();
    assert_eq!(body["user"]["id"], json!("remote-1"));
    assert_eq!(body["user"]["email"], json!("a@example.com"));
}

#[tokio::test]
async fn test_register_accepts_user_envelope() {
    let mock = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/auth/v1/signup"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "user": remote_user("remote-2", "b@example.com"),
            "session": null
        })))
        .mount(&mock)
        .await;

    let server = remote_server(&mock).await;
    let body: Value = server
        .post("/register")
        .json(&json!({ "email": "b@example.com", "password": "secret1" }))
        .await
        .json();
    assert_eq!(body["user"]["id"], json!("remote-2"));
}

#[tokio::test]
async fn test_register_rejection_message_is_passed_through() {
    let mock = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/auth/v1/signup"))
        .respond_with(
            ResponseTemplate::new(422).set_body_json(json!({ "code": 422, "msg": "User already registered" })),
        )
        .mount(&mock)
        .await;

    let server = remote_server(&mock).await;
    let response = server
        .post("/register")
        .json(&json!({ "email": "dup@example.com", "password": "secret1" }))
        .await;

    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
    assert_eq!(response.json::<Value>()["error"], json!("User already registered"));
}

#[tokio::test]
async fn test_upstream_failure_is_bad_gateway() {
    let mock = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/auth/v1/signup"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&mock)
        .await;

    let server = remote_server(&mock).await;
    let response = server
        .post("/register")
        .json(&json!({ "email": "c@example.com", "password": "secret1" }))
        .await;
    assert_eq!(response.status_code(), StatusCode::BAD_GATEWAY);
}

#[tokio::test]
async fn test_login_returns_remote_session() {
    let mock = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/auth/v1/token"))
        .and(query_param("grant_type", "password"))
        .and(header("apikey", SERVICE_KEY))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "access_token": "remote-access-token",
            "token_type": "bearer",
            "expires_in": 3600,
            "refresh_token": "refresh",
            "user": remote_user("remote-3", "d@example.com")
        })))
        .mount(&mock)
        .await;

    let server = remote_server(&mock).await;
    let response = server
        .post("/login")
        .json(&json!({ "email": "d@example.com", "password": "secret1" }))
        .await;

    assert_eq!(response.status_code(), StatusCode::OK);
    let body: Value = response.json();
    assert_eq!(body["user"]["id"], json!("remote-3"));
    assert_eq!(body["session"]["access_token"], json!("remote-access-token"));
    assert_eq!(body["session"]["expires_in"], json!(3600));
}

#[tokio::test]
async fn test_login_invalid_grant_is_unauthorized() {
    let mock = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/auth/v1/token"))
        .respond_with(ResponseTemplate::new(400).set_body_json(json!({
            "error": "invalid_grant",
            "error_description": "Invalid login credentials"
        })))
        .mount(&mock)
        .await;

    let server = remote_server(&mock).await;
    let response = server
        .post("/login")
        .json(&json!({ "email": "e@example.com", "password": "wrong1" }))
        .await;
    assert_eq!(response.status_code(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_me_verifies_token_remotely() {
    let mock = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/auth/v1/user"))
        .and(bearer_token("good-token"))
        .respond_with(ResponseTemplate::new(200).set_body_json(remote_user("remote-4", "f@example.com")))
        .mount(&mock)
        .await;
    Mock::given(method("GET"))
        .and(path("/auth/v1/user"))
        .and(bearer_token("bad-token"))
        .respond_with(ResponseTemplate::new(401).set_body_json(json!({ "msg": "invalid JWT" })))
        .mount(&mock)
        .await;

    let server = remote_server(&mock).await;

    let response = server.get("/me").authorization_bearer("good-token").await;
    assert_eq!(response.status_code(), StatusCode::OK);
    assert_eq!(response.json::<Value>(), json!({ "id": "remote-4" }));

    let response = server.get("/me").authorization_bearer("bad-token").await;
    assert_eq!(response.status_code(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_health_reports_remote_identity() {
    let mock = MockServer::start().await;
    let server = remote_server(&mock).await;
    let body: Value = server.get("/health").await.json();
    assert_eq!(body["identity"], json!("remote"));
}
