//! Authentication test helpers
//!
//! Users are created through the public API so the helpers work against
//! any configured identity provider.

use axum::http::StatusCode;
use axum_test::TestServer;
use serde_json::{json, Value};
use uuid::Uuid;

/// Test user credentials
pub struct TestUser {
    pub id: String,
    pub email: String,
    pub password: String,
    pub token: String,
}

/// Register and log in a user
pub async fn create_test_user(server: &TestServer, email: &str, password: &str) -> TestUser {
    let response = server
        .post("/register")
        .json(&json!({ "email": email, "password": password }))
        .await;
    assert_eq!(response.status_code(), StatusCode::OK, "register failed: {}", response.text());

    let response = server
        .post("/login")
        .json(&json!({ "email": email, "password": password }))
        .await;
    assert_eq!(response.status_code(), StatusCode::OK, "login failed: {}", response.text());

    let body: Value = response.json();
    TestUser {
        id: body["user"]["id"].as_str().unwrap_or_default().to_string(),
        email: email.to_string(),
        password: password.to_string(),
        token: body["session"]["access_token"]
            .as_str()
            .unwrap_or_default()
            .to_string(),
    }
}

/// Create a test user with a unique email
pub async fn create_unique_test_user(server: &TestServer) -> TestUser {
    let email = format!("test_{}@example.com", Uuid::new_v4());
    create_test_user(server, &email, "test_password_123").await
}
