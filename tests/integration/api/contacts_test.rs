//! Contact API integration tests

use axum::http::StatusCode;
use pretty_assertions::assert_eq;
use serde_json::{json, Value};

use crate::common::test_server;

async fn contacts_of(server: &axum_test::TestServer, user: &str) -> Vec<String> {
    let response = server.get(&format!("/contacts/{}", user)).await;
    assert_eq!(response.status_code(), StatusCode::OK);
    let body: Value = response.json();
    assert_eq!(body["owner"], json!(user));
    serde_json::from_value(body["contacts"].clone()).unwrap()
}

#[tokio::test]
async fn test_add_is_mutual_and_remove_is_single_sided() {
    let server = test_server().await;

    let response = server
        .post("/contacts/add")
        .json(&json!({ "userA": "u1", "userB": "u2" }))
        .await;
    assert_eq!(response.status_code(), StatusCode::OK);
    assert_eq!(response.json::<Value>(), json!({ "success": true }));

    assert_eq!(contacts_of(&server, "u1").await, vec!["u2"]);
    assert_eq!(contacts_of(&server, "u2").await, vec!["u1"]);

    let response = server
        .post("/contacts/remove")
        .json(&json!({ "userA": "u1", "userB": "u2" }))
        .await;
    assert_eq!(response.status_code(), StatusCode::OK);
    assert_eq!(
        response.json::<Value>(),
        json!({ "success": true, "contacts": [] })
    );

    assert!(contacts_of(&server, "u1").await.is_empty());
    assert_eq!(contacts_of(&server, "u2").await, vec!["u1"]);
}

#[tokio::test]
async fn test_add_twice_is_idempotent() {
    let server = test_server().await;
    for _ in 0..2 {
        server
            .post("/contacts/add")
            .json(&json!({ "userA": "u1", "userB": "u2" }))
            .await
            .assert_status_ok();
    }
    assert_eq!(contacts_of(&server, "u1").await, vec!["u2"]);
    assert_eq!(contacts_of(&server, "u2").await, vec!["u1"]);
}

#[tokio::test]
async fn test_numeric_ids_are_accepted() {
    let server = test_server().await;
    server
        .post("/contacts/add")
        .json(&json!({ "userA": 17, "userB": 42 }))
        .await
        .assert_status_ok();
    assert_eq!(contacts_of(&server, "17").await, vec!["42"]);
}

#[tokio::test]
async fn test_missing_ids_rejected() {
    let server = test_server().await;

    for body in [json!({ "userA": "u1" }), json!({ "userB": "u2" }), json!({ "userA": "", "userB": "u2" })] {
        let response = server.post("/contacts/add").json(&body).await;
        assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
        assert_error_body!(response.json::<Value>(), StatusCode::BAD_REQUEST);
    }

    let response = server.post("/contacts/remove").json(&json!({ "userA": "u1" })).await;
    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_remove_for_unknown_owner_is_not_found() {
    let server = test_server().await;
    let response = server
        .post("/contacts/remove")
        .json(&json!({ "userA": "ghost", "userB": "u2" }))
        .await;
    assert_eq!(response.status_code(), StatusCode::NOT_FOUND);
    let body: Value = response.json();
    assert_error_body!(body, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], json!("User not found or fetch failed"));
}

#[tokio::test]
async fn test_remove_absent_contact_is_a_noop() {
    let server = test_server().await;
    server
        .post("/contacts/add")
        .json(&json!({ "userA": "u1", "userB": "u2" }))
        .await
        .assert_status_ok();

    let response = server
        .post("/contacts/remove")
        .json(&json!({ "userA": "u1", "userB": "u9" }))
        .await;
    assert_eq!(response.status_code(), StatusCode::OK);
    assert_eq!(response.json::<Value>()["contacts"], json!(["u2"]));
}

#[tokio::test]
async fn test_unknown_user_has_empty_list() {
    let server = test_server().await;
    assert!(contacts_of(&server, "nobody").await.is_empty());
}

#[tokio::test]
async fn test_blank_user_id_rejected() {
    let server = test_server().await;
    let response = server.get("/contacts/%20%20").await;
    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
    let body: Value = response.json();
    assert_error_body!(body, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], json!("Missing user ID"));
}

#[tokio::test]
async fn test_capacity_limit() {
    let server = test_server().await;
    for i in 0..50 {
        server
            .post("/contacts/add")
            .json(&json!({ "userA": "hub", "userB": format!("spoke{}", i) }))
            .await
            .assert_status_ok();
    }

    let response = server
        .post("/contacts/add")
        .json(&json!({ "userA": "hub", "userB": "late" }))
        .await;
    assert_eq!(response.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
    let body: Value = response.json();
    assert_contains!(body["error"].as_str().unwrap(), "50");

    // The hub is unchanged; the newcomer's own side still went through
    let hub = contacts_of(&server, "hub").await;
    assert_eq!(hub.len(), 50);
    assert!(!hub.contains(&"late".to_string()));
    assert_eq!(contacts_of(&server, "late").await, vec!["hub"]);
}
