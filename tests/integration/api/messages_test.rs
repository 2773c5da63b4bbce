//! Message thread API integration tests

use axum::http::StatusCode;
use pretty_assertions::assert_eq;
use serde_json::{json, Value};

use crate::common::test_server;

#[tokio::test]
async fn test_append_creates_then_appends() {
    let server = test_server().await;

    let response = server
        .post("/addMessage")
        .json(&json!({ "message": "hello", "UID": "u1", "contentID": "c1" }))
        .await;
    assert_eq!(response.status_code(), StatusCode::CREATED);
    assert_eq!(response.json::<Value>()["message"], json!("New content created with message"));

    let response = server
        .post("/addMessage")
        .json(&json!({ "message": "hi back", "UID": "u2", "contentID": "c1" }))
        .await;
    assert_eq!(response.status_code(), StatusCode::OK);
    assert_eq!(response.json::<Value>()["message"], json!("Message added to existing content"));

    let response = server
        .post("/getAllMessages")
        .json(&json!({ "contentID": "c1" }))
        .await;
    assert_eq!(response.status_code(), StatusCode::OK);
    let body: Value = response.json();
    assert_eq!(body["success"], json!(true));
    assert_eq!(body["messageCount"], json!(2));
    assert_eq!(body["messages"][0]["UID"], json!("u1"));
    assert_eq!(body["messages"][0]["message"], json!("hello"));
    assert_eq!(body["messages"][1]["UID"], json!("u2"));
    assert!(body["messages"][1]["timestamp"].is_string());
}

#[tokio::test]
async fn test_get_unknown_thread() {
    let server = test_server().await;
    let response = server
        .post("/getAllMessages")
        .json(&json!({ "contentID": "missing" }))
        .await;
    assert_eq!(response.status_code(), StatusCode::NOT_FOUND);
    let body: Value = response.json();
    assert_eq!(body["success"], json!(false));
    assert_eq!(body["message"], json!("No messages found for this contentID"));
}

#[tokio::test]
async fn test_append_requires_content_id() {
    let server = test_server().await;
    let response = server
        .post("/addMessage")
        .json(&json!({ "message": "hello", "UID": "u1" }))
        .await;
    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
    assert_eq!(response.json::<Value>()["success"], json!(false));
}

#[tokio::test]
async fn test_create_schema_once() {
    let server = test_server().await;

    let response = server
        .post("/createSchema")
        .json(&json!({ "contentID": 7 }))
        .await;
    assert_eq!(response.status_code(), StatusCode::CREATED);
    assert_eq!(
        response.json::<Value>(),
        json!({ "message": "New content schema created successfully", "contentID": "7" })
    );

    let response = server
        .post("/createSchema")
        .json(&json!({ "contentID": "7" }))
        .await;
    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
    assert_eq!(
        response.json::<Value>(),
        json!({ "success": false, "message": "ContentID already exists" })
    );
}

#[tokio::test]
async fn test_create_schema_with_seed_messages() {
    let server = test_server().await;
    server
        .post("/createSchema")
        .json(&json!({
            "contentID": "seeded",
            "messages": [
                { "UID": "u1", "message": "first", "timestamp": "2024-05-01T10:00:00Z" },
                { "UID": "u2", "message": "second" }
            ]
        }))
        .await
        .assert_status(StatusCode::CREATED);

    let body: Value = server
        .post("/getAllMessages")
        .json(&json!({ "contentID": "seeded" }))
        .await
        .json();
    assert_eq!(body["messageCount"], json!(2));
    assert_eq!(body["messages"][0]["message"], json!("first"));
    assert_eq!(body["messages"][1]["message"], json!("second"));
}
