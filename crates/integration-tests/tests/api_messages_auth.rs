//! Integration tests for the contact-message and login endpoints.
//!
//! These tests require a running API server:
//! `cargo run -p medilink-api`
//!
//! Run with: `cargo test -p medilink-integration-tests -- --ignored`

#![allow(clippy::unwrap_used)]

use reqwest::StatusCode;
use serde_json::{Value, json};

use medilink_integration_tests::{api_base_url, client};

// ============================================================================
// Contact messages
// ============================================================================

#[tokio::test]
#[ignore = "Requires a running API server"]
async fn test_message_submission_roundtrip() {
    let resp = client()
        .post(format!("{}/api/messages", api_base_url()))
        .json(&json!({
            "name": "Integration Test",
            "email": "integration@test.example",
            "subject": "Probe",
            "message": "Checking the contact endpoint."
        }))
        .send()
        .await
        .expect("Failed to submit message");

    assert_eq!(resp.status(), StatusCode::OK);

    let body: Value = resp.json().await.expect("Failed to parse response");
    assert_eq!(body["success"], true);
    assert_eq!(body["data"]["name"], "Integration Test");
    assert_eq!(body["data"]["status"], "unread");
    assert!(body["data"]["id"].as_i64().unwrap() > 0);
}

#[tokio::test]
#[ignore = "Requires a running API server"]
async fn test_message_submission_missing_field_is_rejected() {
    let resp = client()
        .post(format!("{}/api/messages", api_base_url()))
        .json(&json!({
            "name": "Integration Test",
            "email": "integration@test.example",
            "subject": "Probe"
        }))
        .send()
        .await
        .expect("Failed to submit message");

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: Value = resp.json().await.expect("Failed to parse response");
    assert_eq!(body["success"], false);
    assert!(body.get("data").is_none());
}

// ============================================================================
// Login
// ============================================================================

#[tokio::test]
#[ignore = "Requires a running API server"]
async fn test_login_with_default_admin_credentials() {
    let resp = client()
        .post(format!("{}/api/auth/login", api_base_url()))
        .json(&json!({"username": "admin", "password": "admin123"}))
        .send()
        .await
        .expect("Failed to log in");

    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = resp.json().await.expect("Failed to parse response");
    assert!(body["user"]["token"].as_str().unwrap().contains("admin"));
}

#[tokio::test]
#[ignore = "Requires a running API server"]
async fn test_login_with_wrong_password_is_unauthorized() {
    let resp = client()
        .post(format!("{}/api/auth/login", api_base_url()))
        .json(&json!({"username": "admin", "password": "not-the-password"}))
        .send()
        .await
        .expect("Failed to send login request");

    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
}
