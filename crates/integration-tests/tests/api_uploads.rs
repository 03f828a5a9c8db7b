//! Integration tests for the image upload endpoints.
//!
//! These tests require a running API server:
//! `cargo run -p medilink-api`
//!
//! Run with: `cargo test -p medilink-integration-tests -- --ignored`

#![allow(clippy::unwrap_used)]

use reqwest::StatusCode;
use reqwest::multipart::{Form, Part};
use serde_json::Value;

use medilink_integration_tests::{api_base_url, client};

fn image_form(filename: &str, mime: &str, bytes: Vec<u8>) -> Form {
    Form::new().part(
        "image",
        Part::bytes(bytes)
            .file_name(filename.to_owned())
            .mime_str(mime)
            .expect("valid mime string"),
    )
}

#[tokio::test]
#[ignore = "Requires a running API server"]
async fn test_upload_and_list_roundtrip() {
    let base_url = api_base_url();
    let client = client();

    let resp = client
        .post(format!("{base_url}/api/upload"))
        .multipart(image_form(
            "integration.jpg",
            "image/jpeg",
            b"\xFF\xD8\xFFintegration-test-bytes".to_vec(),
        ))
        .send()
        .await
        .expect("Failed to upload image");

    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = resp.json().await.expect("Failed to parse response");
    assert_eq!(body["success"], true);
    let image_url = body["imageUrl"].as_str().unwrap().to_owned();
    assert!(image_url.ends_with("-integration.jpg"));

    // The listing should include the new file
    let listing: Value = client
        .get(format!("{base_url}/api/images"))
        .send()
        .await
        .expect("Failed to list images")
        .json()
        .await
        .expect("Failed to parse listing");

    let filename = image_url.rsplit('/').next().unwrap();
    assert!(
        listing
            .as_array()
            .unwrap()
            .iter()
            .any(|image| image["filename"] == filename),
        "uploaded file should appear in the listing"
    );

    // And the file should be served statically
    let resp = client
        .get(format!("{base_url}/uploads/{filename}"))
        .send()
        .await
        .expect("Failed to fetch uploaded file");
    assert_eq!(resp.status(), StatusCode::OK);
}

#[tokio::test]
#[ignore = "Requires a running API server"]
async fn test_upload_rejects_non_image_files() {
    let resp = client()
        .post(format!("{}/api/upload", api_base_url()))
        .multipart(image_form("notes.txt", "text/plain", b"hello".to_vec()))
        .send()
        .await
        .expect("Failed to send upload");

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
#[ignore = "Requires a running API server"]
async fn test_upload_rejects_oversized_files() {
    let oversized = vec![0u8; 5 * 1024 * 1024 + 1];
    let resp = client()
        .post(format!("{}/api/upload", api_base_url()))
        .multipart(image_form("huge.png", "image/png", oversized))
        .send()
        .await
        .expect("Failed to send upload");

    // Rejected either by the handler (400) or the body cap (413)
    assert!(
        resp.status() == StatusCode::BAD_REQUEST
            || resp.status() == StatusCode::PAYLOAD_TOO_LARGE,
        "unexpected status: {}",
        resp.status()
    );
}
