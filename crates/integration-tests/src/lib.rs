//! Integration tests for Medilink.
//!
//! # Running Tests
//!
//! ```bash
//! # Start the API server
//! cargo run -p medilink-api
//!
//! # Run integration tests against it
//! cargo test -p medilink-integration-tests -- --ignored
//! ```
//!
//! The tests target `http://localhost:5000` by default; set
//! `API_BASE_URL` to point somewhere else.

#![cfg_attr(not(test), forbid(unsafe_code))]

/// Base URL for the API service (configurable via environment).
#[must_use]
pub fn api_base_url() -> String {
    std::env::var("API_BASE_URL").unwrap_or_else(|_| "http://localhost:5000".to_string())
}

/// Build an HTTP client for talking to the API.
///
/// # Panics
///
/// Panics if the client cannot be constructed; tests cannot proceed
/// without one.
#[must_use]
pub fn client() -> reqwest::Client {
    reqwest::Client::builder()
        .build()
        .expect("Failed to create HTTP client")
}
