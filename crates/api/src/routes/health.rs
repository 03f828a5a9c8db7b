//! Health check route handler.

use axum::Json;
use chrono::{DateTime, Utc};
use serde::Serialize;

/// Health check payload.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub message: &'static str,
    pub timestamp: DateTime<Utc>,
}

/// Liveness health check.
///
/// Always 200 - there are no dependencies to probe.
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "OK",
        message: "Medilink Distribution API is running",
        timestamp: Utc::now(),
    })
}
