//! Unified error handling for the API service.
//!
//! Every handler returns `Result<T, ApiError>`. Errors render as the JSON
//! envelope the web client expects (`{"success": false, "message": ...}`),
//! and server-class errors are captured to Sentry before responding.

use std::sync::OnceLock;

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use thiserror::Error;

use crate::config::Environment;
use crate::services::cloudinary::CloudinaryError;

/// Process-wide deployment environment, set once at startup.
///
/// `IntoResponse` has no access to application state, so the environment
/// that decides error-detail exposure lives here.
static ENVIRONMENT: OnceLock<Environment> = OnceLock::new();

/// Record the deployment environment for error rendering.
///
/// Later calls are ignored; the first writer wins.
pub fn set_environment(environment: Environment) {
    let _ = ENVIRONMENT.set(environment);
}

fn is_production() -> bool {
    matches!(ENVIRONMENT.get(), Some(Environment::Production))
}

/// Application-level error type for the API service.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Bad request from client (validation failure, bad upload, ...).
    #[error("{0}")]
    BadRequest(String),

    /// Login failed.
    #[error("Invalid credentials")]
    Unauthorized,

    /// Resource not found.
    #[error("Not found: {0}")]
    NotFound(String),

    /// Multipart request could not be read.
    #[error("Invalid upload request: {0}")]
    Multipart(#[from] axum::extract::multipart::MultipartError),

    /// Filesystem operation failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Cloudinary re-upload failed.
    #[error("Cloudinary error: {0}")]
    Cloudinary(#[from] CloudinaryError),

    /// Internal server error.
    #[error("Internal error: {0}")]
    Internal(String),
}

/// The error envelope every failing endpoint returns.
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub success: bool,
    pub message: String,
}

impl ApiError {
    const fn status(&self) -> StatusCode {
        match self {
            Self::BadRequest(_) | Self::Multipart(_) => StatusCode::BAD_REQUEST,
            Self::Unauthorized => StatusCode::UNAUTHORIZED,
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::Io(_) | Self::Cloudinary(_) | Self::Internal(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    /// The client-facing message. Server-class errors expose their detail
    /// only outside production.
    fn message(&self, production: bool) -> String {
        match self {
            Self::Io(_) | Self::Cloudinary(_) | Self::Internal(_) if production => {
                "Internal server error".to_string()
            }
            _ => self.to_string(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        // Capture server errors to Sentry
        if self.status() == StatusCode::INTERNAL_SERVER_ERROR {
            let event_id = sentry::capture_error(&self);
            tracing::error!(
                error = %self,
                sentry_event_id = %event_id,
                "Request error"
            );
        }

        let body = ErrorBody {
            success: false,
            message: self.message(is_production()),
        };

        (self.status(), Json(body)).into_response()
    }
}

/// Result type alias for `ApiError`.
pub type Result<T> = std::result::Result<T, ApiError>;

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_api_error_display() {
        let err = ApiError::BadRequest("All fields are required".to_string());
        assert_eq!(err.to_string(), "All fields are required");

        let err = ApiError::NotFound("order ORD-009".to_string());
        assert_eq!(err.to_string(), "Not found: order ORD-009");

        assert_eq!(ApiError::Unauthorized.to_string(), "Invalid credentials");
    }

    #[test]
    fn test_api_error_status_codes() {
        assert_eq!(
            ApiError::BadRequest("x".to_string()).status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(ApiError::Unauthorized.status(), StatusCode::UNAUTHORIZED);
        assert_eq!(
            ApiError::NotFound("x".to_string()).status(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            ApiError::Internal("x".to_string()).status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
        assert_eq!(
            ApiError::Io(std::io::Error::other("disk on fire")).status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_internal_detail_hidden_in_production() {
        let err = ApiError::Internal("connection pool exhausted".to_string());
        assert_eq!(err.message(true), "Internal server error");
        assert_eq!(err.message(false), "Internal error: connection pool exhausted");
    }

    #[test]
    fn test_client_errors_keep_their_message_in_production() {
        let err = ApiError::BadRequest("All fields are required".to_string());
        assert_eq!(err.message(true), "All fields are required");
        assert_eq!(ApiError::Unauthorized.message(true), "Invalid credentials");
    }
}
