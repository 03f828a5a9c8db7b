//! HTTP route handlers for the API service.
//!
//! # Route Structure
//!
//! ```text
//! GET  /api/health                  - Health check
//!
//! # Mock data (fixtures, rebuilt per request)
//! GET  /api/products                - Product catalog
//! GET  /api/orders                  - Order list
//! GET  /api/customers               - Customer list
//! GET  /api/messages                - Contact-message inbox
//! GET  /api/notifications           - Notification feed
//!
//! # Writes (nothing is persisted)
//! POST /api/messages                - Submit a contact message (echoed back)
//! POST /api/notifications/{id}/read - Acknowledge a notification (no-op)
//! POST /api/auth/login              - Mock login against the credential table
//!
//! # Images
//! POST /api/upload                  - Multipart image upload (<= 5 MB)
//! GET  /api/images                  - List uploaded images
//! GET  /uploads/{file}              - Static serving of uploaded images
//! ```
//!
//! Any other path returns the 404 JSON envelope.

pub mod auth;
pub mod customers;
pub mod health;
pub mod messages;
pub mod notifications;
pub mod orders;
pub mod products;
pub mod uploads;

use axum::{
    Json, Router,
    extract::DefaultBodyLimit,
    http::StatusCode,
    routing::{get, post},
};
use tower_http::services::ServeDir;

use crate::error::ErrorBody;
use crate::middleware::{cors_layer, request_id_middleware, security_headers_middleware};
use crate::state::AppState;

/// Create the `/api` routes router.
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(health::health))
        .route("/products", get(products::index))
        .route("/orders", get(orders::index))
        .route("/customers", get(customers::index))
        .route("/messages", get(messages::index).post(messages::submit))
        .route("/notifications", get(notifications::index))
        .route("/notifications/{id}/read", post(notifications::mark_read))
        .route("/auth/login", post(auth::login))
        .route(
            "/upload",
            post(uploads::upload).layer(DefaultBodyLimit::max(uploads::UPLOAD_BODY_LIMIT)),
        )
        .route("/images", get(uploads::list_images))
}

/// Assemble the full application router.
///
/// Rate limiting, tracing, and the Sentry layers are wired in `main` -
/// they need connection info or process-global setup that tests don't
/// have.
pub fn router(state: AppState) -> Router {
    Router::new()
        .nest("/api", api_routes())
        .nest_service(
            "/uploads",
            ServeDir::new(state.config().upload_dir.clone()),
        )
        .fallback(not_found)
        .layer(axum::middleware::from_fn(security_headers_middleware))
        .layer(axum::middleware::from_fn(request_id_middleware))
        .layer(cors_layer(state.config()))
        .with_state(state)
}

/// 404 handler for unmatched routes.
async fn not_found() -> (StatusCode, Json<ErrorBody>) {
    (
        StatusCode::NOT_FOUND,
        Json(ErrorBody {
            success: false,
            message: "API endpoint not found".to_string(),
        }),
    )
}
