//! Product catalog route handler.

use axum::Json;
use medilink_core::Product;
use tracing::instrument;

use crate::fixtures;

/// List the product catalog.
///
/// The payload is the fixed fixture set regardless of request parameters;
/// IDs 1-3 are stable.
#[instrument]
pub async fn index() -> Json<Vec<Product>> {
    Json(fixtures::products())
}
