//! Order list route handler.

use axum::Json;
use medilink_core::Order;
use tracing::instrument;

use crate::fixtures;

/// List orders.
#[instrument]
pub async fn index() -> Json<Vec<Order>> {
    Json(fixtures::orders())
}
