//! Customer list route handler.

use axum::Json;
use medilink_core::Customer;
use tracing::instrument;

use crate::fixtures;

/// List customers.
#[instrument]
pub async fn index() -> Json<Vec<Customer>> {
    Json(fixtures::customers())
}
