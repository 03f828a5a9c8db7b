//! Notification feed route handlers.

use axum::{Json, extract::Path};
use medilink_core::Notification;
use serde::Serialize;
use tracing::instrument;

use crate::fixtures;

/// Response for acknowledging a notification.
#[derive(Debug, Serialize)]
pub struct MarkReadResponse {
    pub success: bool,
    pub message: String,
}

/// List the notification feed.
#[instrument]
pub async fn index() -> Json<Vec<Notification>> {
    Json(fixtures::notifications())
}

/// Mark a notification as read.
///
/// The feed is rebuilt per request, so there is nothing to mutate - the
/// endpoint acknowledges the id and returns. Unknown ids succeed too.
#[instrument]
pub async fn mark_read(Path(id): Path<i64>) -> Json<MarkReadResponse> {
    Json(MarkReadResponse {
        success: true,
        message: format!("Notification {id} marked as read"),
    })
}
