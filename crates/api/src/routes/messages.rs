//! Contact-message route handlers.
//!
//! The inbox is a fixture; submissions are validated, assembled into a
//! record, echoed back, and forgotten. Nothing reaches a database or an
//! outbox.

use axum::Json;
use chrono::Utc;
use medilink_core::{ContactMessage, MessageId, MessageStatus};
use serde::{Deserialize, Serialize};
use tracing::instrument;

use crate::error::{ApiError, Result};
use crate::fixtures;

/// Contact form submission.
///
/// Fields default to empty strings so an absent field fails the same
/// presence check an empty one does, instead of bouncing at
/// deserialization.
#[derive(Debug, Deserialize)]
pub struct SubmitMessageForm {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub subject: String,
    #[serde(default)]
    pub message: String,
}

/// Response for a successful submission.
#[derive(Debug, Serialize)]
pub struct SubmitMessageResponse {
    pub success: bool,
    pub message: &'static str,
    pub data: ContactMessage,
}

/// List the contact-message inbox.
#[instrument]
pub async fn index() -> Json<Vec<ContactMessage>> {
    Json(fixtures::messages())
}

/// Submit a contact message.
///
/// All four fields must be present and non-empty (after trimming); the
/// check is presence-only, so a syntactically odd email still passes.
#[instrument(skip(form), fields(email = %form.email))]
pub async fn submit(Json(form): Json<SubmitMessageForm>) -> Result<Json<SubmitMessageResponse>> {
    let name = form.name.trim();
    let email = form.email.trim();
    let subject = form.subject.trim();
    let message = form.message.trim();

    if name.is_empty() || email.is_empty() || subject.is_empty() || message.is_empty() {
        return Err(ApiError::BadRequest("All fields are required".to_string()));
    }

    let now = Utc::now();
    let record = ContactMessage {
        id: MessageId::new(now.timestamp_millis()),
        name: name.to_owned(),
        email: email.to_owned(),
        subject: subject.to_owned(),
        message: message.to_owned(),
        timestamp: now,
        status: MessageStatus::Unread,
    };

    tracing::info!(subject = %record.subject, "Contact message received");

    Ok(Json(SubmitMessageResponse {
        success: true,
        message: "Message sent successfully",
        data: record,
    }))
}
