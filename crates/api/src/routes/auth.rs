//! Mock login route handler.
//!
//! Credentials are compared against the injected configuration table -
//! no hashing, no session, no expiry. A match fabricates a token the web
//! client stashes away; nothing server-side ever checks it again.

use axum::{Json, extract::State};
use chrono::Utc;
use serde::{Deserialize, Serialize};
use tracing::instrument;

use crate::error::{ApiError, Result};
use crate::state::AppState;

/// Login form data.
#[derive(Debug, Deserialize)]
pub struct LoginForm {
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub password: String,
}

/// The logged-in user as the client sees it.
#[derive(Debug, Serialize)]
pub struct LoginUser {
    pub username: String,
    pub role: String,
    pub token: String,
}

/// Response for a successful login.
#[derive(Debug, Serialize)]
pub struct LoginResponse {
    pub success: bool,
    pub user: LoginUser,
}

/// Attempt a login against the credential table.
#[instrument(skip(state, form), fields(username = %form.username))]
pub async fn login(
    State(state): State<AppState>,
    Json(form): Json<LoginForm>,
) -> Result<Json<LoginResponse>> {
    let matched = state
        .config()
        .credentials
        .get(&form.username)
        .is_some_and(|password| *password == form.password);

    if !matched {
        tracing::info!("Login rejected");
        return Err(ApiError::Unauthorized);
    }

    // The username doubles as the role name in the credential table
    let token = format!(
        "mock-token-{}-{}",
        form.username,
        Utc::now().timestamp_millis()
    );

    tracing::info!("Login accepted");

    Ok(Json(LoginResponse {
        success: true,
        user: LoginUser {
            role: form.username.clone(),
            username: form.username,
            token,
        },
    }))
}
