//! Image upload route handlers.
//!
//! Uploads land on local disk under the configured upload directory with
//! timestamp-prefixed filenames, so concurrent uploads never collide.
//! There is no cleanup, quota, or eviction - the directory only grows.

use std::path::Path;

use axum::{
    Json,
    extract::{Multipart, State},
};
use chrono::{DateTime, Utc};
use serde::Serialize;
use tracing::instrument;

use crate::error::{ApiError, Result};
use crate::state::AppState;

/// Maximum accepted image size.
pub const MAX_UPLOAD_BYTES: usize = 5 * 1024 * 1024;

/// Request body cap for the upload route. Slightly above the image limit
/// so the handler's own size check produces the 400, not the body layer.
pub const UPLOAD_BODY_LIMIT: usize = MAX_UPLOAD_BYTES + 1024 * 1024;

const ALLOWED_EXTENSIONS: [&str; 4] = ["jpg", "jpeg", "png", "gif"];

/// Response for a successful upload.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UploadResponse {
    pub success: bool,
    pub image_url: String,
    pub local_path: String,
    pub message: &'static str,
}

/// One entry of the uploaded-image listing.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UploadedImage {
    pub filename: String,
    pub url: String,
    pub uploaded_at: DateTime<Utc>,
}

/// Accept a multipart image upload.
///
/// Expects a single `image` field, <= 5 MB, with a jpg/jpeg/png/gif
/// extension and a matching declared MIME type (both checked by name
/// only - the bytes are not inspected). The file is written locally and,
/// when Cloudinary is configured, re-uploaded there; the hosted URL wins
/// when the re-upload succeeds.
#[instrument(skip(state, multipart))]
pub async fn upload(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Json<UploadResponse>> {
    let mut file = None;
    while let Some(field) = multipart.next_field().await? {
        if field.name() != Some("image") {
            continue;
        }
        let original_name = field.file_name().unwrap_or("upload").to_owned();
        let content_type = field.content_type().unwrap_or_default().to_owned();
        let data = field.bytes().await?;
        file = Some((original_name, content_type, data));
        break;
    }

    let Some((original_name, content_type, data)) = file else {
        return Err(ApiError::BadRequest("No file uploaded".to_string()));
    };

    if image_extension(&original_name).is_none() || !is_image_mime(&content_type) {
        return Err(ApiError::BadRequest(
            "Only image files are allowed!".to_string(),
        ));
    }

    if data.len() > MAX_UPLOAD_BYTES {
        return Err(ApiError::BadRequest(
            "File exceeds the 5MB upload limit".to_string(),
        ));
    }

    let filename = format!(
        "{}-{}",
        Utc::now().timestamp_millis(),
        sanitize_filename(&original_name)
    );

    let upload_dir = &state.config().upload_dir;
    tokio::fs::create_dir_all(upload_dir).await?;
    tokio::fs::write(upload_dir.join(&filename), &data).await?;

    let local_path = format!("/uploads/{filename}");
    let mut image_url = format!(
        "{}{local_path}",
        state.config().public_base_url.trim_end_matches('/')
    );

    // Optional re-upload to the hosted media library. Failure falls back
    // to the local URL rather than failing a request whose file is
    // already safely on disk.
    if let Some(client) = state.cloudinary() {
        let public_id = filename
            .rsplit_once('.')
            .map_or(filename.as_str(), |(stem, _)| stem);
        match client.upload_image(data.to_vec(), public_id).await {
            Ok(hosted_url) => image_url = hosted_url,
            Err(e) => {
                tracing::warn!(error = %e, "Cloudinary re-upload failed, serving local URL");
            }
        }
    }

    tracing::info!(filename = %filename, size = data.len(), "Image uploaded");

    Ok(Json(UploadResponse {
        success: true,
        image_url,
        local_path,
        message: "Image uploaded successfully",
    }))
}

/// List the images currently in the upload directory.
///
/// A missing directory means nothing has been uploaded yet - that is an
/// empty listing, not an error. `uploadedAt` is the filesystem mtime.
#[instrument(skip(state))]
pub async fn list_images(State(state): State<AppState>) -> Result<Json<Vec<UploadedImage>>> {
    let upload_dir = &state.config().upload_dir;

    let mut entries = match tokio::fs::read_dir(upload_dir).await {
        Ok(entries) => entries,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Json(Vec::new())),
        Err(e) => return Err(e.into()),
    };

    let base = state.config().public_base_url.trim_end_matches('/');
    let mut images = Vec::new();

    while let Some(entry) = entries.next_entry().await? {
        let filename = entry.file_name().to_string_lossy().into_owned();
        if image_extension(&filename).is_none() {
            continue;
        }
        let modified = entry.metadata().await?.modified()?;
        images.push(UploadedImage {
            url: format!("{base}/uploads/{filename}"),
            uploaded_at: modified.into(),
            filename,
        });
    }

    Ok(Json(images))
}

/// The lowercased extension of `name`, if it is an allowed image type.
fn image_extension(name: &str) -> Option<String> {
    let extension = Path::new(name).extension()?.to_str()?.to_lowercase();
    ALLOWED_EXTENSIONS
        .contains(&extension.as_str())
        .then_some(extension)
}

/// Whether a declared MIME type names an allowed image format.
fn is_image_mime(content_type: &str) -> bool {
    let content_type = content_type.to_lowercase();
    ["jpeg", "jpg", "png", "gif"]
        .iter()
        .any(|kind| content_type.contains(kind))
}

/// Reduce an uploaded filename to a single safe path component.
///
/// Anything outside `[A-Za-z0-9._-]` becomes `_`, which also flattens
/// directory separators out of hostile names.
fn sanitize_filename(name: &str) -> String {
    let sanitized: String = name
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || matches!(c, '.' | '-' | '_') {
                c
            } else {
                '_'
            }
        })
        .collect();

    if sanitized.trim_matches(['.', '_']).is_empty() {
        "upload".to_string()
    } else {
        sanitized
    }
}
