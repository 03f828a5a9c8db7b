//! Cloudinary upload API client.
//!
//! Uploaded images are always written to local disk first; when Cloudinary
//! credentials are configured, the file is additionally pushed to the
//! hosted media library and the hosted URL is handed back to the client.

use chrono::Utc;
use reqwest::multipart::{Form, Part};
use secrecy::ExposeSecret;
use serde::Deserialize;
use sha2::{Digest, Sha256};
use thiserror::Error;

use crate::config::CloudinaryConfig;

/// Cloudinary upload API base URL.
const BASE_URL: &str = "https://api.cloudinary.com/v1_1";

/// Errors that can occur when talking to Cloudinary.
#[derive(Debug, Error)]
pub enum CloudinaryError {
    /// HTTP request failed.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// API returned an error response.
    #[error("API error: {status} - {message}")]
    Api { status: u16, message: String },

    /// Failed to parse the upload response.
    #[error("Parse error: {0}")]
    Parse(String),
}

/// Successful upload response, reduced to the field we use.
#[derive(Debug, Deserialize)]
struct UploadResult {
    secure_url: String,
}

/// Cloudinary API client for image re-uploads.
#[derive(Clone)]
pub struct CloudinaryClient {
    client: reqwest::Client,
    cloud_name: String,
    api_key: String,
    api_secret: String,
}

impl CloudinaryClient {
    /// Create a new Cloudinary API client.
    ///
    /// # Errors
    ///
    /// Returns error if the HTTP client fails to build.
    pub fn new(config: &CloudinaryConfig) -> Result<Self, CloudinaryError> {
        let client = reqwest::Client::builder().build()?;

        Ok(Self {
            client,
            cloud_name: config.cloud_name.clone(),
            api_key: config.api_key.clone(),
            api_secret: config.api_secret.expose_secret().to_owned(),
        })
    }

    /// Sign an upload request.
    ///
    /// Cloudinary signatures are a hash over the alphabetically sorted
    /// request parameters (minus `file`, `api_key`, and the signature
    /// itself) with the API secret appended. We send `public_id` and
    /// `timestamp`, so the string to sign is exactly those two.
    fn signature(&self, public_id: &str, timestamp: i64) -> String {
        let to_sign = format!(
            "public_id={public_id}&timestamp={timestamp}{}",
            self.api_secret
        );
        hex::encode(Sha256::digest(to_sign.as_bytes()))
    }

    /// Upload image bytes and return the hosted (`secure_url`) location.
    ///
    /// `public_id` should be the filename without its extension; Cloudinary
    /// derives the delivery format itself.
    ///
    /// # Errors
    ///
    /// Returns error if the request fails, the API rejects the upload, or
    /// the response cannot be parsed.
    pub async fn upload_image(
        &self,
        bytes: Vec<u8>,
        public_id: &str,
    ) -> Result<String, CloudinaryError> {
        let timestamp = Utc::now().timestamp();
        let signature = self.signature(public_id, timestamp);

        let form = Form::new()
            .part("file", Part::bytes(bytes).file_name(public_id.to_owned()))
            .text("api_key", self.api_key.clone())
            .text("public_id", public_id.to_owned())
            .text("timestamp", timestamp.to_string())
            .text("signature_algorithm", "sha256")
            .text("signature", signature);

        let url = format!("{BASE_URL}/{}/image/upload", self.cloud_name);
        let response = self.client.post(&url).multipart(form).send().await?;
        let status = response.status();

        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(CloudinaryError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let result: UploadResult = response
            .json()
            .await
            .map_err(|e| CloudinaryError::Parse(e.to_string()))?;

        Ok(result.secure_url)
    }
}
