//! Application state shared across handlers.

use std::sync::Arc;

use crate::config::ApiConfig;
use crate::services::cloudinary::CloudinaryClient;

/// Application state shared across all handlers.
///
/// This struct is cheaply cloneable via `Arc`. There is deliberately no
/// database pool and no shared mutable data here: every request rebuilds
/// its mock payload, so the only shared resources are the configuration
/// and the optional Cloudinary client.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    config: ApiConfig,
    cloudinary: Option<CloudinaryClient>,
}

impl AppState {
    /// Create a new application state.
    ///
    /// Builds the Cloudinary client when the configuration carries a full
    /// set of Cloudinary credentials.
    ///
    /// # Errors
    ///
    /// Returns an error if the Cloudinary HTTP client fails to build.
    pub fn new(config: ApiConfig) -> Result<Self, crate::services::cloudinary::CloudinaryError> {
        let cloudinary = config
            .cloudinary
            .as_ref()
            .map(CloudinaryClient::new)
            .transpose()?;

        Ok(Self {
            inner: Arc::new(AppStateInner { config, cloudinary }),
        })
    }

    /// Get a reference to the API configuration.
    #[must_use]
    pub fn config(&self) -> &ApiConfig {
        &self.inner.config
    }

    /// Get the Cloudinary client, if configured.
    #[must_use]
    pub fn cloudinary(&self) -> Option<&CloudinaryClient> {
        self.inner.cloudinary.as_ref()
    }
}
