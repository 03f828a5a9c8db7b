//! API configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! ## Optional (all have defaults)
//! - `HOST` - Bind address (default: 127.0.0.1)
//! - `PORT` - Listen port (default: 5000)
//! - `FRONTEND_URL` - Allowed CORS origin (default: <http://localhost:3000>)
//! - `PUBLIC_BASE_URL` - Base URL used when building upload/image URLs
//!   (default: `http://localhost:{PORT}`)
//! - `UPLOAD_DIR` - Directory for uploaded images (default: `uploads`)
//! - `APP_ENV` - `development` (default) or `production`; production hides
//!   internal error detail from responses
//! - `STAFF_CREDENTIALS` - `user:pass,user:pass` override of the login table
//! - `CLOUDINARY_CLOUD_NAME` / `CLOUDINARY_API_KEY` / `CLOUDINARY_API_SECRET`
//!   - all three present enables the Cloudinary re-upload path
//! - `SENTRY_DSN` - Sentry error tracking DSN
//! - `SENTRY_ENVIRONMENT` - Sentry environment tag

use std::collections::HashMap;
use std::net::{IpAddr, SocketAddr};
use std::path::PathBuf;

use secrecy::SecretString;
use thiserror::Error;

/// The login table shipped with the system, used when `STAFF_CREDENTIALS`
/// is not set. Mock credentials only - there is no hashing and no real
/// account store behind them.
const DEFAULT_CREDENTIALS: &[(&str, &str)] = &[
    ("admin", "admin123"),
    ("manager", "manager123"),
    ("supervisor", "supervisor123"),
];

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Missing environment variable: {0}")]
    MissingEnvVar(String),
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// Deployment environment, the `NODE_ENV` analog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Environment {
    #[default]
    Development,
    Production,
}

impl std::str::FromStr for Environment {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "development" | "dev" => Ok(Self::Development),
            "production" | "prod" => Ok(Self::Production),
            _ => Err(format!("invalid environment: {s}")),
        }
    }
}

/// API application configuration.
#[derive(Debug, Clone)]
pub struct ApiConfig {
    /// IP address to bind the server to
    pub host: IpAddr,
    /// Port to listen on
    pub port: u16,
    /// Allowed CORS origin (the SPA)
    pub frontend_url: String,
    /// Public base URL for building upload/image URLs
    pub public_base_url: String,
    /// Directory uploaded images are written to
    pub upload_dir: PathBuf,
    /// Deployment environment
    pub environment: Environment,
    /// Login table: username -> password
    pub credentials: HashMap<String, String>,
    /// Cloudinary re-upload configuration, if fully configured
    pub cloudinary: Option<CloudinaryConfig>,
    /// Sentry DSN for error tracking
    pub sentry_dsn: Option<String>,
    /// Sentry environment tag
    pub sentry_environment: Option<String>,
}

/// Cloudinary upload API configuration.
///
/// Implements `Debug` manually to redact the API secret.
#[derive(Clone)]
pub struct CloudinaryConfig {
    /// Cloud name (appears in the upload URL)
    pub cloud_name: String,
    /// API key (sent with every request, not secret)
    pub api_key: String,
    /// API secret used to sign upload requests
    pub api_secret: SecretString,
}

impl std::fmt::Debug for CloudinaryConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CloudinaryConfig")
            .field("cloud_name", &self.cloud_name)
            .field("api_key", &self.api_key)
            .field("api_secret", &"[REDACTED]")
            .finish()
    }
}

impl ApiConfig {
    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a variable that is present fails to parse
    /// (bind address, port, URLs, environment, credential table).
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        let host = get_env_or_default("HOST", "127.0.0.1")
            .parse::<IpAddr>()
            .map_err(|e| ConfigError::InvalidEnvVar("HOST".to_string(), e.to_string()))?;
        let port = get_env_or_default("PORT", "5000")
            .parse::<u16>()
            .map_err(|e| ConfigError::InvalidEnvVar("PORT".to_string(), e.to_string()))?;

        let frontend_url = get_env_or_default("FRONTEND_URL", "http://localhost:3000");
        validate_url("FRONTEND_URL", &frontend_url)?;

        let public_base_url =
            get_env_or_default("PUBLIC_BASE_URL", &format!("http://localhost:{port}"));
        validate_url("PUBLIC_BASE_URL", &public_base_url)?;

        let upload_dir = PathBuf::from(get_env_or_default("UPLOAD_DIR", "uploads"));

        let environment = get_env_or_default("APP_ENV", "development")
            .parse::<Environment>()
            .map_err(|e| ConfigError::InvalidEnvVar("APP_ENV".to_string(), e))?;

        let credentials = match get_optional_env("STAFF_CREDENTIALS") {
            Some(raw) => parse_credentials(&raw)
                .map_err(|e| ConfigError::InvalidEnvVar("STAFF_CREDENTIALS".to_string(), e))?,
            None => default_credentials(),
        };

        let cloudinary = CloudinaryConfig::from_env();
        let sentry_dsn = get_optional_env("SENTRY_DSN");
        let sentry_environment = get_optional_env("SENTRY_ENVIRONMENT");

        Ok(Self {
            host,
            port,
            frontend_url,
            public_base_url,
            upload_dir,
            environment,
            credentials,
            cloudinary,
            sentry_dsn,
            sentry_environment,
        })
    }

    /// Returns the socket address for binding the server.
    #[must_use]
    pub const fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }

    /// Whether internal error detail should be hidden from responses.
    #[must_use]
    pub const fn is_production(&self) -> bool {
        matches!(self.environment, Environment::Production)
    }
}

impl CloudinaryConfig {
    /// Build from environment; returns `None` unless all three variables
    /// are present, in which case Cloudinary re-upload stays disabled.
    fn from_env() -> Option<Self> {
        Some(Self {
            cloud_name: get_optional_env("CLOUDINARY_CLOUD_NAME")?,
            api_key: get_optional_env("CLOUDINARY_API_KEY")?,
            api_secret: SecretString::from(get_optional_env("CLOUDINARY_API_SECRET")?),
        })
    }
}

/// The built-in login table as an owned map.
#[must_use]
pub fn default_credentials() -> HashMap<String, String> {
    DEFAULT_CREDENTIALS
        .iter()
        .map(|(user, pass)| ((*user).to_string(), (*pass).to_string()))
        .collect()
}

/// Parse a `user:pass,user:pass` credential list.
fn parse_credentials(raw: &str) -> Result<HashMap<String, String>, String> {
    let mut table = HashMap::new();
    for entry in raw.split(',') {
        let entry = entry.trim();
        if entry.is_empty() {
            continue;
        }
        let (user, pass) = entry
            .split_once(':')
            .ok_or_else(|| format!("entry '{entry}' is not user:pass"))?;
        if user.is_empty() || pass.is_empty() {
            return Err(format!("entry '{entry}' has an empty side"));
        }
        table.insert(user.to_string(), pass.to_string());
    }
    if table.is_empty() {
        return Err("credential table is empty".to_string());
    }
    Ok(table)
}

// =============================================================================
// Helper Functions
// =============================================================================

/// Get an optional environment variable.
fn get_optional_env(key: &str) -> Option<String> {
    std::env::var(key).ok()
}

/// Get an environment variable with a default value.
fn get_env_or_default(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}

/// Validate that a value parses as an absolute URL.
fn validate_url(key: &str, value: &str) -> Result<(), ConfigError> {
    url::Url::parse(value)
        .map(|_| ())
        .map_err(|e| ConfigError::InvalidEnvVar(key.to_string(), e.to_string()))
}
