//! HTTP middleware stack for the API service.
//!
//! # Middleware Order (bottom to top in Router)
//!
//! 1. Sentry layer (capture errors)
//! 2. `TraceLayer` (request logging)
//! 3. Rate limiting (governor, blanket 100 req / 15 min per IP)
//! 4. Request ID (add unique ID to each request)
//! 5. CORS (single allowed SPA origin)
//! 6. Security headers

pub mod rate_limit;
pub mod request_id;
pub mod security_headers;

pub use rate_limit::api_rate_limiter;
pub use request_id::request_id_middleware;
pub use security_headers::security_headers_middleware;

use axum::http::{HeaderValue, Method, header::CONTENT_TYPE};
use tower_http::cors::{AllowOrigin, CorsLayer};

use crate::config::ApiConfig;

/// Build the CORS layer for the configured frontend origin.
///
/// Credentials are allowed, so the origin must be exact - wildcards are
/// rejected by tower-http in that combination. An origin that fails to
/// parse as a header value (already validated at config load) falls back
/// to a mirrored origin.
pub fn cors_layer(config: &ApiConfig) -> CorsLayer {
    let origin = HeaderValue::from_str(&config.frontend_url)
        .map_or_else(|_| AllowOrigin::mirror_request(), AllowOrigin::exact);

    CorsLayer::new()
        .allow_origin(origin)
        .allow_methods([Method::GET, Method::POST])
        .allow_headers([CONTENT_TYPE])
        .allow_credentials(true)
}
