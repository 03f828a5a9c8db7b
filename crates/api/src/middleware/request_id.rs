//! Request ID middleware for log correlation.
//!
//! Each request gets a unique ID: the upstream `x-request-id` header when
//! a proxy already assigned one, a fresh UUID v4 otherwise. The ID is
//! stored in the request extensions, tagged onto the Sentry scope, and
//! echoed in the response headers.

use axum::{extract::Request, http::HeaderValue, middleware::Next, response::Response};
use uuid::Uuid;

/// The HTTP header name for request IDs.
pub const REQUEST_ID_HEADER: &str = "x-request-id";

/// A request's correlation ID, readable from handler extensions.
#[derive(Debug, Clone)]
pub struct RequestId(pub String);

/// Middleware that ensures every request has a unique request ID.
pub async fn request_id_middleware(mut request: Request, next: Next) -> Response {
    let request_id = request
        .headers()
        .get(REQUEST_ID_HEADER)
        .and_then(|h| h.to_str().ok())
        .map_or_else(|| Uuid::new_v4().to_string(), String::from);

    request
        .extensions_mut()
        .insert(RequestId(request_id.clone()));

    // Tag the Sentry scope so captured errors carry the ID
    sentry::configure_scope(|scope| {
        scope.set_tag("request_id", &request_id);
    });

    let mut response = next.run(request).await;

    if let Ok(value) = HeaderValue::from_str(&request_id) {
        response.headers_mut().insert(REQUEST_ID_HEADER, value);
    }

    response
}
