//! Security headers middleware.
//!
//! The JSON API needs far less than a server-rendered site: no CSP, no
//! permissions policy. What it does need is the usual hardening set plus
//! a deliberately loose `Cross-Origin-Resource-Policy`, because the SPA
//! runs on a different origin and loads uploaded images from `/uploads/`.

use axum::{
    extract::Request,
    http::{
        HeaderName, HeaderValue,
        header::{REFERRER_POLICY, X_CONTENT_TYPE_OPTIONS, X_FRAME_OPTIONS},
    },
    middleware::Next,
    response::Response,
};

/// Add security headers to all responses.
///
/// Headers applied:
/// - `X-Content-Type-Options: nosniff` - Prevent MIME sniffing
/// - `X-Frame-Options: SAMEORIGIN` - Prevent cross-site framing
/// - `Referrer-Policy: no-referrer` - Zero referrer leakage
/// - `Cross-Origin-Resource-Policy: cross-origin` - Allow the SPA origin
///   to embed uploaded images
/// - `X-DNS-Prefetch-Control: off`
pub async fn security_headers_middleware(request: Request, next: Next) -> Response {
    let mut response = next.run(request).await;
    let headers = response.headers_mut();

    headers.insert(X_CONTENT_TYPE_OPTIONS, HeaderValue::from_static("nosniff"));
    headers.insert(X_FRAME_OPTIONS, HeaderValue::from_static("SAMEORIGIN"));
    headers.insert(REFERRER_POLICY, HeaderValue::from_static("no-referrer"));

    // Uploaded images are served to the SPA on another origin
    headers.insert(
        HeaderName::from_static("cross-origin-resource-policy"),
        HeaderValue::from_static("cross-origin"),
    );

    headers.insert(
        HeaderName::from_static("x-dns-prefetch-control"),
        HeaderValue::from_static("off"),
    );

    response
}
