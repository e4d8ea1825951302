//! Access log middleware.
//!
//! Emits one `info` event per inbound request with the request timestamp,
//! method and URL. The event is written before the request is dispatched, so
//! it is independent of the handler's outcome, and logging never alters or
//! fails the response.

use axum::{extract::Request, middleware::Next, response::Response};
use chrono::Utc;

use crate::utils::timestamp::format_utc;

/// Logs `[timestamp] METHOD request to URL` and forwards the request.
///
/// # Example Logs
///
/// ```text
/// INFO access: [2026-10-19T12:00:00.000000Z] GET request to /abc123 timestamp=... method=GET url=/abc123
/// ```
pub async fn layer(req: Request, next: Next) -> Response {
    let timestamp = format_utc(&Utc::now());
    let method = req.method().clone();
    let url = req.uri().to_string();

    tracing::info!(
        target: "access",
        timestamp = %timestamp,
        method = %method,
        url = %url,
        "[{timestamp}] {method} request to {url}"
    );

    next.run(req).await
}
