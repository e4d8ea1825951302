//! Handler for short URL redirect.

use axum::{
    extract::{Path, State},
    http::{HeaderMap, header},
    response::Redirect,
};

use crate::domain::entities::NewClick;
use crate::error::AppError;
use crate::state::AppState;

/// Redirects a shortcode to its original URL.
///
/// # Endpoint
///
/// `GET /{shortcode}`
///
/// # Click Tracking
///
/// The click (timestamp, referrer, geo placeholder) is recorded together with
/// the counter increment before the redirect is returned. A missing or
/// non-UTF-8 `Referer` header is recorded as `"unknown"`.
///
/// # Errors
///
/// Returns 404 Not Found if the shortcode doesn't exist.
/// Returns 410 Gone if the link has expired.
pub async fn redirect_handler(
    Path(code): Path<String>,
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<Redirect, AppError> {
    let referrer = headers.get(header::REFERER).and_then(|v| v.to_str().ok());

    let original_url = state
        .link_service
        .resolve(&code, NewClick::new(referrer))
        .await?;

    Ok(Redirect::temporary(&original_url))
}
