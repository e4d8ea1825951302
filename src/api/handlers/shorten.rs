//! Handler for link creation endpoint.

use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
    http::StatusCode,
};
use validator::Validate;

use crate::api::dto::shorten::{ShortenRequest, ShortenResponse};
use crate::error::AppError;
use crate::state::AppState;

/// Creates a short link.
///
/// # Endpoint
///
/// `POST /shorturls`
///
/// # Request Body
///
/// ```json
/// {
///   "url": "https://example.com",
///   "validity": 30,          // optional, minutes
///   "shortcode": "abc123"    // optional
/// }
/// ```
///
/// # Response
///
/// `201 Created`
///
/// ```json
/// {
///   "shortLink": "http://localhost:8000/abc123",
///   "expiry": "2026-10-19T12:30:00.000000Z"
/// }
/// ```
///
/// # Errors
///
/// - 400 `validation_error` for malformed JSON, an invalid URL or validity
/// - 400 `invalid_format` for a malformed shortcode
/// - 409 `conflict` if the shortcode is taken
pub async fn shorten_handler(
    State(state): State<AppState>,
    payload: Result<Json<ShortenRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<ShortenResponse>), AppError> {
    let Json(payload) = payload?;
    payload.validate()?;

    let validity = payload.validity.unwrap_or(state.default_validity_minutes);

    let created = state
        .link_service
        .create(&payload.url, validity, payload.shortcode)
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(ShortenResponse {
            short_link: created.short_link,
            expiry: created.link.expires_at,
        }),
    ))
}
