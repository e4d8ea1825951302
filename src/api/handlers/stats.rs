//! Handler for link statistics.

use axum::{
    Json,
    extract::{Path, State},
};

use crate::api::dto::stats::StatsResponse;
use crate::error::AppError;
use crate::state::AppState;

/// Retrieves statistics for a short link.
///
/// # Endpoint
///
/// `GET /shorturls/{shortcode}`
///
/// # Response
///
/// ```json
/// {
///   "original_url": "https://example.com/",
///   "created_at": "2026-10-19T12:00:00.000000Z",
///   "expiry": "2026-10-19T12:30:00.000000Z",
///   "clicks": 1,
///   "click_data": [
///     { "timestamp": "2026-10-19T12:01:00.000000Z", "referrer": "unknown", "geo": "IN" }
///   ]
/// }
/// ```
///
/// Expired links still report their statistics.
///
/// # Errors
///
/// Returns 404 Not Found if the shortcode doesn't exist.
pub async fn stats_handler(
    State(state): State<AppState>,
    Path(code): Path<String>,
) -> Result<Json<StatsResponse>, AppError> {
    let stats = state.stats_service.get_detailed_stats(&code).await?;

    Ok(Json(StatsResponse::from(stats)))
}
