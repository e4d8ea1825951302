//! API route configuration.

use crate::api::handlers::{health_handler, redirect_handler, shorten_handler, stats_handler};
use crate::state::AppState;
use axum::{
    Router,
    routing::{get, post},
};

/// All public routes.
///
/// # Endpoints
///
/// - `POST /shorturls`              - Create a short link
/// - `GET  /shorturls/{shortcode}`  - Statistics for a short link
/// - `GET  /{shortcode}`            - Redirect to the original URL
/// - `GET  /-/health`               - Health check
///
/// The health route lives under a non-alphanumeric prefix so it can never
/// shadow a shortcode.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/shorturls", post(shorten_handler))
        .route("/shorturls/{shortcode}", get(stats_handler))
        .route("/-/health", get(health_handler))
        .route("/{shortcode}", get(redirect_handler))
}
