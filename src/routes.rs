//! Top-level router configuration.
//!
//! # Route Structure
//!
//! - `POST /shorturls`              - Create a short link
//! - `GET  /shorturls/{shortcode}`  - Link statistics
//! - `GET  /{shortcode}`            - Short link redirect
//! - `GET  /-/health`               - Health check
//!
//! # Middleware
//!
//! - **Access log** - One event per request: timestamp, method, URL
//! - **Tracing** - Per-request span with response status and latency
//! - **Path normalization** - Trailing slash handling

use crate::api;
use crate::api::middleware::{access_log, tracing as trace_mw};
use crate::state::AppState;
use axum::{Router, middleware};
use tower::Layer;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};

/// Constructs the application router with all routes and middleware.
pub fn app_router(state: AppState) -> NormalizePath<Router> {
    let router = api::routes::routes()
        .with_state(state)
        .layer(trace_mw::layer())
        .layer(middleware::from_fn(access_log::layer));

    NormalizePathLayer::trim_trailing_slash().layer(router)
}
