//! # Link Shortener
//!
//! An in-memory URL shortening service built with Axum: it turns a long URL
//! into a short, time-limited alias that redirects to it, and records click
//! analytics for every redirect.
//!
//! ## Architecture
//!
//! - **Domain Layer** ([`domain`]) - Entities, click log, and repository traits
//! - **Application Layer** ([`application`]) - Link registry and stats services
//! - **Infrastructure Layer** ([`infrastructure`]) - The shared in-memory store
//! - **API Layer** ([`api`]) - REST handlers, DTOs, and middleware
//!
//! ## Features
//!
//! - Random or caller-chosen alphanumeric shortcodes (never reused)
//! - Per-link validity window; expired links answer `410 Gone`
//! - Click counter and click history updated atomically per redirect
//! - Structured request logging
//!
//! ## Quick Start
//!
//! ```bash
//! export BASE_URL="http://localhost:8000"
//! cargo run
//! ```
//!
//! ## Configuration
//!
//! Service configuration is loaded from environment variables via [`config::Config`].
//! See [`config`] module for available options.

pub mod api;
pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod state;
pub mod utils;

pub mod config;
pub mod server;

pub mod routes;

pub use error::AppError;
pub use state::AppState;

/// Commonly used types for external consumers.
///
/// Re-exports frequently used types to simplify imports for library users
/// and integration tests.
pub mod prelude {
    pub use crate::application::services::{CreatedLink, LinkService, StatsService};
    pub use crate::domain::entities::{Click, Link, NewClick, NewLink};
    pub use crate::error::AppError;
    pub use crate::infrastructure::persistence::MemoryStore;
    pub use crate::state::AppState;
}
