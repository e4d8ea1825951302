//! Application layer services implementing business logic.
//!
//! Services consume repository traits and provide a clean API for HTTP
//! handlers.
//!
//! # Available Services
//!
//! - [`services::link_service::LinkService`] - Link registry: create and resolve
//! - [`services::stats_service::StatsService`] - Click history and statistics

pub mod services;
