//! Repository trait definitions for the domain layer.
//!
//! These traits abstract data access following the Repository pattern and are
//! implemented in `crate::infrastructure::persistence`.
//!
//! # Available Repositories
//!
//! - [`LinkRepository`] - Link creation, lookup, and redirect resolution
//! - [`StatsRepository`] - Click history and per-link statistics
//!
//! # Testing
//!
//! Mock implementations are auto-generated via `mockall` for unit tests.
//! See `tests/repository_memory.rs` for the in-memory implementation.

pub mod link_repository;
pub mod stats_repository;

pub use link_repository::LinkRepository;
pub use stats_repository::{DetailedStats, StatsRepository};

#[cfg(test)]
pub use link_repository::MockLinkRepository;
#[cfg(test)]
pub use stats_repository::MockStatsRepository;
