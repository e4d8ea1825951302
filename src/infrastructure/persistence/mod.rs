//! In-memory repository implementations.
//!
//! All repositories share one [`MemoryStore`], created once at startup and
//! handed around as `Arc<MemoryStore>`. State lives for the lifetime of the
//! process and is lost on shutdown.
//!
//! # Repositories
//!
//! - [`MemoryLinkRepository`] - Link creation and redirect resolution
//! - [`MemoryStatsRepository`] - Click history queries

pub mod memory_link_repository;
pub mod memory_stats_repository;
pub mod memory_store;

pub use memory_link_repository::MemoryLinkRepository;
pub use memory_stats_repository::MemoryStatsRepository;
pub use memory_store::MemoryStore;
