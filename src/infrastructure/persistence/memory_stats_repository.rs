//! In-memory implementation of stats repository.

use async_trait::async_trait;
use std::sync::Arc;

use crate::domain::repositories::{DetailedStats, StatsRepository};
use crate::error::AppError;
use crate::infrastructure::persistence::MemoryStore;

/// Stats repository over the shared [`MemoryStore`].
pub struct MemoryStatsRepository {
    store: Arc<MemoryStore>,
}

impl MemoryStatsRepository {
    /// Creates a new repository over a shared store.
    pub fn new(store: Arc<MemoryStore>) -> Self {
        Self { store }
    }
}

#[async_trait]
impl StatsRepository for MemoryStatsRepository {
    async fn get_stats_by_code(&self, code: &str) -> Result<Option<DetailedStats>, AppError> {
        Ok(self.store.stats(code))
    }
}
