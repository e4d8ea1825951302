//! Repository trait for click statistics.

use crate::domain::entities::{Click, Link};
use crate::error::AppError;
use async_trait::async_trait;

/// Detailed statistics with individual click records.
///
/// A consistent snapshot: `link.clicks == items.len()`.
#[derive(Debug, Clone)]
pub struct DetailedStats {
    pub link: Link,
    pub items: Vec<Click>,
}

/// Repository interface for click history.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::MemoryStatsRepository`] - In-memory implementation
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait StatsRepository: Send + Sync {
    /// Returns the link and its full click history, oldest click first.
    ///
    /// Expired links are included.
    ///
    /// # Returns
    ///
    /// - `Ok(Some(DetailedStats))` if the code exists
    /// - `Ok(None)` if not found
    async fn get_stats_by_code(&self, code: &str) -> Result<Option<DetailedStats>, AppError>;
}
