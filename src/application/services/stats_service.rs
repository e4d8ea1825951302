//! Click statistics service.

use std::sync::Arc;

use crate::domain::repositories::{DetailedStats, StatsRepository};
use crate::error::AppError;
use serde_json::json;

/// Service for retrieving per-link click statistics.
///
/// Clicks themselves are recorded during redirect resolution (see
/// [`crate::application::services::LinkService::resolve`]); this service
/// serves the recorded history.
pub struct StatsService<R: StatsRepository> {
    repository: Arc<R>,
}

impl<R: StatsRepository> StatsService<R> {
    /// Creates a new statistics service.
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    /// Retrieves the link metadata, live click counter and full click history.
    ///
    /// Available for expired links too.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no link matches the code.
    pub async fn get_detailed_stats(&self, code: &str) -> Result<DetailedStats, AppError> {
        self.repository
            .get_stats_by_code(code)
            .await?
            .ok_or_else(|| AppError::not_found("Shortcode not found", json!({ "shortcode": code })))
    }
}
