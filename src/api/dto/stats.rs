//! DTOs for link statistics.

use chrono::{DateTime, Utc};
use serde::Serialize;

use super::clicks::ClickInfo;
use crate::domain::repositories::DetailedStats;

/// Statistics for a single short link.
///
/// `clicks` always equals `click_data.len()`.
#[derive(Debug, Serialize)]
pub struct StatsResponse {
    pub original_url: String,

    #[serde(serialize_with = "crate::utils::timestamp::serialize")]
    pub created_at: DateTime<Utc>,

    #[serde(serialize_with = "crate::utils::timestamp::serialize")]
    pub expiry: DateTime<Utc>,

    pub clicks: u64,
    pub click_data: Vec<ClickInfo>,
}

impl From<DetailedStats> for StatsResponse {
    fn from(stats: DetailedStats) -> Self {
        Self {
            original_url: stats.link.original_url,
            created_at: stats.link.created_at,
            expiry: stats.link.expires_at,
            clicks: stats.link.clicks,
            click_data: stats.items.into_iter().map(ClickInfo::from).collect(),
        }
    }
}
