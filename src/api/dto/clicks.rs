//! DTOs for click event data.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::domain::entities::Click;

/// Individual click event information.
#[derive(Debug, Serialize)]
pub struct ClickInfo {
    #[serde(serialize_with = "crate::utils::timestamp::serialize")]
    pub timestamp: DateTime<Utc>,
    pub referrer: String,
    pub geo: String,
}

impl From<Click> for ClickInfo {
    fn from(click: Click) -> Self {
        Self {
            timestamp: click.timestamp,
            referrer: click.referrer,
            geo: click.geo,
        }
    }
}
