//! Click entity representing a single redirect event.

use chrono::{DateTime, Utc};

/// Referrer recorded when the inbound request carries no `Referer` header.
pub const UNKNOWN_REFERRER: &str = "unknown";

/// Geo value stamped on every click. No geolocation lookup is performed.
pub const GEO_PLACEHOLDER: &str = "IN";

/// A click recorded when a short link is successfully redirected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Click {
    pub timestamp: DateTime<Utc>,
    pub referrer: String,
    pub geo: String,
}

impl Click {
    /// Creates a new Click instance.
    pub fn new(timestamp: DateTime<Utc>, referrer: String, geo: String) -> Self {
        Self {
            timestamp,
            referrer,
            geo,
        }
    }
}

/// Request metadata captured by the redirect handler.
///
/// Carries no timestamp. The caller of the repository's `resolve` supplies
/// the instant, which is also the instant the expiry check is evaluated
/// against, and the store stamps it onto the recorded [`Click`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewClick {
    pub referrer: Option<String>,
    pub geo: String,
}

impl NewClick {
    /// Builds click metadata, stamping the fixed geo placeholder.
    pub fn new(referrer: Option<&str>) -> Self {
        Self {
            referrer: referrer.map(|s| s.to_string()),
            geo: GEO_PLACEHOLDER.to_string(),
        }
    }

    /// Finalizes the click at `timestamp`, defaulting a missing referrer.
    pub fn at(self, timestamp: DateTime<Utc>) -> Click {
        Click::new(
            timestamp,
            self.referrer
                .unwrap_or_else(|| UNKNOWN_REFERRER.to_string()),
            self.geo,
        )
    }
}
