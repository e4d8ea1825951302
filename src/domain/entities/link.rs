//! Link entity representing a shortcode mapping.

use chrono::{DateTime, Utc};

/// A shortened link with its validity window and click counter.
///
/// `original_url`, `created_at` and `expires_at` never change after creation.
/// `clicks` only grows, and only through a successful redirect.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Link {
    pub code: String,
    pub original_url: String,
    pub created_at: DateTime<Utc>,
    pub expires_at: DateTime<Utc>,
    pub clicks: u64,
}

impl Link {
    /// Creates a new Link instance.
    pub fn new(
        code: String,
        original_url: String,
        created_at: DateTime<Utc>,
        expires_at: DateTime<Utc>,
        clicks: u64,
    ) -> Self {
        Self {
            code,
            original_url,
            created_at,
            expires_at,
            clicks,
        }
    }

    /// Returns true if the link is past its expiry at `now`.
    ///
    /// The expiry instant itself is still live.
    pub fn is_expired_at(&self, now: DateTime<Utc>) -> bool {
        now > self.expires_at
    }
}

/// Input data for creating a new link.
#[derive(Debug, Clone)]
pub struct NewLink {
    pub code: String,
    pub original_url: String,
    pub created_at: DateTime<Utc>,
    pub expires_at: DateTime<Utc>,
}

impl From<NewLink> for Link {
    fn from(new_link: NewLink) -> Self {
        Link::new(
            new_link.code,
            new_link.original_url,
            new_link.created_at,
            new_link.expires_at,
            0,
        )
    }
}
