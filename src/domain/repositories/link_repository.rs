//! Repository trait for short link data access.

use crate::domain::entities::{Link, NewClick, NewLink};
use crate::error::AppError;
use async_trait::async_trait;
use chrono::{DateTime, Utc};

/// Repository interface for managing short links.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::MemoryLinkRepository`] - In-memory implementation
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait LinkRepository: Send + Sync {
    /// Inserts a new link with zero clicks.
    ///
    /// The existence check and the insert are atomic: of two concurrent
    /// creations with the same code exactly one succeeds.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Conflict`] if the code already exists, whether the
    /// existing link is live or expired.
    async fn create(&self, new_link: NewLink) -> Result<Link, AppError>;

    /// Resolves a shortcode for a redirect happening at `at`.
    ///
    /// On success the click counter is incremented and `click` is appended to
    /// the link's click log as one atomic step with respect to other
    /// resolutions of the same code. On failure nothing is modified.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the code does not exist.
    /// Returns [`AppError::Expired`] if `at` is past the link's expiry.
    async fn resolve(
        &self,
        code: &str,
        click: NewClick,
        at: DateTime<Utc>,
    ) -> Result<Link, AppError>;

    /// Counts stored links, live and expired.
    async fn count(&self) -> Result<usize, AppError>;
}
