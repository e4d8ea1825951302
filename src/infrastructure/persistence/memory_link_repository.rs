//! In-memory implementation of link repository.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use std::sync::Arc;
use tracing::debug;

use crate::domain::entities::{Link, NewClick, NewLink};
use crate::domain::repositories::LinkRepository;
use crate::error::AppError;
use crate::infrastructure::persistence::MemoryStore;

/// Link repository over the shared [`MemoryStore`].
pub struct MemoryLinkRepository {
    store: Arc<MemoryStore>,
}

impl MemoryLinkRepository {
    /// Creates a new repository over a shared store.
    pub fn new(store: Arc<MemoryStore>) -> Self {
        Self { store }
    }
}

#[async_trait]
impl LinkRepository for MemoryLinkRepository {
    async fn create(&self, new_link: NewLink) -> Result<Link, AppError> {
        let link = self.store.insert(new_link)?;
        debug!(code = %link.code, expires_at = %link.expires_at, "Link stored");
        Ok(link)
    }

    async fn resolve(
        &self,
        code: &str,
        click: NewClick,
        at: DateTime<Utc>,
    ) -> Result<Link, AppError> {
        self.store.resolve(code, click, at)
    }

    async fn count(&self) -> Result<usize, AppError> {
        Ok(self.store.len())
    }
}
