//! Shared application state injected into every handler.

use std::sync::Arc;

use crate::application::services::{LinkService, StatsService};
use crate::infrastructure::persistence::{
    MemoryLinkRepository, MemoryStatsRepository, MemoryStore,
};

/// Validity window applied when a create request omits `validity`.
pub const DEFAULT_VALIDITY_MINUTES: u32 = 30;

/// Handles to the services, all sharing one [`MemoryStore`].
///
/// Cloning is cheap; every clone points at the same store.
#[derive(Clone)]
pub struct AppState {
    pub link_service: Arc<LinkService<MemoryLinkRepository>>,
    pub stats_service: Arc<StatsService<MemoryStatsRepository>>,
    pub default_validity_minutes: u32,
}

impl AppState {
    /// Wires the services over an existing store.
    pub fn new(store: Arc<MemoryStore>, base_url: impl Into<String>) -> Self {
        let link_repository = Arc::new(MemoryLinkRepository::new(store.clone()));
        let stats_repository = Arc::new(MemoryStatsRepository::new(store));

        Self {
            link_service: Arc::new(LinkService::new(link_repository, base_url)),
            stats_service: Arc::new(StatsService::new(stats_repository)),
            default_validity_minutes: DEFAULT_VALIDITY_MINUTES,
        }
    }

    /// Overrides the validity window used when requests omit one.
    pub fn with_default_validity(mut self, minutes: u32) -> Self {
        self.default_validity_minutes = minutes;
        self
    }
}
