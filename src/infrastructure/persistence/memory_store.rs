//! Shared keyed store backing every repository.

use chrono::{DateTime, Utc};
use dashmap::DashMap;
use dashmap::mapref::entry::Entry;
use serde_json::json;

use crate::domain::click_log::ClickLog;
use crate::domain::entities::{Link, NewClick, NewLink};
use crate::domain::repositories::DetailedStats;
use crate::error::AppError;

/// A link together with its click history.
///
/// Both halves are stored under one map key so that a redirect can update
/// them under a single entry guard.
#[derive(Debug, Clone)]
struct LinkRecord {
    link: Link,
    click_log: ClickLog,
}

impl LinkRecord {
    fn new(link: Link) -> Self {
        Self {
            link,
            click_log: ClickLog::new(),
        }
    }

    fn snapshot(&self) -> DetailedStats {
        DetailedStats {
            link: self.link.clone(),
            items: self.click_log.events().to_vec(),
        }
    }
}

/// Concurrent map from shortcode to link record.
///
/// Backed by `DashMap`, whose sharded locks give every operation on a single
/// key exclusive (writes) or shared (reads) access for its duration. Codes are
/// never removed, so an expired code stays taken.
#[derive(Debug, Default)]
pub struct MemoryStore {
    links: DashMap<String, LinkRecord>,
}

impl MemoryStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty store with room for `capacity` links.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            links: DashMap::with_capacity(capacity),
        }
    }

    /// Inserts a link unless its code is already present.
    pub fn insert(&self, new_link: NewLink) -> Result<Link, AppError> {
        match self.links.entry(new_link.code.clone()) {
            Entry::Occupied(_) => Err(AppError::conflict(
                "Shortcode already exists",
                json!({ "shortcode": new_link.code }),
            )),
            Entry::Vacant(vacant) => {
                let link = Link::from(new_link);
                vacant.insert(LinkRecord::new(link.clone()));
                Ok(link)
            }
        }
    }

    /// Checks expiry, bumps the counter and appends the click under the
    /// entry's write guard.
    pub fn resolve(
        &self,
        code: &str,
        click: NewClick,
        at: DateTime<Utc>,
    ) -> Result<Link, AppError> {
        let mut record = self.links.get_mut(code).ok_or_else(|| {
            AppError::not_found("Shortcode not found", json!({ "shortcode": code }))
        })?;

        if record.link.is_expired_at(at) {
            return Err(AppError::expired(
                "Link expired",
                json!({ "shortcode": code, "expired_at": record.link.expires_at }),
            ));
        }

        record.link.clicks += 1;
        record.click_log.record(click.at(at));

        Ok(record.link.clone())
    }

    /// Returns a consistent copy of the link and its click history.
    pub fn stats(&self, code: &str) -> Option<DetailedStats> {
        self.links.get(code).map(|record| record.snapshot())
    }

    pub fn len(&self) -> usize {
        self.links.len()
    }

    pub fn is_empty(&self) -> bool {
        self.links.is_empty()
    }
}
