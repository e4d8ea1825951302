//! Append-only click history for a single shortcode.

use crate::domain::entities::Click;

/// Ordered, append-only sequence of clicks belonging to one link.
///
/// There is no removal API: the log only grows, in redirect order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClickLog {
    events: Vec<Click>,
}

impl ClickLog {
    /// Creates an empty click log.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a click, preserving insertion order.
    pub fn record(&mut self, click: Click) {
        self.events.push(click);
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Recorded clicks, oldest first.
    pub fn events(&self) -> &[Click] {
        &self.events
    }
}
