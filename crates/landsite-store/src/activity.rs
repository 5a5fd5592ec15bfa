//! Recent activity feed
//!
//! Every successful save or delete records one entry describing what
//! happened, in plain words, for the dashboard's "recent activity" panel.

use landsite_core::ActivityLogEntry;
use parking_lot::RwLock;
use tracing::debug;

/// Receiver of activity entries.
pub trait ActivitySink: Send + Sync {
    /// Record one entry.
    fn record(&self, entry: ActivityLogEntry);
}

/// In-memory activity feed, oldest entry first.
#[derive(Debug, Default)]
pub struct ActivityLog {
    entries: RwLock<Vec<ActivityLogEntry>>,
}

impl ActivityLog {
    /// Create an empty log.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of recorded entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.read().len()
    }

    /// Whether nothing has been recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.read().is_empty()
    }

    /// Every entry in recording order.
    #[must_use]
    pub fn entries(&self) -> Vec<ActivityLogEntry> {
        self.entries.read().clone()
    }

    /// The most recent `limit` entries, newest first.
    #[must_use]
    pub fn recent(&self, limit: usize) -> Vec<ActivityLogEntry> {
        self.entries
            .read()
            .iter()
            .rev()
            .take(limit)
            .cloned()
            .collect()
    }
}

impl ActivitySink for ActivityLog {
    fn record(&self, entry: ActivityLogEntry) {
        debug!(
            action = %entry.action,
            kind = %entry.entity_kind,
            "activity recorded"
        );
        self.entries.write().push(entry);
    }
}
