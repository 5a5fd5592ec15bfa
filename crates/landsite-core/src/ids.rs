//! Local identifier generation for list entries
//!
//! Entries inside a document's ordered lists need an identity that survives
//! reordering before the document has ever been saved. Ids minted here are
//! unique within one editing session, not across reloads; persistent
//! identity comes from the server once the document is stored.

use chrono::Utc;
use std::sync::atomic::{AtomicU64, Ordering};

/// Source of session-unique local ids and timestamps.
#[derive(Debug, Default)]
pub struct LocalIdSource {
    counter: AtomicU64,
}

impl LocalIdSource {
    /// Create a fresh source with its counter at zero.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            counter: AtomicU64::new(0),
        }
    }

    /// Mint the next local id, e.g. `1756082400000-17`.
    ///
    /// Ids combine the current wall-clock milliseconds with a
    /// monotonically increasing counter, so two calls in the same
    /// millisecond still differ.
    #[must_use]
    pub fn next_id(&self) -> String {
        let count = self.counter.fetch_add(1, Ordering::Relaxed);
        format!("{}-{count}", Utc::now().timestamp_millis())
    }
}
