//! In-memory content cache
//!
//! Singleton pages are keyed by kind alone; collection items by kind and
//! server id. Every successful fetch or save lands here so dashboards and
//! freshly opened forms can render without another round trip. The cache
//! is shared across tasks and safe for concurrent use.

use dashmap::DashMap;
use landsite_core::{ContentDocument, DocumentKind};
use serde::{Deserialize, Serialize};
use tracing::debug;
use uuid::Uuid;

use crate::error::{StoreError, StoreResult};

/// Cache statistics
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoreStats {
    /// Number of cached singleton pages
    pub pages: usize,
    /// Number of cached collection items
    pub items: usize,
}

/// Concurrent cache of server-confirmed content.
#[derive(Debug, Default)]
pub struct ContentStore {
    pages: DashMap<DocumentKind, ContentDocument>,
    items: DashMap<(DocumentKind, Uuid), ContentDocument>,
}

impl ContentStore {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Cache a document, returning the copy it replaced.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::MissingId`] when a collection item arrives
    /// without a server id.
    pub fn insert(&self, document: ContentDocument) -> StoreResult<Option<ContentDocument>> {
        let kind = document.kind;

        let previous = if kind.is_collection() {
            let id = document.id.ok_or(StoreError::missing_id(kind))?;
            debug!(%kind, %id, "cached collection item");
            self.items.insert((kind, id), document)
        } else {
            debug!(%kind, "cached page");
            self.pages.insert(kind, document)
        };

        Ok(previous)
    }

    /// The cached singleton page for a kind.
    #[must_use]
    pub fn page(&self, kind: DocumentKind) -> Option<ContentDocument> {
        self.pages.get(&kind).map(|entry| entry.value().clone())
    }

    /// The cached collection item with the given id.
    #[must_use]
    pub fn item(&self, kind: DocumentKind, id: Uuid) -> Option<ContentDocument> {
        self.items
            .get(&(kind, id))
            .map(|entry| entry.value().clone())
    }

    /// Cached document for a kind, using the item map when an id is given
    /// and the page map otherwise.
    #[must_use]
    pub fn lookup(&self, kind: DocumentKind, id: Option<Uuid>) -> Option<ContentDocument> {
        if kind.is_collection() {
            self.item(kind, id?)
        } else {
            self.page(kind)
        }
    }

    /// All cached items of a kind, most recently updated first.
    #[must_use]
    pub fn items(&self, kind: DocumentKind) -> Vec<ContentDocument> {
        let mut list: Vec<ContentDocument> = self
            .items
            .iter()
            .filter(|entry| entry.key().0 == kind)
            .map(|entry| entry.value().clone())
            .collect();
        list.sort_by(|a, b| b.updated_at.cmp(&a.updated_at));
        list
    }

    /// Drop a collection item, returning it.
    pub fn remove_item(&self, kind: DocumentKind, id: Uuid) -> Option<ContentDocument> {
        let removed = self.items.remove(&(kind, id)).map(|(_, doc)| doc);
        if removed.is_some() {
            debug!(%kind, %id, "evicted collection item");
        }
        removed
    }

    /// Cache several documents at once, returning how many were stored.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::MissingId`] on the first collection item
    /// without a server id; earlier documents stay cached.
    pub fn seed(
        &self,
        documents: impl IntoIterator<Item = ContentDocument>,
    ) -> StoreResult<usize> {
        let mut count = 0;
        for document in documents {
            self.insert(document)?;
            count += 1;
        }
        Ok(count)
    }

    /// Total number of cached documents.
    #[must_use]
    pub fn len(&self) -> usize {
        self.pages.len() + self.items.len()
    }

    /// Whether nothing is cached.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pages.is_empty() && self.items.is_empty()
    }

    /// Drop everything.
    pub fn clear(&self) {
        self.pages.clear();
        self.items.clear();
    }

    /// Current cache statistics.
    #[must_use]
    pub fn stats(&self) -> StoreStats {
        StoreStats {
            pages: self.pages.len(),
            items: self.items.len(),
        }
    }
}
