//! In-memory content API
//!
//! Backend used by tests and local development. Behaves like the real
//! server: singleton pages upsert, collection items need to exist before
//! they can be updated, and create assigns ids and timestamps. Builders
//! add artificial latency or make every call fail, and per-operation call
//! counters let tests assert exactly what went over the wire.

use chrono::Utc;
use dashmap::DashMap;
use landsite_core::{ContentDocument, DocumentKind};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;
use tracing::debug;
use uuid::Uuid;

use crate::api::ContentApi;
use crate::error::{ApiError, ApiResult};
use async_trait::async_trait;

#[derive(Debug, Default)]
struct CallCounters {
    fetch: AtomicUsize,
    fetch_item: AtomicUsize,
    list: AtomicUsize,
    create: AtomicUsize,
    update: AtomicUsize,
    delete: AtomicUsize,
}

/// Content API backed by process memory.
#[derive(Debug, Default)]
pub struct InMemoryContentApi {
    pages: DashMap<DocumentKind, ContentDocument>,
    items: DashMap<(DocumentKind, Uuid), ContentDocument>,
    latency: Option<Duration>,
    failure: Option<String>,
    calls: CallCounters,
}

impl InMemoryContentApi {
    /// Create an empty API.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add artificial latency to every call.
    #[must_use]
    pub fn with_latency(mut self, latency: Duration) -> Self {
        self.latency = Some(latency);
        self
    }

    /// Make every call fail with a transport error.
    #[must_use]
    pub fn with_failure(mut self, message: impl Into<String>) -> Self {
        self.failure = Some(message.into());
        self
    }

    /// Load documents directly into the backing maps, bypassing the API
    /// surface and its counters. Collection items without an id get one.
    ///
    /// Returns how many documents were loaded.
    pub fn seed(&self, documents: impl IntoIterator<Item = ContentDocument>) -> usize {
        let mut count = 0;
        for mut document in documents {
            if document.kind.is_collection() {
                let id = *document.id.get_or_insert_with(Uuid::new_v4);
                self.items.insert((document.kind, id), document);
            } else {
                self.pages.insert(document.kind, document);
            }
            count += 1;
        }
        debug!(count, "seeded in-memory api");
        count
    }

    /// Number of `fetch` calls made so far.
    #[must_use]
    pub fn fetch_calls(&self) -> usize {
        self.calls.fetch.load(Ordering::Relaxed)
    }

    /// Number of `fetch_item` calls made so far.
    #[must_use]
    pub fn fetch_item_calls(&self) -> usize {
        self.calls.fetch_item.load(Ordering::Relaxed)
    }

    /// Number of `list` calls made so far.
    #[must_use]
    pub fn list_calls(&self) -> usize {
        self.calls.list.load(Ordering::Relaxed)
    }

    /// Number of `create` calls made so far.
    #[must_use]
    pub fn create_calls(&self) -> usize {
        self.calls.create.load(Ordering::Relaxed)
    }

    /// Number of `update` calls made so far.
    #[must_use]
    pub fn update_calls(&self) -> usize {
        self.calls.update.load(Ordering::Relaxed)
    }

    /// Number of `delete` calls made so far.
    #[must_use]
    pub fn delete_calls(&self) -> usize {
        self.calls.delete.load(Ordering::Relaxed)
    }

    /// Total calls across every operation.
    #[must_use]
    pub fn total_calls(&self) -> usize {
        self.fetch_calls()
            + self.fetch_item_calls()
            + self.list_calls()
            + self.create_calls()
            + self.update_calls()
            + self.delete_calls()
    }

    /// Count the call, apply latency, then fail if configured to.
    async fn begin(&self, counter: &AtomicUsize) -> ApiResult<()> {
        counter.fetch_add(1, Ordering::Relaxed);

        if let Some(latency) = self.latency {
            tokio::time::sleep(latency).await;
        }
        if let Some(message) = &self.failure {
            return Err(ApiError::transport(message.clone()));
        }
        Ok(())
    }
}

#[async_trait]
impl ContentApi for InMemoryContentApi {
    async fn fetch(&self, kind: DocumentKind) -> ApiResult<ContentDocument> {
        self.begin(&self.calls.fetch).await?;

        if kind.is_collection() {
            return Err(ApiError::server(format!(
                "fetching {kind} requires an id"
            )));
        }
        self.pages
            .get(&kind)
            .map(|entry| entry.value().clone())
            .ok_or(ApiError::not_found(kind, None))
    }

    async fn fetch_item(&self, kind: DocumentKind, id: Uuid) -> ApiResult<ContentDocument> {
        self.begin(&self.calls.fetch_item).await?;

        self.items
            .get(&(kind, id))
            .map(|entry| entry.value().clone())
            .ok_or(ApiError::not_found(kind, Some(id)))
    }

    async fn list(&self, kind: DocumentKind) -> ApiResult<Vec<ContentDocument>> {
        self.begin(&self.calls.list).await?;

        if !kind.is_collection() {
            return Err(ApiError::server(format!("{kind} is a singleton page")));
        }

        let mut documents: Vec<ContentDocument> = self
            .items
            .iter()
            .filter(|entry| entry.key().0 == kind)
            .map(|entry| entry.value().clone())
            .collect();
        documents.sort_by(|a, b| b.updated_at.cmp(&a.updated_at));
        Ok(documents)
    }

    async fn create(&self, document: &ContentDocument) -> ApiResult<ContentDocument> {
        self.begin(&self.calls.create).await?;

        if !document.kind.is_collection() {
            return Err(ApiError::rejected(format!(
                "{} is a singleton page; save it with update",
                document.kind
            )));
        }
        if document.id.is_some() {
            return Err(ApiError::rejected("document already has an id"));
        }

        let id = Uuid::new_v4();
        let now = Utc::now();
        let mut stored = document.clone();
        stored.id = Some(id);
        stored.created_at = now;
        stored.updated_at = now;

        self.items.insert((stored.kind, id), stored.clone());
        debug!(kind = %stored.kind, %id, "created item");
        Ok(stored)
    }

    async fn update(&self, document: &ContentDocument) -> ApiResult<ContentDocument> {
        self.begin(&self.calls.update).await?;

        if document.kind.is_collection() {
            let Some(id) = document.id else {
                return Err(ApiError::not_found(document.kind, None));
            };
            let previous_created = self
                .items
                .get(&(document.kind, id))
                .map(|entry| entry.created_at);
            let Some(created_at) = previous_created else {
                return Err(ApiError::not_found(document.kind, Some(id)));
            };

            let mut stored = document.clone();
            stored.created_at = created_at;
            stored.updated_at = Utc::now();
            self.items.insert((document.kind, id), stored.clone());
            debug!(kind = %stored.kind, %id, "updated item");
            return Ok(stored);
        }

        // Singleton pages upsert, keeping their original id and creation
        // time across saves.
        let previous_meta = self
            .pages
            .get(&document.kind)
            .map(|entry| (entry.id, entry.created_at));

        let mut stored = document.clone();
        stored.updated_at = Utc::now();
        match previous_meta {
            Some((id, created_at)) => {
                stored.id = id.or(stored.id);
                stored.created_at = created_at;
            }
            None => {
                if stored.id.is_none() {
                    stored.id = Some(Uuid::new_v4());
                }
                stored.created_at = stored.updated_at;
            }
        }

        self.pages.insert(document.kind, stored.clone());
        debug!(kind = %stored.kind, "updated page");
        Ok(stored)
    }

    async fn delete(&self, kind: DocumentKind, id: Uuid) -> ApiResult<()> {
        self.begin(&self.calls.delete).await?;

        if !kind.is_collection() {
            return Err(ApiError::rejected(format!(
                "{kind} is a singleton page and cannot be deleted"
            )));
        }

        if self.items.remove(&(kind, id)).is_none() {
            return Err(ApiError::not_found(kind, Some(id)));
        }
        debug!(%kind, %id, "deleted item");
        Ok(())
    }
}
