//! Loading server content into the cache and into forms
//!
//! The [`Loader`] pairs a [`ContentApi`] with a [`ContentStore`]: every
//! successful fetch is cached before it is returned, and failed fetches
//! leave the cache untouched. [`Loader::load_into`] additionally folds the
//! fetched document into an open form through a [`Reconciler`].

use landsite_core::{ContentDocument, DocumentKind};
use landsite_form::{FormBinder, ReconcileOutcome, Reconciler};
use landsite_store::ContentStore;
use std::sync::Arc;
use tracing::{debug, info, warn};
use uuid::Uuid;

use crate::api::ContentApi;
use crate::error::{ApiError, ApiResult};

/// Fetches content and keeps the cache in step.
#[derive(Clone)]
pub struct Loader {
    api: Arc<dyn ContentApi>,
    store: Arc<ContentStore>,
}

impl Loader {
    /// Create a loader over an API and a cache.
    #[must_use]
    pub fn new(api: Arc<dyn ContentApi>, store: Arc<ContentStore>) -> Self {
        Self { api, store }
    }

    /// The cache this loader fills.
    #[must_use]
    pub fn store(&self) -> &Arc<ContentStore> {
        &self.store
    }

    /// Fetch a singleton page and cache it.
    ///
    /// # Errors
    ///
    /// Propagates the API error; nothing is cached on failure.
    pub async fn load(&self, kind: DocumentKind) -> ApiResult<ContentDocument> {
        let document = self.api.fetch(kind).await?;
        self.cache(document)
    }

    /// Fetch one collection item and cache it.
    ///
    /// # Errors
    ///
    /// Propagates the API error; nothing is cached on failure.
    pub async fn load_item(&self, kind: DocumentKind, id: Uuid) -> ApiResult<ContentDocument> {
        let document = self.api.fetch_item(kind, id).await?;
        self.cache(document)
    }

    /// Fetch every item of a collection kind and cache them all.
    ///
    /// # Errors
    ///
    /// Propagates the API error; nothing is cached on failure.
    pub async fn load_collection(&self, kind: DocumentKind) -> ApiResult<Vec<ContentDocument>> {
        let documents = self.api.list(kind).await?;
        for document in &documents {
            self.cache(document.clone())?;
        }
        debug!(%kind, count = documents.len(), "collection loaded");
        Ok(documents)
    }

    /// Fetch the document a form is editing and reconcile it into the
    /// binder.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::NotFound`] for a collection binder that has no
    /// document id yet, and propagates fetch errors. The binder is only
    /// touched on success.
    pub async fn load_into(
        &self,
        binder: &mut FormBinder,
        reconciler: &Reconciler,
    ) -> ApiResult<ReconcileOutcome> {
        let kind = binder.kind();
        let document = if kind.is_collection() {
            let Some(id) = binder.document_id() else {
                return Err(ApiError::not_found(kind, None));
            };
            self.load_item(kind, id).await?
        } else {
            self.load(kind).await?
        };

        Ok(reconciler.reconcile(binder, &document))
    }

    /// Fetch every singleton page concurrently and cache the ones that
    /// exist. Best effort: pages that fail to load are skipped.
    ///
    /// Returns how many pages landed in the cache.
    pub async fn warm(&self) -> usize {
        let singletons: Vec<DocumentKind> = DocumentKind::ALL
            .into_iter()
            .filter(|kind| kind.is_singleton())
            .collect();

        let fetches = singletons.iter().map(|&kind| self.api.fetch(kind));
        let results = futures::future::join_all(fetches).await;

        let mut loaded = 0;
        for (kind, result) in singletons.into_iter().zip(results) {
            match result {
                Ok(document) => match self.store.insert(document) {
                    Ok(_) => loaded += 1,
                    Err(e) => warn!(%kind, error = %e, "fetched page could not be cached"),
                },
                Err(e) => debug!(%kind, error = %e, "page not warmed"),
            }
        }

        info!(loaded, "cache warmed");
        loaded
    }

    fn cache(&self, document: ContentDocument) -> ApiResult<ContentDocument> {
        self.store
            .insert(document.clone())
            .map_err(|e| ApiError::server(e.to_string()))?;
        Ok(document)
    }
}
