//! Common test utilities and fixtures for integration tests

#![allow(dead_code)]

use landsite_core::DocumentKind;
use landsite_schema::{Schema, SchemaCatalog};
use landsite_store::{starter_documents, ActivityLog, ContentStore};
use landsite_sync::{InMemoryContentApi, Loader, RecordingNotifier, SubmitPipeline};
use std::sync::Arc;

pub mod fixtures;
pub mod helpers;

pub use fixtures::*;
pub use helpers::*;

/// Everything an editing flow needs, wired to the in-memory backend.
pub struct EditingHarness {
    pub api: Arc<InMemoryContentApi>,
    pub store: Arc<ContentStore>,
    pub activity: Arc<ActivityLog>,
    pub notifier: Arc<RecordingNotifier>,
    pub catalog: SchemaCatalog,
}

impl EditingHarness {
    /// Harness over an empty backend.
    pub fn new() -> Self {
        Self::with_api(InMemoryContentApi::new())
    }

    /// Harness over a backend seeded with every starter document.
    pub fn seeded() -> Self {
        let api = InMemoryContentApi::new();
        api.seed(starter_documents());
        Self::with_api(api)
    }

    /// Harness over a prepared backend.
    pub fn with_api(api: InMemoryContentApi) -> Self {
        Self {
            api: Arc::new(api),
            store: Arc::new(ContentStore::new()),
            activity: Arc::new(ActivityLog::new()),
            notifier: Arc::new(RecordingNotifier::new()),
            catalog: SchemaCatalog::new().expect("built-in schemas parse"),
        }
    }

    /// Loader over this harness's backend and cache.
    pub fn loader(&self) -> Loader {
        Loader::new(self.api.clone(), self.store.clone())
    }

    /// Submit pipeline for one open editor of `kind`.
    pub fn pipeline(&self, kind: DocumentKind) -> SubmitPipeline {
        SubmitPipeline::new(
            self.schema(kind),
            self.api.clone(),
            self.store.clone(),
            self.activity.clone(),
            self.notifier.clone(),
        )
    }

    /// The built-in schema for a kind.
    pub fn schema(&self, kind: DocumentKind) -> Schema {
        self.catalog
            .require(kind)
            .expect("schema registered for kind")
            .clone()
    }
}
