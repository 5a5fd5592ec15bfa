//! Save pipeline
//!
//! One [`SubmitPipeline`] sits behind the save button of one open editor.
//! A submit validates the form against the kind's schema, sends the
//! snapshot to the server, and on success fans the stored copy out to the
//! content cache, the activity feed, and the notification sink. Failures
//! come back as data: the form keeps its edits, the cache keeps its last
//! confirmed copy, and the caller decides what to do next.

use landsite_core::{ActivityLogEntry, ContentDocument, DocumentKind};
use landsite_form::{FormBinder, ReconcileOutcome, Reconciler};
use landsite_schema::{Schema, ValidationReport};
use landsite_store::{ActivitySink, ContentStore};
use parking_lot::Mutex;
use serde_json::Value;
use std::sync::Arc;
use tracing::{debug, info, warn};
use uuid::Uuid;

use crate::api::ContentApi;
use crate::error::ApiError;
use crate::notify::NotificationSink;

/// Where a pipeline is in its save cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitState {
    /// Ready to accept a submit
    Idle,
    /// Checking the form against the schema
    Validating,
    /// Waiting for the server to confirm the save
    Saving,
    /// The server reported the document gone; this editor is finished
    Gone,
}

/// How a submit ended.
#[derive(Debug, Clone, PartialEq)]
pub enum SubmitOutcome {
    /// The server stored the document; the returned copy is authoritative
    Saved(ContentDocument),
    /// The form failed validation; nothing was sent
    Invalid(ValidationReport),
    /// The server call failed; form and cache are unchanged
    Failed(ApiError),
    /// A submit was already in flight for this editor
    AlreadySaving,
    /// The document no longer exists on the server; nothing was sent
    Gone,
}

/// Drives validation, saving, and result fan-out for one open editor.
///
/// The pipeline owns the schema for the kind being edited and a state
/// cell that admits one submit at a time. Once the server reports the
/// document gone, the pipeline latches [`SubmitState::Gone`] and later
/// submits return without touching the network.
pub struct SubmitPipeline {
    schema: Schema,
    api: Arc<dyn ContentApi>,
    store: Arc<ContentStore>,
    activity: Arc<dyn ActivitySink>,
    notifier: Arc<dyn NotificationSink>,
    reconciler: Reconciler,
    state: Mutex<SubmitState>,
}

impl SubmitPipeline {
    /// Create a pipeline for one editor.
    #[must_use]
    pub fn new(
        schema: Schema,
        api: Arc<dyn ContentApi>,
        store: Arc<ContentStore>,
        activity: Arc<dyn ActivitySink>,
        notifier: Arc<dyn NotificationSink>,
    ) -> Self {
        Self {
            schema,
            api,
            store,
            activity,
            notifier,
            // Post-save adoption is unconditional: the server copy is the
            // snapshot that was just saved, normalized.
            reconciler: Reconciler::default(),
            state: Mutex::new(SubmitState::Idle),
        }
    }

    /// The kind this pipeline saves.
    #[must_use]
    pub const fn kind(&self) -> DocumentKind {
        self.schema.kind()
    }

    /// Current state; screens disable the save control while not idle.
    #[must_use]
    pub fn state(&self) -> SubmitState {
        *self.state.lock()
    }

    /// Validate and save the binder's current fields.
    ///
    /// On success the binder adopts the server-returned copy, picking up
    /// the assigned id and timestamps, and exactly one activity entry is
    /// recorded. On failure the binder keeps its edits and the cache its
    /// last confirmed copy. Never returns `Err`; every ending is a
    /// [`SubmitOutcome`].
    pub async fn submit(&self, binder: &mut FormBinder) -> SubmitOutcome {
        {
            let mut state = self.state.lock();
            match *state {
                SubmitState::Idle => *state = SubmitState::Validating,
                SubmitState::Gone => {
                    debug!(kind = %self.kind(), "submit skipped, document is gone");
                    return SubmitOutcome::Gone;
                }
                SubmitState::Validating | SubmitState::Saving => {
                    return SubmitOutcome::AlreadySaving;
                }
            }
        }

        let snapshot = binder.snapshot();
        let report = self.schema.validate(&snapshot);
        if !report.is_valid() {
            debug!(
                kind = %self.kind(),
                failures = report.len(),
                "submit stopped by validation"
            );
            self.set_state(SubmitState::Idle);
            return SubmitOutcome::Invalid(report);
        }

        self.set_state(SubmitState::Saving);
        let document = build_document(binder, snapshot);
        let creating = document.kind.is_collection() && document.id.is_none();
        let result = if creating {
            self.api.create(&document).await
        } else {
            self.api.update(&document).await
        };

        match result {
            Ok(stored) => self.finish_save(binder, stored, creating),
            Err(error) => self.finish_failure(error),
        }
    }

    /// Delete one collection item and record the outcome.
    ///
    /// On success the item leaves the cache, one `Deleted` activity entry
    /// is recorded, and the pipeline latches [`SubmitState::Gone`]. The
    /// cache is untouched on failure.
    ///
    /// # Errors
    ///
    /// Propagates the API error. [`ApiError::NotFound`] also latches
    /// [`SubmitState::Gone`]: the document is equally gone either way.
    pub async fn delete(&self, kind: DocumentKind, id: Uuid) -> Result<(), ApiError> {
        match self.api.delete(kind, id).await {
            Ok(()) => {
                let removed = self.store.remove_item(kind, id);
                let name =
                    removed.map_or_else(|| kind.label().to_string(), |d| d.entity_name());

                let entry = ActivityLogEntry::deleted(kind, id, name);
                let description = entry.description.clone();
                self.activity.record(entry);
                self.notifier.notify_success(&description);
                self.set_state(SubmitState::Gone);

                info!(%kind, %id, "document deleted");
                Ok(())
            }
            Err(error) => {
                warn!(%kind, %id, error = %error, "delete failed");
                self.notifier.notify_error(&error.to_string());
                if error.is_not_found() {
                    self.set_state(SubmitState::Gone);
                }
                Err(error)
            }
        }
    }

    fn finish_save(
        &self,
        binder: &mut FormBinder,
        stored: ContentDocument,
        created: bool,
    ) -> SubmitOutcome {
        // Classification needs the predecessor before the cache forgets it.
        let previous = self.store.lookup(stored.kind, stored.id);

        if self.reconciler.reconcile(binder, &stored) == ReconcileOutcome::KindMismatch {
            let error = ApiError::server(format!(
                "saved {} but the server answered with {}",
                self.kind(),
                stored.kind
            ));
            return self.finish_failure(error);
        }

        if let Err(e) = self.store.insert(stored.clone()) {
            return self.finish_failure(ApiError::server(e.to_string()));
        }

        let entry = if created {
            ActivityLogEntry::created(&stored)
        } else if status_changed(previous.as_ref(), &stored) {
            ActivityLogEntry::status_changed(&stored)
        } else {
            ActivityLogEntry::updated(&stored)
        };

        info!(
            kind = %stored.kind,
            action = %entry.action,
            "document saved"
        );
        let description = entry.description.clone();
        self.activity.record(entry);
        self.notifier.notify_success(&description);

        self.set_state(SubmitState::Idle);
        SubmitOutcome::Saved(stored)
    }

    fn finish_failure(&self, error: ApiError) -> SubmitOutcome {
        warn!(kind = %self.kind(), error = %error, "save failed");
        self.notifier.notify_error(&error.to_string());

        if error.is_not_found() {
            self.set_state(SubmitState::Gone);
        } else {
            self.set_state(SubmitState::Idle);
        }
        SubmitOutcome::Failed(error)
    }

    fn set_state(&self, next: SubmitState) {
        *self.state.lock() = next;
    }
}

fn build_document(binder: &FormBinder, snapshot: Value) -> ContentDocument {
    let mut document = ContentDocument::new(binder.kind(), snapshot);
    document.id = binder.document_id();
    document
}

fn status_changed(previous: Option<&ContentDocument>, stored: &ContentDocument) -> bool {
    match (previous.and_then(ContentDocument::status), stored.status()) {
        (Some(before), Some(after)) => before != after,
        _ => false,
    }
}
