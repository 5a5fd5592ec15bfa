//! Reconciling fresh server content with local form state
//!
//! When a fetch completes, the server copy is the source of truth: by
//! default the binder is reset to it even when local edits exist. The
//! [`ReconcilePolicy::PreserveDirtyEdits`] policy keeps a dirty binder
//! untouched instead, for deployments that prefer not to drop typing that
//! raced a refresh.

use landsite_core::config::EditingConfig;
use landsite_core::ContentDocument;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::binder::FormBinder;

/// What to do with local edits when server content arrives.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReconcilePolicy {
    /// Reset the form to the server copy unconditionally
    #[default]
    ServerWins,
    /// Keep the form untouched while it has unsaved edits
    PreserveDirtyEdits,
}

impl From<&EditingConfig> for ReconcilePolicy {
    fn from(config: &EditingConfig) -> Self {
        if config.preserve_dirty_edits {
            Self::PreserveDirtyEdits
        } else {
            Self::ServerWins
        }
    }
}

/// How a reconciliation ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReconcileOutcome {
    /// Binder was reset to the server copy
    Reset,
    /// Binder kept its unsaved local edits
    KeptLocalEdits,
    /// Incoming document was for a different kind; binder untouched
    KindMismatch,
}

/// Applies a [`ReconcilePolicy`] to incoming documents.
#[derive(Debug, Clone, Default)]
pub struct Reconciler {
    policy: ReconcilePolicy,
}

impl Reconciler {
    /// Create a reconciler with an explicit policy.
    #[must_use]
    pub const fn new(policy: ReconcilePolicy) -> Self {
        Self { policy }
    }

    /// The active policy.
    #[must_use]
    pub const fn policy(&self) -> ReconcilePolicy {
        self.policy
    }

    /// Fold a server document into the binder.
    pub fn reconcile(
        &self,
        binder: &mut FormBinder,
        incoming: &ContentDocument,
    ) -> ReconcileOutcome {
        if binder.kind() != incoming.kind {
            warn!(
                binder_kind = %binder.kind(),
                incoming_kind = %incoming.kind,
                "dropped incoming document of mismatched kind"
            );
            return ReconcileOutcome::KindMismatch;
        }

        if self.policy == ReconcilePolicy::PreserveDirtyEdits && binder.is_dirty() {
            debug!(kind = %binder.kind(), "kept local edits over server copy");
            return ReconcileOutcome::KeptLocalEdits;
        }

        binder.adopt(incoming);
        debug!(kind = %binder.kind(), "form reset to server copy");
        ReconcileOutcome::Reset
    }
}

#[cfg(test)]
#[allow(clippy::missing_panics_doc)]
mod tests {
    use super::*;
    use landsite_core::{DocumentKind, FieldPath};
    use pretty_assertions::assert_eq;
    use serde_json::json;
    use uuid::Uuid;

    fn server_doc() -> ContentDocument {
        ContentDocument::new(DocumentKind::Home, json!({"hero": {"headline": "Server"}}))
            .with_id(Uuid::new_v4())
    }

    #[test]
    fn test_server_wins_resets_dirty_binder() {
        let mut binder = FormBinder::seeded(DocumentKind::Home, json!({}));
        binder
            .set(&FieldPath::parse("hero.headline").unwrap(), json!("Local"))
            .unwrap();

        let incoming = server_doc();
        let outcome = Reconciler::default().reconcile(&mut binder, &incoming);

        assert_eq!(outcome, ReconcileOutcome::Reset);
        assert!(!binder.is_dirty());
        assert_eq!(binder.document_id(), incoming.id);
        assert_eq!(binder.fields(), &incoming.fields);
    }

    #[test]
    fn test_preserve_policy_keeps_dirty_binder() {
        let mut binder = FormBinder::seeded(DocumentKind::Home, json!({}));
        binder
            .set(&FieldPath::parse("hero.headline").unwrap(), json!("Local"))
            .unwrap();
        let before = binder.snapshot();

        let outcome = Reconciler::new(ReconcilePolicy::PreserveDirtyEdits)
            .reconcile(&mut binder, &server_doc());

        assert_eq!(outcome, ReconcileOutcome::KeptLocalEdits);
        assert!(binder.is_dirty());
        assert_eq!(binder.snapshot(), before);
        assert_eq!(binder.document_id(), None);
    }

    #[test]
    fn test_preserve_policy_resets_clean_binder() {
        let mut binder = FormBinder::seeded(DocumentKind::Home, json!({}));

        let incoming = server_doc();
        let outcome = Reconciler::new(ReconcilePolicy::PreserveDirtyEdits)
            .reconcile(&mut binder, &incoming);

        assert_eq!(outcome, ReconcileOutcome::Reset);
        assert_eq!(binder.fields(), &incoming.fields);
    }

    #[test]
    fn test_kind_mismatch_leaves_binder_alone() {
        let mut binder = FormBinder::seeded(DocumentKind::About, json!({"headline": "Mine"}));

        let outcome = Reconciler::default().reconcile(&mut binder, &server_doc());

        assert_eq!(outcome, ReconcileOutcome::KindMismatch);
        assert_eq!(binder.fields(), &json!({"headline": "Mine"}));
        assert_eq!(binder.document_id(), None);
    }

    #[test]
    fn test_policy_from_editing_config() {
        let mut config = EditingConfig::default();
        assert_eq!(ReconcilePolicy::from(&config), ReconcilePolicy::ServerWins);

        config.preserve_dirty_edits = true;
        assert_eq!(
            ReconcilePolicy::from(&config),
            ReconcilePolicy::PreserveDirtyEdits
        );
    }
}
