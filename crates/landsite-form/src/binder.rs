//! Form state binding
//!
//! A [`FormBinder`] owns the working copy of one document while it is being
//! edited: the current field tree, the defaults to fall back to, and a
//! dirty flag that flips on the first real change. Reads and writes go
//! through [`FieldPath`]s, exactly as the admin form inputs are named.

use landsite_core::{ContentDocument, DocumentKind, FieldPath};
use serde_json::Value;
use tracing::{debug, trace};
use uuid::Uuid;

use crate::error::{FormError, FormResult};

/// Editable working copy of one document's fields.
#[derive(Debug, Clone, PartialEq)]
pub struct FormBinder {
    kind: DocumentKind,
    document_id: Option<Uuid>,
    defaults: Value,
    fields: Value,
    dirty: bool,
}

impl FormBinder {
    /// Start editing a document that does not exist on the server yet.
    #[must_use]
    pub fn seeded(kind: DocumentKind, defaults: Value) -> Self {
        Self {
            kind,
            document_id: None,
            fields: defaults.clone(),
            defaults,
            dirty: false,
        }
    }

    /// Start editing an existing document.
    #[must_use]
    pub fn for_document(document: &ContentDocument) -> Self {
        Self {
            kind: document.kind,
            document_id: document.id,
            defaults: document.fields.clone(),
            fields: document.fields.clone(),
            dirty: false,
        }
    }

    /// The kind of document being edited.
    #[must_use]
    pub const fn kind(&self) -> DocumentKind {
        self.kind
    }

    /// Server id of the document, if it has been saved before.
    #[must_use]
    pub const fn document_id(&self) -> Option<Uuid> {
        self.document_id
    }

    /// Whether any field changed since the last reset or adoption.
    #[must_use]
    pub const fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// Read the value at a path.
    #[must_use]
    pub fn get(&self, path: &FieldPath) -> Option<&Value> {
        path.resolve(&self.fields)
    }

    /// Write a value at a path.
    ///
    /// Writing the value a path already holds is a no-op and does not mark
    /// the form dirty.
    ///
    /// # Errors
    ///
    /// Returns [`FormError::Path`] when the path cannot be applied to the
    /// current tree, e.g. an out-of-range list index.
    pub fn set(&mut self, path: &FieldPath, value: Value) -> FormResult<()> {
        if self.get(path) == Some(&value) {
            return Ok(());
        }

        path.set(&mut self.fields, value)?;
        self.dirty = true;
        trace!(kind = %self.kind, %path, "field changed");
        Ok(())
    }

    /// The whole field tree.
    #[must_use]
    pub const fn fields(&self) -> &Value {
        &self.fields
    }

    /// Deep copy of the current field tree.
    #[must_use]
    pub fn snapshot(&self) -> Value {
        self.fields.clone()
    }

    /// Replace both the working copy and the defaults, clearing the dirty
    /// flag.
    pub fn reset(&mut self, fields: Value) {
        self.defaults = fields.clone();
        self.fields = fields;
        self.dirty = false;
        debug!(kind = %self.kind, "form reset");
    }

    /// Throw away unsaved changes, going back to the defaults.
    pub fn discard(&mut self) {
        self.fields = self.defaults.clone();
        self.dirty = false;
        debug!(kind = %self.kind, "local edits discarded");
    }

    /// Take over a server document as the new baseline.
    ///
    /// Adopting sets the document id and resets the field tree; callers
    /// are expected to have checked that the kinds match.
    pub fn adopt(&mut self, document: &ContentDocument) {
        self.document_id = document.id;
        self.reset(document.fields.clone());
    }

    pub(crate) const fn fields_mut(&mut self) -> &mut Value {
        &mut self.fields
    }

    pub(crate) const fn mark_dirty(&mut self) {
        self.dirty = true;
    }
}
