//! Validation reports
//!
//! A report maps concrete field paths to user-facing messages. Paths keep
//! the order in which rules were declared, so forms can surface errors in
//! document order, and only the first failing rule per path is kept.

use indexmap::IndexMap;
use landsite_core::FieldPath;
use serde::{Deserialize, Serialize};

/// Outcome of validating one document against a schema.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ValidationReport {
    errors: IndexMap<FieldPath, String>,
}

impl ValidationReport {
    /// An empty, valid report.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether the document passed every rule.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    /// Record a failure for a path. Later failures for the same path are
    /// ignored, so the first failing rule wins.
    ///
    /// Returns whether the message was recorded.
    pub fn add(&mut self, path: FieldPath, message: impl Into<String>) -> bool {
        match self.errors.entry(path) {
            indexmap::map::Entry::Occupied(_) => false,
            indexmap::map::Entry::Vacant(entry) => {
                entry.insert(message.into());
                true
            }
        }
    }

    /// The message recorded for a path, if any.
    #[must_use]
    pub fn message(&self, path: &FieldPath) -> Option<&str> {
        self.errors.get(path).map(String::as_str)
    }

    /// The first recorded failure, in declaration order.
    #[must_use]
    pub fn first(&self) -> Option<(&FieldPath, &str)> {
        self.errors.first().map(|(p, m)| (p, m.as_str()))
    }

    /// Number of failing paths.
    #[must_use]
    pub fn len(&self) -> usize {
        self.errors.len()
    }

    /// Whether no failures were recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    /// Iterate over failures in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = (&FieldPath, &str)> {
        self.errors.iter().map(|(p, m)| (p, m.as_str()))
    }
}
