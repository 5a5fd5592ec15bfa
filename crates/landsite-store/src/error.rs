//! Error types for the content store

use landsite_core::DocumentKind;
use thiserror::Error;

/// Errors raised by cache operations
#[derive(Error, Debug)]
pub enum StoreError {
    /// A collection item was inserted without a server id
    #[error("Cannot cache {kind} item without an id")]
    MissingId {
        /// Kind of the offending document
        kind: DocumentKind,
    },
}

impl StoreError {
    /// Create a missing id error
    #[must_use]
    pub const fn missing_id(kind: DocumentKind) -> Self {
        Self::MissingId { kind }
    }
}

impl From<StoreError> for landsite_core::Error {
    fn from(err: StoreError) -> Self {
        Self::Cache(err.to_string())
    }
}

/// Result type for store operations
pub type StoreResult<T> = Result<T, StoreError>;

#[cfg(test)]
#[allow(clippy::missing_panics_doc)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_missing_id_display() {
        let err = StoreError::missing_id(DocumentKind::Project);
        assert_eq!(err.to_string(), "Cannot cache project item without an id");
    }

    #[test]
    fn test_conversion_to_core_error() {
        let core: landsite_core::Error = StoreError::missing_id(DocumentKind::MediaAsset).into();
        assert!(core.to_string().contains("Content cache error"));
    }
}
