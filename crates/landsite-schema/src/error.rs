//! Error types for schema construction and lookup

use landsite_core::DocumentKind;
use thiserror::Error;

/// Errors raised while building or looking up validation schemas
#[derive(Error, Debug)]
pub enum SchemaError {
    /// A rule's path pattern does not parse
    #[error("Invalid path pattern '{pattern}': {message}")]
    InvalidPattern {
        /// The offending pattern text
        pattern: String,
        /// What was wrong with it
        message: String,
    },

    /// No schema registered for a document kind
    #[error("No schema registered for document kind '{kind}'")]
    UnknownKind {
        /// The kind that was requested
        kind: DocumentKind,
    },
}

impl SchemaError {
    /// Create an invalid pattern error
    pub fn invalid_pattern(pattern: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidPattern {
            pattern: pattern.into(),
            message: message.into(),
        }
    }

    /// Create an unknown kind error
    #[must_use]
    pub const fn unknown_kind(kind: DocumentKind) -> Self {
        Self::UnknownKind { kind }
    }
}

impl From<SchemaError> for landsite_core::Error {
    fn from(err: SchemaError) -> Self {
        Self::Schema(err.to_string())
    }
}

/// Result type for schema operations
pub type SchemaResult<T> = Result<T, SchemaError>;

#[cfg(test)]
#[allow(clippy::missing_panics_doc)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_invalid_pattern_display() {
        let err = SchemaError::invalid_pattern("a..b", "empty field name");
        assert_eq!(
            err.to_string(),
            "Invalid path pattern 'a..b': empty field name"
        );
    }

    #[test]
    fn test_unknown_kind_display() {
        let err = SchemaError::unknown_kind(DocumentKind::Project);
        assert_eq!(
            err.to_string(),
            "No schema registered for document kind 'project'"
        );
    }

    #[test]
    fn test_conversion_to_core_error() {
        let err = SchemaError::unknown_kind(DocumentKind::Home);
        let core: landsite_core::Error = err.into();
        assert!(core.to_string().contains("Schema error"));
    }
}
