//! Error types for content API operations

use landsite_core::DocumentKind;
use thiserror::Error;
use uuid::Uuid;

/// Errors returned by content API calls
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    /// The requested document does not exist on the server
    #[error("Content not found: {kind}{}", .id.map_or_else(String::new, |i| format!(" {i}")))]
    NotFound {
        /// Kind of the missing document
        kind: DocumentKind,
        /// Id of the missing item, absent for singleton pages
        id: Option<Uuid>,
    },

    /// The server understood the request but refused it
    #[error("Save rejected: {message}")]
    Rejected {
        /// Server-supplied reason
        message: String,
    },

    /// The request never completed
    #[error("Transport failure: {message}")]
    Transport {
        /// What went wrong on the wire
        message: String,
    },

    /// The server failed while handling the request
    #[error("Server error: {message}")]
    Server {
        /// Server-supplied reason
        message: String,
    },
}

impl ApiError {
    /// Create a not found error
    #[must_use]
    pub const fn not_found(kind: DocumentKind, id: Option<Uuid>) -> Self {
        Self::NotFound { kind, id }
    }

    /// Create a rejected error
    pub fn rejected(message: impl Into<String>) -> Self {
        Self::Rejected {
            message: message.into(),
        }
    }

    /// Create a transport error
    pub fn transport(message: impl Into<String>) -> Self {
        Self::Transport {
            message: message.into(),
        }
    }

    /// Create a server error
    pub fn server(message: impl Into<String>) -> Self {
        Self::Server {
            message: message.into(),
        }
    }

    /// Whether retrying the same call could succeed.
    ///
    /// Transport and server failures are transient; a missing document or
    /// an explicit rejection will not get better on its own.
    #[must_use]
    pub const fn is_retryable(&self) -> bool {
        matches!(self, Self::Transport { .. } | Self::Server { .. })
    }

    /// Whether this is a not found error.
    #[must_use]
    pub const fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }
}

impl From<ApiError> for landsite_core::Error {
    fn from(err: ApiError) -> Self {
        Self::Api(err.to_string())
    }
}

/// Result type for content API operations
pub type ApiResult<T> = Result<T, ApiError>;
