//! Error types for form state operations

use thiserror::Error;

/// Errors raised while editing form state
#[derive(Error, Debug)]
pub enum FormError {
    /// A field path failed to parse or apply
    #[error("Invalid field path '{path}': {message}")]
    Path {
        /// The offending path text
        path: String,
        /// What was wrong with it
        message: String,
    },

    /// A list operation hit a value that is not a list
    #[error("Value at '{path}' is not a list")]
    NotAList {
        /// Path of the non-list value
        path: String,
    },

    /// A list entry operation hit a value that is not an object
    #[error("List entries at '{path}' must be objects")]
    NotAnObject {
        /// Path of the list
        path: String,
    },

    /// A list index was out of range
    #[error("Index {index} is out of range for a list of length {len}")]
    IndexOutOfRange {
        /// The requested index
        index: usize,
        /// The list's length
        len: usize,
    },
}

impl FormError {
    /// Create a path error
    pub fn path(path: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Path {
            path: path.into(),
            message: message.into(),
        }
    }

    /// Create a not-a-list error
    pub fn not_a_list(path: impl Into<String>) -> Self {
        Self::NotAList { path: path.into() }
    }

    /// Create a not-an-object error
    pub fn not_an_object(path: impl Into<String>) -> Self {
        Self::NotAnObject { path: path.into() }
    }

    /// Create an index out of range error
    #[must_use]
    pub const fn index_out_of_range(index: usize, len: usize) -> Self {
        Self::IndexOutOfRange { index, len }
    }
}

impl From<landsite_core::Error> for FormError {
    fn from(err: landsite_core::Error) -> Self {
        match err {
            landsite_core::Error::InvalidPath { path, message } => Self::Path { path, message },
            other => Self::Path {
                path: String::new(),
                message: other.to_string(),
            },
        }
    }
}

impl From<FormError> for landsite_core::Error {
    fn from(err: FormError) -> Self {
        Self::Form(err.to_string())
    }
}

/// Result type for form operations
pub type FormResult<T> = Result<T, FormError>;
