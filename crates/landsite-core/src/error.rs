//! Error types for the landsite editing core

use std::{error::Error as StdError, fmt};

/// Main error type for the landsite editing core
#[derive(Debug)]
pub enum Error {
    /// Configuration error
    Configuration {
        /// Error message
        message: String,
    },

    /// Field path error
    InvalidPath {
        /// The offending path
        path: String,
        /// What went wrong
        message: String,
    },

    /// Schema definition error
    Schema(String),

    /// Form state error
    Form(String),

    /// Content cache error
    Cache(String),

    /// Remote content API error
    Api(String),

    /// Serialization error
    Serialization(serde_json::Error),

    /// Other error
    Other(String),
}

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Configuration { message } => write!(f, "Configuration error: {message}"),
            Self::InvalidPath { path, message } => {
                write!(f, "Invalid field path '{path}': {message}")
            }
            Self::Schema(msg) => write!(f, "Schema error: {msg}"),
            Self::Form(msg) => write!(f, "Form state error: {msg}"),
            Self::Cache(msg) => write!(f, "Content cache error: {msg}"),
            Self::Api(msg) => write!(f, "Content API error: {msg}"),
            Self::Serialization(err) => write!(f, "Serialization error: {err}"),
            Self::Other(msg) => write!(f, "{msg}"),
        }
    }
}

impl StdError for Error {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        match self {
            Self::Serialization(err) => Some(err),
            _ => None,
        }
    }
}

// From implementations for automatic conversions
impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Self::Serialization(err)
    }
}

#[cfg(test)]
#[allow(
    clippy::missing_panics_doc,
    clippy::uninlined_format_args,
    clippy::match_same_arms
)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::error::Error as StdError;

    #[test]
    fn test_configuration_error() {
        let error = Error::Configuration {
            message: "missing LANDSITE_API_BASE_URL".to_string(),
        };

        assert_eq!(
            format!("{}", error),
            "Configuration error: missing LANDSITE_API_BASE_URL"
        );
    }

    #[test]
    fn test_invalid_path_error() {
        let error = Error::InvalidPath {
            path: "hero.slides[3]".to_string(),
            message: "index 3 out of bounds for list of length 2".to_string(),
        };

        assert_eq!(
            format!("{}", error),
            "Invalid field path 'hero.slides[3]': index 3 out of bounds for list of length 2"
        );
    }

    #[test]
    fn test_schema_error() {
        let error = Error::Schema("unknown document kind".to_string());
        assert_eq!(format!("{}", error), "Schema error: unknown document kind");
    }

    #[test]
    fn test_form_error() {
        let error = Error::Form("group path is not a list".to_string());
        assert_eq!(
            format!("{}", error),
            "Form state error: group path is not a list"
        );
    }

    #[test]
    fn test_cache_error() {
        let error = Error::Cache("collection document without id".to_string());
        assert_eq!(
            format!("{}", error),
            "Content cache error: collection document without id"
        );
    }

    #[test]
    fn test_api_error() {
        let error = Error::Api("server returned 503".to_string());
        assert_eq!(format!("{}", error), "Content API error: server returned 503");
    }

    #[test]
    fn test_other_error() {
        let error = Error::Other("unexpected condition".to_string());
        assert_eq!(format!("{}", error), "unexpected condition");
    }

    #[test]
    fn test_serialization_error_conversion() {
        let json_str = r#"{"invalid": json}"#;
        let json_error = serde_json::from_str::<serde_json::Value>(json_str).unwrap_err();
        let app_error = Error::from(json_error);

        match app_error {
            Error::Serialization(_) => {}
            _ => panic!("Expected Serialization error variant"),
        }

        assert!(format!("{}", app_error).contains("Serialization error"));
    }

    #[test]
    fn test_error_source() {
        let error = Error::Configuration {
            message: "test".to_string(),
        };
        assert!(error.source().is_none());

        let json_error = serde_json::from_str::<i32>("oops").unwrap_err();
        let error = Error::from(json_error);
        assert!(error.source().is_some());
    }

    #[test]
    fn test_error_debug_formatting() {
        let error = Error::InvalidPath {
            path: "logo.url".to_string(),
            message: "empty field name".to_string(),
        };

        let debug_str = format!("{:?}", error);
        assert!(debug_str.contains("InvalidPath"));
        assert!(debug_str.contains("logo.url"));
    }

    #[test]
    fn test_result_type_alias() {
        fn returns_result() -> Result<String> {
            Ok("success".to_string())
        }

        fn returns_error() -> Result<String> {
            Err(Error::Other("test error".to_string()))
        }

        assert!(returns_result().is_ok());
        assert!(returns_error().is_err());
    }
}
