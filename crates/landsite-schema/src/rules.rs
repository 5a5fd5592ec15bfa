//! Field-level validation rules
//!
//! A rule checks one resolved value. Apart from [`FieldRule::Required`],
//! every rule treats a missing, null, or blank value as acceptable, so
//! optional form fields stay optional unless a schema also marks them
//! required.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use validator::{ValidateEmail, ValidateUrl};

/// Message for values that fail [`FieldRule::Required`].
const REQUIRED_MESSAGE: &str = "This field is required";

/// One validation rule applied to a single field value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "rule", rename_all = "snake_case")]
pub enum FieldRule {
    /// Value must be present and non-blank
    Required,
    /// Text must have at least `min` characters
    MinLength {
        /// Minimum number of characters
        min: usize,
    },
    /// Text must have at most `max` characters
    MaxLength {
        /// Maximum number of characters
        max: usize,
    },
    /// Text must parse as an absolute URL
    Url,
    /// Text must be a plausible email address
    Email,
    /// Text must equal one of the allowed values
    OneOf {
        /// Accepted values, compared exactly
        allowed: Vec<String>,
    },
}

impl FieldRule {
    /// Check a resolved value, returning the failure message if the rule
    /// does not hold.
    ///
    /// `None` means the path did not resolve to anything in the document.
    #[must_use]
    pub fn check(&self, value: Option<&Value>) -> Option<String> {
        let value = match value {
            None | Some(Value::Null) => {
                return matches!(self, Self::Required).then(|| REQUIRED_MESSAGE.to_string());
            }
            Some(v) => v,
        };

        match self {
            Self::Required => match value {
                Value::String(s) if s.trim().is_empty() => Some(REQUIRED_MESSAGE.to_string()),
                Value::Array(items) if items.is_empty() => Some(REQUIRED_MESSAGE.to_string()),
                _ => None,
            },
            Self::MinLength { min } => check_text(value, |s| {
                (s.chars().count() < *min)
                    .then(|| format!("Must be at least {min} characters"))
            }),
            Self::MaxLength { max } => check_text(value, |s| {
                (s.chars().count() > *max)
                    .then(|| format!("Must be at most {max} characters"))
            }),
            Self::Url => check_text(value, |s| {
                (!s.validate_url()).then(|| "Must be a valid URL".to_string())
            }),
            Self::Email => check_text(value, |s| {
                (!s.validate_email()).then(|| "Must be a valid email address".to_string())
            }),
            Self::OneOf { allowed } => check_text(value, |s| {
                (!allowed.iter().any(|a| a == s))
                    .then(|| format!("Must be one of: {}", allowed.join(", ")))
            }),
        }
    }
}

/// Apply a text rule, skipping blank strings and rejecting non-strings.
fn check_text(value: &Value, check: impl FnOnce(&str) -> Option<String>) -> Option<String> {
    match value {
        Value::String(s) if s.trim().is_empty() => None,
        Value::String(s) => check(s),
        _ => Some("Must be text".to_string()),
    }
}
