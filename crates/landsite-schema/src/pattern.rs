//! Path patterns with list wildcards
//!
//! A pattern looks like a [`FieldPath`] but may use `[*]` in place of a
//! concrete index, e.g. `footer_columns[*].links[*].url`. Expanding a
//! pattern against a document yields one concrete path per matched list
//! element.

use landsite_core::{FieldPath, PathSegment};
use serde_json::Value;
use std::fmt;

use crate::error::{SchemaError, SchemaResult};

/// One step in a [`PathPattern`].
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum PatternSegment {
    /// Named field of an object
    Field(String),
    /// One specific list element
    Index(usize),
    /// Every element of a list
    AnyIndex,
}

/// Field path pattern, possibly containing `[*]` wildcards.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PathPattern {
    segments: Vec<PatternSegment>,
}

impl PathPattern {
    /// Parse a pattern from its textual form.
    ///
    /// # Errors
    ///
    /// Returns [`SchemaError::InvalidPattern`] when the text is not a valid
    /// field path with optional `[*]` wildcards.
    pub fn parse(input: &str) -> SchemaResult<Self> {
        fn invalid(input: &str, message: impl Into<String>) -> SchemaError {
            SchemaError::invalid_pattern(input, message)
        }

        if input.is_empty() {
            return Err(invalid(input, "pattern is empty"));
        }

        let mut segments = Vec::new();
        let mut chars = input.chars().peekable();

        loop {
            let mut name = String::new();
            while let Some(&c) = chars.peek() {
                if c == '.' || c == '[' {
                    break;
                }
                if c.is_alphanumeric() || c == '_' || c == '-' {
                    name.push(c);
                    chars.next();
                } else {
                    return Err(invalid(input, format!("unexpected character '{c}'")));
                }
            }
            if name.is_empty() {
                return Err(invalid(input, "empty field name"));
            }
            segments.push(PatternSegment::Field(name));

            while chars.peek() == Some(&'[') {
                chars.next();
                let mut inner = String::new();
                while let Some(&c) = chars.peek() {
                    if c == ']' {
                        break;
                    }
                    inner.push(c);
                    chars.next();
                }
                if chars.next() != Some(']') {
                    return Err(invalid(input, "unterminated index"));
                }
                if inner == "*" {
                    segments.push(PatternSegment::AnyIndex);
                } else {
                    let index = inner
                        .parse::<usize>()
                        .map_err(|_| invalid(input, format!("invalid index '{inner}'")))?;
                    segments.push(PatternSegment::Index(index));
                }
            }

            match chars.next() {
                None => break,
                Some('.') => {
                    if chars.peek().is_none() {
                        return Err(invalid(input, "trailing dot"));
                    }
                }
                Some(c) => return Err(invalid(input, format!("unexpected character '{c}'"))),
            }
        }

        Ok(Self { segments })
    }

    /// The pattern's segments, outermost first.
    #[must_use]
    pub fn segments(&self) -> &[PatternSegment] {
        &self.segments
    }

    /// Whether the pattern contains a `[*]` wildcard.
    #[must_use]
    pub fn has_wildcard(&self) -> bool {
        self.segments
            .iter()
            .any(|s| matches!(s, PatternSegment::AnyIndex))
    }

    /// Expand against a document into concrete field paths.
    ///
    /// Concrete segments always extend the path, whether or not the value
    /// exists, so a `Required` rule can still fire on a missing leaf. A
    /// wildcard fans out over the elements a list actually has; where the
    /// list is missing or not a list the pattern matches nothing.
    #[must_use]
    pub fn expand(&self, root: &Value) -> Vec<FieldPath> {
        let mut paths = Vec::new();
        expand_into(&self.segments, FieldPath::new(), Some(root), &mut paths);
        paths
    }
}

fn expand_into(
    segments: &[PatternSegment],
    prefix: FieldPath,
    current: Option<&Value>,
    out: &mut Vec<FieldPath>,
) {
    let Some((head, rest)) = segments.split_first() else {
        out.push(prefix);
        return;
    };

    match head {
        PatternSegment::Field(name) => {
            let next = current.and_then(|v| v.get(name.as_str()));
            expand_into(rest, prefix.child(name.clone()), next, out);
        }
        PatternSegment::Index(index) => {
            let next = current.and_then(|v| v.get(*index));
            expand_into(rest, prefix.index(*index), next, out);
        }
        PatternSegment::AnyIndex => {
            let Some(Value::Array(items)) = current else {
                return;
            };
            for (i, item) in items.iter().enumerate() {
                expand_into(rest, prefix.clone().index(i), Some(item), out);
            }
        }
    }
}

impl fmt::Display for PathPattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, segment) in self.segments.iter().enumerate() {
            match segment {
                PatternSegment::Field(name) => {
                    if i > 0 {
                        f.write_str(".")?;
                    }
                    f.write_str(name)?;
                }
                PatternSegment::Index(index) => write!(f, "[{index}]")?,
                PatternSegment::AnyIndex => f.write_str("[*]")?,
            }
        }
        Ok(())
    }
}

impl From<FieldPath> for PathPattern {
    fn from(path: FieldPath) -> Self {
        let segments = path
            .segments()
            .iter()
            .map(|s| match s {
                PathSegment::Field(name) => PatternSegment::Field(name.clone()),
                PathSegment::Index(index) => PatternSegment::Index(*index),
            })
            .collect();
        Self { segments }
    }
}
