//! Typed field paths over nested content trees
//!
//! Every document's fields form a tree of objects, ordered lists, and
//! scalars. A [`FieldPath`] addresses one position in that tree the way the
//! admin forms name their inputs: object fields separated by dots, list
//! elements addressed with zero-based `[n]` suffixes, e.g.
//! `hero.slides[2].title`.

use serde::de::{self, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value;
use std::fmt;
use std::str::FromStr;

use crate::{Error, Result};

/// One step in a [`FieldPath`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum PathSegment {
    /// Named field of an object
    Field(String),
    /// Zero-based element of a list
    Index(usize),
}

/// Dotted, indexed path to one position inside a content tree.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct FieldPath {
    segments: Vec<PathSegment>,
}

impl FieldPath {
    /// The empty path, addressing the tree root.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            segments: Vec::new(),
        }
    }

    /// A single-field path.
    #[must_use]
    pub fn field(name: impl Into<String>) -> Self {
        Self {
            segments: vec![PathSegment::Field(name.into())],
        }
    }

    /// Parse a path from its textual form.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidPath`] on empty input, empty field names,
    /// malformed or unterminated indexes, and characters outside
    /// `[A-Za-z0-9_-]` in field names.
    pub fn parse(input: &str) -> Result<Self> {
        fn invalid(input: &str, message: impl Into<String>) -> Error {
            Error::InvalidPath {
                path: input.to_string(),
                message: message.into(),
            }
        }

        if input.is_empty() {
            return Err(invalid(input, "path is empty"));
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
            segments.push(PathSegment::Field(name));

            while chars.peek() == Some(&'[') {
                chars.next();
                let mut digits = String::new();
                while let Some(&c) = chars.peek() {
                    if c == ']' {
                        break;
                    }
                    digits.push(c);
                    chars.next();
                }
                if chars.next() != Some(']') {
                    return Err(invalid(input, "unterminated index"));
                }
                let index = digits
                    .parse::<usize>()
                    .map_err(|_| invalid(input, format!("invalid index '{digits}'")))?;
                segments.push(PathSegment::Index(index));
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

    /// Extend the path with an object field.
    #[must_use]
    pub fn child(mut self, name: impl Into<String>) -> Self {
        self.segments.push(PathSegment::Field(name.into()));
        self
    }

    /// Extend the path with a list index.
    #[must_use]
    pub fn index(mut self, index: usize) -> Self {
        self.segments.push(PathSegment::Index(index));
        self
    }

    /// The path's segments, outermost first.
    #[must_use]
    pub fn segments(&self) -> &[PathSegment] {
        &self.segments
    }

    /// Number of segments.
    #[must_use]
    pub fn len(&self) -> usize {
        self.segments.len()
    }

    /// Whether this is the root path.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// Read the value at this path, if every step exists.
    #[must_use]
    pub fn resolve<'a>(&self, root: &'a Value) -> Option<&'a Value> {
        let mut current = root;
        for segment in &self.segments {
            current = match segment {
                PathSegment::Field(name) => current.get(name.as_str())?,
                PathSegment::Index(index) => current.get(*index)?,
            };
        }
        Some(current)
    }

    /// Mutable access to the value at this path, if every step exists.
    pub fn resolve_mut<'a>(&self, root: &'a mut Value) -> Option<&'a mut Value> {
        let mut current = root;
        for segment in &self.segments {
            current = match segment {
                PathSegment::Field(name) => current.get_mut(name.as_str())?,
                PathSegment::Index(index) => current.get_mut(*index)?,
            };
        }
        Some(current)
    }

    /// Write `value` at this path, returning the previous value if any.
    ///
    /// Missing or null intermediate objects are created on the way down.
    /// List elements are never fabricated: an index step requires an
    /// existing element at that position.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidPath`] when the path is empty, when an index
    /// is out of bounds, or when a step runs into a value of the wrong type
    /// (e.g. descending into a string).
    pub fn set(&self, root: &mut Value, value: Value) -> Result<Option<Value>> {
        let Some((last, parents)) = self.segments.split_last() else {
            return Err(self.error("cannot write to the document root"));
        };

        let mut current = root;
        for segment in parents {
            current = match segment {
                PathSegment::Field(name) => {
                    if current.is_null() {
                        *current = Value::Object(serde_json::Map::new());
                    }
                    match current {
                        Value::Object(map) => map.entry(name.clone()).or_insert(Value::Null),
                        other => {
                            let found = json_type_name(other);
                            return Err(
                                self.error(format!("cannot descend into {found} at '{name}'"))
                            );
                        }
                    }
                }
                PathSegment::Index(index) => match current {
                    Value::Array(items) => {
                        let len = items.len();
                        items.get_mut(*index).ok_or_else(|| {
                            self.error(format!(
                                "index {index} out of bounds for list of length {len}"
                            ))
                        })?
                    }
                    other => {
                        let found = json_type_name(other);
                        return Err(self.error(format!("cannot index into {found}")));
                    }
                },
            };
        }

        match last {
            PathSegment::Field(name) => {
                if current.is_null() {
                    *current = Value::Object(serde_json::Map::new());
                }
                match current {
                    Value::Object(map) => Ok(map.insert(name.clone(), value)),
                    other => {
                        let found = json_type_name(other);
                        Err(self.error(format!("cannot write field '{name}' into {found}")))
                    }
                }
            }
            PathSegment::Index(index) => match current {
                Value::Array(items) => {
                    let len = items.len();
                    let slot = items.get_mut(*index).ok_or_else(|| {
                        self.error(format!(
                            "index {index} out of bounds for list of length {len}"
                        ))
                    })?;
                    Ok(Some(std::mem::replace(slot, value)))
                }
                other => {
                    let found = json_type_name(other);
                    Err(self.error(format!("cannot index into {found}")))
                }
            },
        }
    }

    fn error(&self, message: impl Into<String>) -> Error {
        Error::InvalidPath {
            path: self.to_string(),
            message: message.into(),
        }
    }
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "a list",
        Value::Object(_) => "an object",
    }
}

impl fmt::Display for FieldPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, segment) in self.segments.iter().enumerate() {
            match segment {
                PathSegment::Field(name) => {
                    if i > 0 {
                        f.write_str(".")?;
                    }
                    f.write_str(name)?;
                }
                PathSegment::Index(index) => write!(f, "[{index}]")?,
            }
        }
        Ok(())
    }
}

impl FromStr for FieldPath {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl Serialize for FieldPath {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for FieldPath {
    fn deserialize<D: Deserializer<'de>>(
        deserializer: D,
    ) -> std::result::Result<Self, D::Error> {
        struct PathVisitor;

        impl Visitor<'_> for PathVisitor {
            type Value = FieldPath;

            fn expecting(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
                formatter.write_str("a dotted field path like 'hero.slides[0].title'")
            }

            fn visit_str<E: de::Error>(self, v: &str) -> std::result::Result<Self::Value, E> {
                FieldPath::parse(v).map_err(de::Error::custom)
            }
        }

        deserializer.deserialize_str(PathVisitor)
    }
}
