//! Document schemas
//!
//! A [`Schema`] binds a document kind to an ordered list of rules. Each
//! rule pairs a path pattern with the checks applied at every path the
//! pattern expands to. Validation walks rules in declaration order and
//! keeps the first failure per concrete path.

use landsite_core::DocumentKind;
use serde_json::Value;

use crate::error::SchemaResult;
use crate::pattern::PathPattern;
use crate::report::ValidationReport;
use crate::rules::FieldRule;

/// One pattern with the checks applied to its expansion.
#[derive(Debug, Clone)]
pub struct SchemaRule {
    pattern: PathPattern,
    checks: Vec<FieldRule>,
}

impl SchemaRule {
    /// The rule's path pattern.
    #[must_use]
    pub const fn pattern(&self) -> &PathPattern {
        &self.pattern
    }

    /// The checks applied at each expanded path, in order.
    #[must_use]
    pub fn checks(&self) -> &[FieldRule] {
        &self.checks
    }
}

/// Validation schema for one document kind.
#[derive(Debug, Clone)]
pub struct Schema {
    kind: DocumentKind,
    rules: Vec<SchemaRule>,
}

impl Schema {
    /// Start building a schema for a document kind.
    #[must_use]
    pub const fn builder(kind: DocumentKind) -> SchemaBuilder {
        SchemaBuilder {
            kind,
            rules: Vec::new(),
        }
    }

    /// The document kind this schema validates.
    #[must_use]
    pub const fn kind(&self) -> DocumentKind {
        self.kind
    }

    /// The schema's rules in declaration order.
    #[must_use]
    pub fn rules(&self) -> &[SchemaRule] {
        &self.rules
    }

    /// Validate a document's fields.
    ///
    /// Rules run in declaration order; per concrete path only the first
    /// failing check is reported.
    #[must_use]
    pub fn validate(&self, fields: &Value) -> ValidationReport {
        let mut report = ValidationReport::new();

        for rule in &self.rules {
            for path in rule.pattern.expand(fields) {
                let value = path.resolve(fields);
                for check in &rule.checks {
                    if let Some(message) = check.check(value) {
                        report.add(path.clone(), message);
                        break;
                    }
                }
            }
        }

        report
    }
}

/// Builder collecting rules before pattern parsing.
#[derive(Debug)]
pub struct SchemaBuilder {
    kind: DocumentKind,
    rules: Vec<(String, Vec<FieldRule>)>,
}

impl SchemaBuilder {
    /// Add a rule: a pattern and the checks applied at each path it
    /// expands to.
    #[must_use]
    pub fn rule(
        mut self,
        pattern: impl Into<String>,
        checks: impl IntoIterator<Item = FieldRule>,
    ) -> Self {
        self.rules
            .push((pattern.into(), checks.into_iter().collect()));
        self
    }

    /// Parse every pattern and produce the schema.
    ///
    /// # Errors
    ///
    /// Returns [`crate::SchemaError::InvalidPattern`] for the first pattern
    /// that does not parse.
    pub fn build(self) -> SchemaResult<Schema> {
        let mut rules = Vec::with_capacity(self.rules.len());
        for (pattern, checks) in self.rules {
            rules.push(SchemaRule {
                pattern: PathPattern::parse(&pattern)?,
                checks,
            });
        }

        Ok(Schema {
            kind: self.kind,
            rules,
        })
    }
}
