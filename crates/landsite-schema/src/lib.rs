//! Validation schemas for landsite content documents
//!
//! Schemas pair path patterns with field rules and produce ordered
//! validation reports. The built-in [`SchemaCatalog`] covers every
//! document kind the admin edits.

#![forbid(unsafe_code)]
#![warn(
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    missing_docs,
    rust_2018_idioms
)]

pub mod catalog;
pub mod error;
pub mod pattern;
pub mod report;
pub mod rules;
pub mod schema;

// Re-export commonly used types
pub use catalog::SchemaCatalog;
pub use error::{SchemaError, SchemaResult};
pub use pattern::{PathPattern, PatternSegment};
pub use report::ValidationReport;
pub use rules::FieldRule;
pub use schema::{Schema, SchemaBuilder, SchemaRule};
