//! In-memory content cache, activity log, and starter content for landsite
//!
//! The [`ContentStore`] keeps server-confirmed documents for instant reads,
//! the [`ActivityLog`] feeds the dashboard's recent activity panel, and
//! [`seed`] provides believable starter content for empty deployments.

#![forbid(unsafe_code)]
#![warn(
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    missing_docs,
    rust_2018_idioms
)]

pub mod activity;
pub mod cache;
pub mod error;
pub mod seed;

// Re-export commonly used types
pub use activity::{ActivityLog, ActivitySink};
pub use cache::{ContentStore, StoreStats};
pub use error::{StoreError, StoreResult};
pub use seed::{starter_document, starter_documents};
