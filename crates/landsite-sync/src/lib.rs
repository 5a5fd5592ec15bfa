//! Server synchronization and the save pipeline for landsite
//!
//! Everything between an open form and the content server lives here: the
//! [`ContentApi`] contract with its in-memory reference backend, the
//! [`Loader`] that fills the content cache on fetch, the
//! [`SubmitPipeline`] that validates and saves, and the notification
//! sinks that carry outcomes back to the screen.

#![forbid(unsafe_code)]
#![warn(
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    missing_docs,
    rust_2018_idioms
)]

pub mod api;
pub mod error;
pub mod loader;
pub mod memory;
pub mod notify;
pub mod submit;

// Re-export commonly used types
pub use api::ContentApi;
pub use error::{ApiError, ApiResult};
pub use loader::Loader;
pub use memory::InMemoryContentApi;
pub use notify::{
    Notification, NotificationKind, NotificationSink, RecordingNotifier, TracingNotifier,
};
pub use submit::{SubmitOutcome, SubmitPipeline, SubmitState};
