//! Form state binding and list editing for landsite documents
//!
//! The [`FormBinder`] holds one document's working copy with dirty
//! tracking, [`GroupController`] edits its ordered lists, and the
//! [`Reconciler`] decides what happens to local edits when fresh server
//! content lands.

#![forbid(unsafe_code)]
#![warn(
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    missing_docs,
    rust_2018_idioms
)]

pub mod binder;
pub mod error;
pub mod groups;
pub mod reconcile;

// Re-export commonly used types
pub use binder::FormBinder;
pub use error::{FormError, FormResult};
pub use groups::{GroupController, LOCAL_ID_FIELD, POSITION_FIELD};
pub use reconcile::{ReconcileOutcome, ReconcilePolicy, Reconciler};
