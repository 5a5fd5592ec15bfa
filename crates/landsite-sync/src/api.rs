//! Content API abstraction
//!
//! Everything that loads or saves documents goes through [`ContentApi`],
//! so editing flows can run against the in-memory implementation in tests
//! and against an HTTP client in production without changing shape.

use async_trait::async_trait;
use landsite_core::{ContentDocument, DocumentKind};
use uuid::Uuid;

use crate::error::ApiResult;

/// Server-side content operations.
#[async_trait]
pub trait ContentApi: Send + Sync {
    /// Fetch the singleton page of a kind.
    ///
    /// # Errors
    ///
    /// Returns [`crate::ApiError::NotFound`] when the page has never been
    /// saved and [`crate::ApiError::Server`] when called for a collection
    /// kind, which needs an id.
    async fn fetch(&self, kind: DocumentKind) -> ApiResult<ContentDocument>;

    /// Fetch one collection item by id.
    ///
    /// # Errors
    ///
    /// Returns [`crate::ApiError::NotFound`] when no item with that id
    /// exists.
    async fn fetch_item(&self, kind: DocumentKind, id: Uuid) -> ApiResult<ContentDocument>;

    /// List every item of a collection kind, most recently updated first.
    ///
    /// # Errors
    ///
    /// Returns a transport or server error when the call fails.
    async fn list(&self, kind: DocumentKind) -> ApiResult<Vec<ContentDocument>>;

    /// Create a new document, returning the stored copy with its assigned
    /// id and timestamps.
    ///
    /// # Errors
    ///
    /// Returns [`crate::ApiError::Rejected`] when the document already has
    /// an id.
    async fn create(&self, document: &ContentDocument) -> ApiResult<ContentDocument>;

    /// Update an existing document, returning the stored copy.
    ///
    /// Singleton pages upsert; collection items must already exist.
    ///
    /// # Errors
    ///
    /// Returns [`crate::ApiError::NotFound`] for an unknown collection
    /// item or an item update without an id.
    async fn update(&self, document: &ContentDocument) -> ApiResult<ContentDocument>;

    /// Delete one collection item.
    ///
    /// # Errors
    ///
    /// Returns [`crate::ApiError::Rejected`] for singleton kinds and
    /// [`crate::ApiError::NotFound`] when the item does not exist.
    async fn delete(&self, kind: DocumentKind, id: Uuid) -> ApiResult<()>;
}
