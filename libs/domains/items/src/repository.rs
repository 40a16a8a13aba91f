use async_trait::async_trait;
use mongodb::bson::{Document, oid::ObjectId};

use crate::error::ItemResult;

/// Repository trait for Item persistence
///
/// Items are schemaless, so the repository speaks plain BSON documents.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ItemRepository: Send + Sync {
    /// Every item, in store order
    async fn list(&self) -> ItemResult<Vec<Document>>;

    /// Insert a document and return its generated id
    async fn create(&self, item: Document) -> ItemResult<ObjectId>;

    /// Get an item by ID
    async fn get_by_id(&self, id: ObjectId) -> ItemResult<Option<Document>>;

    /// Merge top-level fields into an item. Returns whether an item matched.
    async fn update(&self, id: ObjectId, changes: Document) -> ItemResult<bool>;

    /// Delete an item by ID
    async fn delete(&self, id: ObjectId) -> ItemResult<bool>;
}
