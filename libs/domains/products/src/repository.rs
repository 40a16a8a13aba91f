use async_trait::async_trait;
use mongodb::bson::{oid::ObjectId, Document};

use crate::error::ProductResult;
use crate::models::NewProduct;
use crate::query::ProductQuery;

/// Repository trait for Product persistence
///
/// Products are handled as raw documents so fields added through updates
/// survive a round trip.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ProductRepository: Send + Sync {
    /// Run a listing query (filter, sort, projection)
    async fn list(&self, query: ProductQuery) -> ProductResult<Vec<Document>>;

    /// Insert a new product and return its generated id
    async fn create(&self, product: NewProduct) -> ProductResult<ObjectId>;

    /// Get a product by ID
    async fn get_by_id(&self, id: ObjectId) -> ProductResult<Option<Document>>;

    /// Merge `changes` into the stored product (`$set`).
    ///
    /// Returns whether a document with `id` exists.
    async fn update(&self, id: ObjectId, changes: Document) -> ProductResult<bool>;

    /// Delete a product by ID, returning whether one was removed
    async fn delete(&self, id: ObjectId) -> ProductResult<bool>;
}
