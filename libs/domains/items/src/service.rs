//! Item Service - Business logic layer

use std::sync::Arc;

use mongodb::bson::{Document, oid::ObjectId};
use tracing::instrument;

use crate::error::{ItemError, ItemResult};
use crate::models::ItemFields;
use crate::repository::ItemRepository;

/// Item service providing business logic operations
pub struct ItemService<R: ItemRepository> {
    repository: Arc<R>,
}

impl<R: ItemRepository> ItemService<R> {
    /// Create a new ItemService with the given repository
    pub fn new(repository: R) -> Self {
        Self {
            repository: Arc::new(repository),
        }
    }

    /// List every item
    #[instrument(skip(self))]
    pub async fn list_items(&self) -> ItemResult<Vec<Document>> {
        self.repository.list().await
    }

    /// Create an item, storing the body as sent
    #[instrument(skip(self, fields))]
    pub async fn create_item(&self, fields: ItemFields) -> ItemResult<ObjectId> {
        fields.require_name_and_price()?;
        self.repository.create(fields.into_document()).await
    }

    /// Get an item by ID
    #[instrument(skip(self))]
    pub async fn get_item(&self, id: ObjectId) -> ItemResult<Document> {
        self.repository
            .get_by_id(id)
            .await?
            .ok_or(ItemError::NotFound(id))
    }

    /// `PUT`: requires `name` and `price`, then merges the body.
    #[instrument(skip(self, fields))]
    pub async fn replace_item(&self, id: ObjectId, fields: ItemFields) -> ItemResult<()> {
        fields.require_name_and_price()?;
        self.merge(id, fields).await
    }

    /// `PATCH`: merges whatever fields were sent.
    #[instrument(skip(self, fields))]
    pub async fn patch_item(&self, id: ObjectId, fields: ItemFields) -> ItemResult<()> {
        self.merge(id, fields).await
    }

    /// Delete an item
    #[instrument(skip(self))]
    pub async fn delete_item(&self, id: ObjectId) -> ItemResult<()> {
        if self.repository.delete(id).await? {
            Ok(())
        } else {
            Err(ItemError::NotFound(id))
        }
    }

    async fn merge(&self, id: ObjectId, fields: ItemFields) -> ItemResult<()> {
        if self.repository.update(id, fields.into_document()).await? {
            Ok(())
        } else {
            Err(ItemError::NotFound(id))
        }
    }
}

impl<R: ItemRepository> Clone for ItemService<R> {
    fn clone(&self) -> Self {
        Self {
            repository: Arc::clone(&self.repository),
        }
    }
}
