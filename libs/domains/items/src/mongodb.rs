//! MongoDB implementation of ItemRepository

use async_trait::async_trait;
use futures_util::TryStreamExt;
use mongodb::{
    Collection, Database,
    bson::{Document, doc, oid::ObjectId},
};
use tracing::instrument;

use crate::error::{ItemError, ItemResult};
use crate::repository::ItemRepository;

/// Default collection name.
pub const COLLECTION_NAME: &str = "items";

/// MongoDB implementation of the ItemRepository
#[derive(Clone)]
pub struct MongoItemRepository {
    collection: Collection<Document>,
}

impl MongoItemRepository {
    /// Create a new MongoItemRepository
    ///
    /// # Example
    /// ```ignore
    /// let client = Client::with_uri_str("mongodb://localhost:27017").await?;
    /// let db = client.database("shop");
    /// let repo = MongoItemRepository::new(&db);
    /// ```
    pub fn new(db: &Database) -> Self {
        Self::with_collection(db, COLLECTION_NAME)
    }

    /// Create a new MongoItemRepository with a custom collection name
    pub fn with_collection(db: &Database, collection_name: &str) -> Self {
        let collection = db.collection::<Document>(collection_name);
        Self { collection }
    }
}

#[async_trait]
impl ItemRepository for MongoItemRepository {
    #[instrument(skip(self))]
    async fn list(&self) -> ItemResult<Vec<Document>> {
        let items: Vec<Document> = self.collection.find(doc! {}).await?.try_collect().await?;
        Ok(items)
    }

    #[instrument(skip(self, item))]
    async fn create(&self, item: Document) -> ItemResult<ObjectId> {
        let result = self.collection.insert_one(item).await?;

        let id = result.inserted_id.as_object_id().ok_or_else(|| {
            ItemError::Internal(format!(
                "insert returned a non-ObjectId id: {}",
                result.inserted_id
            ))
        })?;

        tracing::info!(item_id = %id, "Item created successfully");
        Ok(id)
    }

    #[instrument(skip(self))]
    async fn get_by_id(&self, id: ObjectId) -> ItemResult<Option<Document>> {
        let item = self.collection.find_one(doc! { "_id": id }).await?;
        Ok(item)
    }

    #[instrument(skip(self, changes))]
    async fn update(&self, id: ObjectId, changes: Document) -> ItemResult<bool> {
        // An empty PATCH body still has to report not-found correctly.
        if changes.is_empty() {
            let count = self.collection.count_documents(doc! { "_id": id }).await?;
            return Ok(count > 0);
        }

        let result = self
            .collection
            .update_one(doc! { "_id": id }, doc! { "$set": changes })
            .await?;

        if result.matched_count > 0 {
            tracing::info!(item_id = %id, "Item updated successfully");
        }
        Ok(result.matched_count > 0)
    }

    #[instrument(skip(self))]
    async fn delete(&self, id: ObjectId) -> ItemResult<bool> {
        let result = self.collection.delete_one(doc! { "_id": id }).await?;

        if result.deleted_count > 0 {
            tracing::info!(item_id = %id, "Item deleted successfully");
        }
        Ok(result.deleted_count > 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mongodb::Client;

    async fn repository() -> MongoItemRepository {
        let url = std::env::var("MONGO_URI")
            .unwrap_or_else(|_| "mongodb://localhost:27017".to_string());
        let client = Client::with_uri_str(url).await.unwrap();
        let db = client.database("shop_test");
        let repo = MongoItemRepository::with_collection(&db, "items_repository_test");
        repo.collection.delete_many(doc! {}).await.unwrap();
        repo
    }

    #[tokio::test]
    #[ignore] // Requires actual MongoDB
    async fn test_create_and_list() {
        let repo = repository().await;

        repo.create(doc! { "name": "Pen", "price": 2 }).await.unwrap();
        repo.create(doc! { "name": "Ink", "price": "3.10" }).await.unwrap();

        let items = repo.list().await.unwrap();
        assert_eq!(items.len(), 2);
        assert_eq!(items[1].get_str("price").unwrap(), "3.10");
    }

    #[tokio::test]
    #[ignore] // Requires actual MongoDB
    async fn test_update_and_delete() {
        let repo = repository().await;
        let id = repo.create(doc! { "name": "Pen", "price": 2 }).await.unwrap();

        assert!(repo.update(id, doc! { "price": 3 }).await.unwrap());
        assert!(repo.update(id, doc! {}).await.unwrap());
        assert_eq!(
            repo.get_by_id(id).await.unwrap().unwrap().get_i32("price").unwrap(),
            3
        );

        assert!(repo.delete(id).await.unwrap());
        assert!(!repo.update(id, doc! {}).await.unwrap());
        assert!(!repo.delete(id).await.unwrap());
    }
}
