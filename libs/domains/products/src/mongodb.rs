//! MongoDB implementation of ProductRepository

use async_trait::async_trait;
use futures_util::TryStreamExt;
use mongodb::{
    bson::{doc, oid::ObjectId, Document},
    Collection, Database,
};
use tracing::instrument;

use crate::error::{ProductError, ProductResult};
use crate::models::NewProduct;
use crate::query::ProductQuery;
use crate::repository::ProductRepository;

/// Default collection name.
pub const COLLECTION_NAME: &str = "products";

/// MongoDB implementation of the ProductRepository
#[derive(Clone)]
pub struct MongoProductRepository {
    collection: Collection<Document>,
}

impl MongoProductRepository {
    /// Create a new MongoProductRepository
    pub fn new(db: &Database) -> Self {
        Self::with_collection(db, COLLECTION_NAME)
    }

    /// Create a new MongoProductRepository with a custom collection name
    pub fn with_collection(db: &Database, collection_name: &str) -> Self {
        let collection = db.collection::<Document>(collection_name);
        Self { collection }
    }
}

#[async_trait]
impl ProductRepository for MongoProductRepository {
    #[instrument(skip(self))]
    async fn list(&self, query: ProductQuery) -> ProductResult<Vec<Document>> {
        let mut find = self.collection.find(query.filter());

        if let Some(sort) = query.sort() {
            find = find.sort(sort);
        }
        if let Some(projection) = query.projection() {
            find = find.projection(projection);
        }

        let products: Vec<Document> = find.await?.try_collect().await?;
        tracing::debug!(count = products.len(), "Products listed");
        Ok(products)
    }

    #[instrument(skip(self, product), fields(product_name = %product.name))]
    async fn create(&self, product: NewProduct) -> ProductResult<ObjectId> {
        let result = self.collection.insert_one(product.into_document()).await?;

        let id = result.inserted_id.as_object_id().ok_or_else(|| {
            ProductError::Internal(format!(
                "insert returned a non-ObjectId id: {}",
                result.inserted_id
            ))
        })?;

        tracing::info!(product_id = %id, "Product created successfully");
        Ok(id)
    }

    #[instrument(skip(self))]
    async fn get_by_id(&self, id: ObjectId) -> ProductResult<Option<Document>> {
        let product = self.collection.find_one(doc! { "_id": id }).await?;
        Ok(product)
    }

    #[instrument(skip(self, changes))]
    async fn update(&self, id: ObjectId, changes: Document) -> ProductResult<bool> {
        // `$set` rejects an empty document; nothing to merge is an existence check.
        if changes.is_empty() {
            let count = self.collection.count_documents(doc! { "_id": id }).await?;
            return Ok(count > 0);
        }

        let result = self
            .collection
            .update_one(doc! { "_id": id }, doc! { "$set": changes })
            .await?;

        if result.matched_count > 0 {
            tracing::info!(product_id = %id, "Product updated successfully");
        }
        Ok(result.matched_count > 0)
    }

    #[instrument(skip(self))]
    async fn delete(&self, id: ObjectId) -> ProductResult<bool> {
        let result = self.collection.delete_one(doc! { "_id": id }).await?;

        if result.deleted_count > 0 {
            tracing::info!(product_id = %id, "Product deleted successfully");
        }
        Ok(result.deleted_count > 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::query::ProductListParams;
    use mongodb::{bson::DateTime, Client};

    async fn repository() -> MongoProductRepository {
        let url = std::env::var("MONGO_URI")
            .unwrap_or_else(|_| "mongodb://localhost:27017".to_string());
        let client = Client::with_uri_str(url).await.unwrap();
        let db = client.database("shop_test");
        let repo = MongoProductRepository::with_collection(&db, "products_repository_test");
        repo.collection.delete_many(doc! {}).await.unwrap();
        repo
    }

    fn product(name: &str, price: f64, category: &str) -> NewProduct {
        NewProduct {
            name: name.into(),
            price,
            category: category.into(),
            created_at: DateTime::now(),
        }
    }

    #[tokio::test]
    #[ignore] // Requires actual MongoDB
    async fn test_crud_round_trip() {
        let repo = repository().await;

        let id = repo.create(product("Lamp", 20.0, "home")).await.unwrap();
        let stored = repo.get_by_id(id).await.unwrap().unwrap();
        assert_eq!(stored.get_str("name").unwrap(), "Lamp");
        assert!(stored.get_datetime("createdAt").is_ok());

        assert!(repo.update(id, doc! { "price": 25.0, "color": "red" }).await.unwrap());
        let stored = repo.get_by_id(id).await.unwrap().unwrap();
        assert_eq!(stored.get_f64("price").unwrap(), 25.0);
        assert_eq!(stored.get_str("color").unwrap(), "red");

        assert!(repo.delete(id).await.unwrap());
        assert!(!repo.delete(id).await.unwrap());
        assert!(repo.get_by_id(id).await.unwrap().is_none());
    }

    #[tokio::test]
    #[ignore] // Requires actual MongoDB
    async fn test_list_filters_sorts_projects() {
        let repo = repository().await;
        repo.create(product("A", 5.0, "toys")).await.unwrap();
        repo.create(product("B", 15.0, "toys")).await.unwrap();
        repo.create(product("C", 25.0, "books")).await.unwrap();

        let query = ProductQuery::from(ProductListParams {
            category: Some("toys".into()),
            min_price: Some("1".into()),
            sort: Some("-price".into()),
            fields: Some("name".into()),
        });
        let products = repo.list(query).await.unwrap();

        let names: Vec<&str> = products.iter().map(|p| p.get_str("name").unwrap()).collect();
        assert_eq!(names, ["B", "A"]);
        assert!(products.iter().all(|p| p.keys().count() == 2));
    }
}
