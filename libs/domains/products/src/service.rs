//! Product Service - Business logic layer

use std::sync::Arc;

use database::mongodb::json_object_to_document;
use mongodb::bson::{oid::ObjectId, DateTime, Document};
use serde_json::{Map, Value};
use tracing::instrument;

use crate::error::{ProductError, ProductResult};
use crate::models::CreateProduct;
use crate::query::ProductQuery;
use crate::repository::ProductRepository;

/// Product service providing business logic operations
///
/// Validation happens here, before any repository call.
pub struct ProductService<R: ProductRepository> {
    repository: Arc<R>,
}

impl<R: ProductRepository> ProductService<R> {
    /// Create a new ProductService with the given repository
    pub fn new(repository: R) -> Self {
        Self {
            repository: Arc::new(repository),
        }
    }

    /// List products matching a query
    #[instrument(skip(self))]
    pub async fn list_products(&self, query: ProductQuery) -> ProductResult<Vec<Document>> {
        if query.is_unsatisfiable() {
            tracing::debug!("Non-numeric minPrice, returning no products");
            return Ok(Vec::new());
        }

        self.repository.list(query).await
    }

    /// Create a new product, stamping `createdAt`
    #[instrument(skip(self, input))]
    pub async fn create_product(&self, input: CreateProduct) -> ProductResult<ObjectId> {
        let product = input.validate(DateTime::now())?;
        self.repository.create(product).await
    }

    /// Get a product by ID
    #[instrument(skip(self))]
    pub async fn get_product(&self, id: ObjectId) -> ProductResult<Document> {
        self.repository
            .get_by_id(id)
            .await?
            .ok_or(ProductError::NotFound(id))
    }

    /// Merge the body's top-level fields into a product. No field validation;
    /// `_id` is never overwritten.
    #[instrument(skip(self, changes))]
    pub async fn update_product(
        &self,
        id: ObjectId,
        mut changes: Map<String, Value>,
    ) -> ProductResult<()> {
        changes.remove("_id");

        let matched = self
            .repository
            .update(id, json_object_to_document(changes))
            .await?;

        if matched {
            Ok(())
        } else {
            Err(ProductError::NotFound(id))
        }
    }

    /// Delete a product
    #[instrument(skip(self))]
    pub async fn delete_product(&self, id: ObjectId) -> ProductResult<()> {
        if self.repository.delete(id).await? {
            Ok(())
        } else {
            Err(ProductError::NotFound(id))
        }
    }
}

impl<R: ProductRepository> Clone for ProductService<R> {
    fn clone(&self) -> Self {
        Self {
            repository: Arc::clone(&self.repository),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::query::ProductListParams;
    use crate::repository::MockProductRepository;
    use mockall::predicate::eq;
    use mongodb::bson::{doc, Bson};
    use serde_json::json;

    fn object(value: Value) -> Map<String, Value> {
        match value {
            Value::Object(map) => map,
            _ => panic!("expected a JSON object"),
        }
    }

    #[tokio::test]
    async fn test_list_passes_query_to_repository() {
        let mut mock_repo = MockProductRepository::new();
        let query = ProductQuery::from(ProductListParams {
            category: Some("toys".into()),
            ..Default::default()
        });

        mock_repo
            .expect_list()
            .with(eq(query.clone()))
            .times(1)
            .returning(|_| Ok(vec![doc! { "name": "Yo-yo" }]));

        let service = ProductService::new(mock_repo);
        let products = service.list_products(query).await.unwrap();

        assert_eq!(products.len(), 1);
    }

    #[tokio::test]
    async fn test_list_with_nan_min_price_skips_repository() {
        let mut mock_repo = MockProductRepository::new();
        mock_repo.expect_list().never();

        let query = ProductQuery::from(ProductListParams {
            min_price: Some("abc".into()),
            ..Default::default()
        });

        let service = ProductService::new(mock_repo);
        assert!(service.list_products(query).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_create_rejects_missing_fields_without_insert() {
        let mut mock_repo = MockProductRepository::new();
        mock_repo.expect_create().never();

        let service = ProductService::new(mock_repo);
        let input = CreateProduct {
            name: Some("Lamp".into()),
            price: None,
            category: Some("home".into()),
        };

        let err = service.create_product(input).await.unwrap_err();
        assert!(matches!(err, ProductError::MissingFields));
    }

    #[tokio::test]
    async fn test_create_casts_price_and_returns_id() {
        let mut mock_repo = MockProductRepository::new();
        let id = ObjectId::new();

        mock_repo
            .expect_create()
            .withf(|p| {
                p.name == Bson::from("Lamp")
                    && p.price == 12.5
                    && p.category == Bson::from("home")
            })
            .times(1)
            .returning(move |_| Ok(id));

        let service = ProductService::new(mock_repo);
        let input: CreateProduct =
            serde_json::from_value(json!({ "name": "Lamp", "price": "12.5", "category": "home" }))
                .unwrap();

        assert_eq!(service.create_product(input).await.unwrap(), id);
    }

    #[tokio::test]
    async fn test_get_missing_product_is_not_found() {
        let mut mock_repo = MockProductRepository::new();
        let id = ObjectId::new();

        mock_repo
            .expect_get_by_id()
            .with(eq(id))
            .returning(|_| Ok(None));

        let service = ProductService::new(mock_repo);
        let err = service.get_product(id).await.unwrap_err();
        assert!(matches!(err, ProductError::NotFound(missing) if missing == id));
    }

    #[tokio::test]
    async fn test_update_strips_id_and_merges() {
        let mut mock_repo = MockProductRepository::new();
        let id = ObjectId::new();

        mock_repo
            .expect_update()
            .withf(move |target, changes| {
                *target == id && *changes == doc! { "price": 30, "color": "red" }
            })
            .times(1)
            .returning(|_, _| Ok(true));

        let service = ProductService::new(mock_repo);
        let changes = object(json!({ "_id": "bogus", "price": 30, "color": "red" }));

        service.update_product(id, changes).await.unwrap();
    }

    #[tokio::test]
    async fn test_update_unmatched_is_not_found() {
        let mut mock_repo = MockProductRepository::new();
        mock_repo.expect_update().returning(|_, _| Ok(false));

        let service = ProductService::new(mock_repo);
        let err = service
            .update_product(ObjectId::new(), object(json!({ "price": 1 })))
            .await
            .unwrap_err();
        assert!(matches!(err, ProductError::NotFound(_)));
    }

    #[tokio::test]
    async fn test_delete_twice() {
        let mut mock_repo = MockProductRepository::new();
        let id = ObjectId::new();
        let mut seq = mockall::Sequence::new();

        mock_repo
            .expect_delete()
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_| Ok(true));
        mock_repo
            .expect_delete()
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_| Ok(false));

        let service = ProductService::new(mock_repo);
        service.delete_product(id).await.unwrap();
        let err = service.delete_product(id).await.unwrap_err();
        assert!(matches!(err, ProductError::NotFound(_)));
    }

    #[tokio::test]
    async fn test_database_error_propagates() {
        let mut mock_repo = MockProductRepository::new();
        mock_repo
            .expect_list()
            .returning(|_| Err(ProductError::Database("socket closed".into())));

        let service = ProductService::new(mock_repo);
        let err = service
            .list_products(ProductQuery::default())
            .await
            .unwrap_err();
        assert!(matches!(err, ProductError::Database(_)));
    }
}
