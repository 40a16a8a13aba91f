use database::mongodb::{is_truthy, json_to_bson};
use mongodb::bson::{doc, Bson, DateTime, Document};
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use utoipa::ToSchema;

use crate::error::{ProductError, ProductResult};
use crate::query::coerce_value;

/// Product as stored and returned by the API.
///
/// Documents are loosely typed: fields merged in through `PUT` are kept and
/// returned verbatim, so this type only documents the create-time shape.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct Product {
    /// 24-hex ObjectId
    #[serde(rename = "_id")]
    #[schema(example = "65a1b2c3d4e5f60718293a4b")]
    pub id: String,
    pub name: String,
    pub price: f64,
    pub category: String,
    /// Server-assigned creation time (RFC 3339)
    #[serde(rename = "createdAt")]
    pub created_at: String,
}

/// Body of `POST /api/products`.
///
/// Fields are loosely typed so presence is judged on the value itself:
/// `name` and `category` must be truthy, `price` only has to be sent
/// (an explicit `null` counts as sent and casts to `0`).
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
pub struct CreateProduct {
    #[schema(value_type = String, example = "Desk lamp")]
    pub name: Option<Value>,
    #[serde(default, deserialize_with = "sent")]
    #[schema(value_type = f64, example = 39.9)]
    pub price: Option<Value>,
    #[schema(value_type = String, example = "home")]
    pub category: Option<Value>,
}

/// Keeps an explicit `null` as `Some(Value::Null)`; only an absent key is `None`.
fn sent<'de, D>(deserializer: D) -> Result<Option<Value>, D::Error>
where
    D: Deserializer<'de>,
{
    Value::deserialize(deserializer).map(Some)
}

impl CreateProduct {
    /// Presence check and price cast, stamping `createdAt` with `now`.
    pub fn validate(self, now: DateTime) -> ProductResult<NewProduct> {
        let name = self.name.filter(is_truthy);
        let category = self.category.filter(is_truthy);

        match (name, self.price, category) {
            (Some(name), Some(price), Some(category)) => Ok(NewProduct {
                name: json_to_bson(name),
                price: coerce_value(&price),
                category: json_to_bson(category),
                created_at: now,
            }),
            _ => Err(ProductError::MissingFields),
        }
    }
}

/// A validated product ready for insertion.
///
/// `name` and `category` are stored as sent, whatever their JSON type.
#[derive(Debug, Clone, PartialEq)]
pub struct NewProduct {
    pub name: Bson,
    pub price: f64,
    pub category: Bson,
    pub created_at: DateTime,
}

impl NewProduct {
    pub fn into_document(self) -> Document {
        doc! {
            "name": self.name,
            "price": self.price,
            "category": self.category,
            "createdAt": self.created_at,
        }
    }
}

/// Response of `GET /api/products`.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ProductList {
    pub count: usize,
    #[schema(value_type = Vec<Product>)]
    pub products: Vec<Value>,
}

/// Response of a successful create.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct CreatedResponse {
    #[schema(example = "65a1b2c3d4e5f60718293a4b")]
    pub id: String,
}

/// Response of a successful update or delete.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct MessageResponse {
    #[schema(example = "Updated")]
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}
