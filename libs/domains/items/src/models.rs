use database::mongodb::{is_truthy, json_object_to_document};
use mongodb::bson::Document;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use utoipa::ToSchema;

use crate::error::{ItemError, ItemResult};

/// Item as stored and returned by the API.
///
/// Only `name` and `price` are known; any other field a client sends is
/// stored and returned untouched.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct Item {
    /// 24-hex ObjectId
    #[serde(rename = "_id")]
    #[schema(example = "65a1b2c3d4e5f60718293a4b")]
    pub id: String,
    #[schema(example = "Notebook")]
    pub name: String,
    /// Whatever JSON value the client sent
    pub price: Value,
}

/// Body of `POST /api/items` and `PUT /api/items/{id}`.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CreateItem {
    #[schema(example = "Notebook")]
    pub name: String,
    pub price: Value,
}

/// Client-supplied item fields, kept in the order they were sent.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ItemFields(Map<String, Value>);

impl ItemFields {
    pub fn new(fields: Map<String, Value>) -> Self {
        Self(fields)
    }

    /// Presence check for `name` and `price`.
    ///
    /// `name` must be truthy (not `null`, `false`, `0` or `""`); `price` may
    /// be any non-null value.
    pub fn require_name_and_price(&self) -> ItemResult<()> {
        let name_present = self.0.get("name").is_some_and(is_truthy);
        let price_present = self.0.get("price").is_some_and(|price| !price.is_null());

        if name_present && price_present {
            Ok(())
        } else {
            Err(ItemError::MissingFields)
        }
    }

    /// BSON document for insert or `$set`, without any client `_id`.
    pub fn into_document(mut self) -> Document {
        self.0.remove("_id");
        json_object_to_document(self.0)
    }
}

impl From<Map<String, Value>> for ItemFields {
    fn from(fields: Map<String, Value>) -> Self {
        Self::new(fields)
    }
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
