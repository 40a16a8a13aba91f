//! MongoDB database connector and utilities
//!
//! Provides connection management, health checks and BSON/JSON conversion.

mod config;
mod connector;
mod document;
mod health;

pub use config::{DEFAULT_DATABASE, MongoConfig};
pub use connector::connect_from_config;
pub use document::{
    bson_to_json, document_to_json, is_truthy, json_object_to_document, json_to_bson,
};
pub use health::check_health;

// Re-export MongoDB types for convenience
pub use ::mongodb::{Client, Collection, Database, bson};
