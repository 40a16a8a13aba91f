//! Items API routes
//!
//! Writes are gated on `x-api-key` when `API_KEY` is configured.

use axum::Router;
use domain_items::{ItemService, MongoItemRepository, handlers};
use tracing::warn;

use crate::state::AppState;

/// Create items router
pub fn router(state: &AppState) -> Router {
    let repository = MongoItemRepository::new(&state.db);
    let service = ItemService::new(repository);

    let api_key = state.config.api_key.api_key.clone();
    if api_key.is_none() {
        warn!("API_KEY not set: item writes are open");
    }

    handlers::router(service, api_key)
}
