//! API routes module
//!
//! Resource routes live under `/api`; the meta endpoints sit at the root.

pub mod items;
pub mod meta;
pub mod products;

use axum::Router;

use crate::state::AppState;

/// Create all API routes
/// Note: These are nested under /api by axum_helpers::create_router
pub fn routes(state: &AppState) -> Router {
    Router::new()
        .nest("/products", products::router(state))
        .nest("/items", items::router(state))
}
