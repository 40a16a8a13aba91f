//! Application state management.
//!
//! This module defines the shared application state passed to all request handlers.

use std::time::Instant;

use mongodb::{Client, Database};

/// Shared application state.
///
/// Cloned into every router (the client and database handles are cheap
/// clones over one connection pool).
#[derive(Clone)]
pub struct AppState {
    /// Application configuration loaded from environment variables
    pub config: crate::config::Config,
    /// MongoDB client (cloneable, shares underlying connection pool)
    pub mongo_client: Client,
    /// MongoDB database instance
    pub db: Database,
    /// Process start, reported as uptime by `/health`
    pub started_at: Instant,
}

impl AppState {
    pub fn new(config: crate::config::Config, mongo_client: Client) -> Self {
        let db = mongo_client.database(config.mongodb.database());

        Self {
            config,
            mongo_client,
            db,
            started_at: Instant::now(),
        }
    }
}
