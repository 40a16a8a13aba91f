//! Server infrastructure module.
//!
//! This module provides:
//! - Router assembly with OpenAPI documentation and the 404 fallback
//! - Graceful shutdown coordination with a bounded cleanup hook
//!
//! # Example
//!
//! ```ignore
//! use axum_helpers::server::{create_production_app, create_router};
//!
//! let app = create_router::<ApiDoc>(api_routes, root_routes);
//! create_production_app(app, &server_config, Duration::from_secs(30), async {}).await?;
//! ```

pub mod app;
pub mod shutdown;

// Re-export commonly used types and functions
pub use app::{create_production_app, create_router};
pub use shutdown::ShutdownCoordinator;
