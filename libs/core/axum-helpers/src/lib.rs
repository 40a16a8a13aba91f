//! # Axum Helpers
//!
//! Shared HTTP plumbing for the shop services.
//!
//! ## Modules
//!
//! - **[`server`]**: Router assembly with API docs, graceful shutdown
//! - **[`http`]**: HTTP middleware (API key gate, security headers)
//! - **[`errors`]**: The `AppError` boundary and its `{ "error": ... }` bodies
//! - **[`extractors`]**: Custom extractors (ObjectId path, JSON body)
//!
//! ## Quick Start
//!
//! ```ignore
//! use axum::Router;
//! use axum_helpers::server::{create_production_app, create_router};
//! use core_config::server::ServerConfig;
//! use utoipa::OpenApi;
//!
//! #[derive(OpenApi)]
//! #[openapi(paths())]
//! struct ApiDoc;
//!
//! let router = create_router::<ApiDoc>(Router::new(), Router::new());
//! create_production_app(router, &ServerConfig::default(), Duration::from_secs(30), async {}).await?;
//! ```

pub mod errors;
pub mod extractors;
pub mod http;
pub mod server;

// Re-export server types
pub use server::{ShutdownCoordinator, create_production_app, create_router};

// Re-export HTTP middleware
pub use http::{API_KEY_HEADER, ApiKey, ApiKeyConfig, require_api_key, security_headers};

// Re-export error types
pub use errors::{AppError, ErrorCode, ErrorResponse};

// Re-export extractors
pub use extractors::{JsonBody, ObjectIdPath};
