//! HTTP middleware module.
//!
//! This module provides HTTP-level middleware for:
//! - Shared-secret API key checks on mutating routes
//! - Security headers
//!
//! # Example
//!
//! ```ignore
//! use axum_helpers::http::{ApiKey, require_api_key, security_headers};
//!
//! let protected = Router::new()
//!     .route("/", post(create))
//!     .route_layer(axum::middleware::from_fn_with_state(ApiKey::new("secret"), require_api_key));
//! ```

pub mod api_key;
pub mod security;

// Re-export commonly used functions
pub use api_key::{API_KEY_HEADER, ApiKey, ApiKeyConfig, require_api_key};
pub use security::security_headers;
