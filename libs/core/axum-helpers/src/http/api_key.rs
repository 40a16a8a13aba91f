//! Shared-secret gate for mutating routes.
//!
//! A single static key is compared against the `x-api-key` header:
//! absent header is `401`, a wrong key is `403`, a match passes the request
//! through untouched. This is a coarse single-tenant check, not an identity
//! system.

use std::{fmt, sync::Arc};

use axum::{
    extract::{Request, State},
    middleware::Next,
    response::Response,
};
use core_config::{ConfigError, FromEnv};
use subtle::ConstantTimeEq;
use tracing::debug;

use crate::errors::AppError;

/// Header carrying the client's key.
pub const API_KEY_HEADER: &str = "x-api-key";

/// The expected API key. Cheap to clone into router state.
#[derive(Clone)]
pub struct ApiKey(Arc<str>);

impl ApiKey {
    pub fn new(key: impl Into<String>) -> Self {
        Self(Arc::from(key.into()))
    }

    /// Constant-time comparison against a presented key.
    pub fn matches(&self, presented: &str) -> bool {
        self.0.as_bytes().ct_eq(presented.as_bytes()).into()
    }
}

impl fmt::Debug for ApiKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("ApiKey(***)")
    }
}

/// Optional API key configuration.
///
/// When `API_KEY` is unset or empty the gate is disabled and mutating routes
/// are open.
#[derive(Clone, Debug, Default)]
pub struct ApiKeyConfig {
    pub api_key: Option<ApiKey>,
}

impl FromEnv for ApiKeyConfig {
    fn from_env() -> Result<Self, ConfigError> {
        let api_key = std::env::var("API_KEY")
            .ok()
            .filter(|key| !key.is_empty())
            .map(ApiKey::new);

        Ok(Self { api_key })
    }
}

/// Middleware enforcing the `x-api-key` header.
///
/// Use with `axum::middleware::from_fn_with_state(key, require_api_key)` as a
/// `route_layer` so unmatched routes still fall through to the 404 handler.
pub async fn require_api_key(
    State(expected): State<ApiKey>,
    request: Request,
    next: Next,
) -> Result<Response, AppError> {
    let presented = request
        .headers()
        .get(API_KEY_HEADER)
        .filter(|value| !value.is_empty())
        .ok_or_else(|| AppError::Unauthorized(format!("{API_KEY_HEADER} header missing")))?;

    // Non-UTF-8 header values can never equal the configured key.
    let authorized = presented
        .to_str()
        .map(|value| expected.matches(value))
        .unwrap_or(false);

    if !authorized {
        return Err(AppError::Forbidden(format!("{API_KEY_HEADER} mismatch")));
    }

    debug!("API key accepted");
    Ok(next.run(request).await)
}
