use axum::{http::StatusCode, response::Response};

use super::{ErrorCode, error_response};

/// Fallback for any request no route matched: 404 `{ "error": "Endpoint not found" }`.
pub async fn not_found() -> Response {
    tracing::debug!(error_code = ErrorCode::EndpointNotFound.code(), "No route matched");
    error_response(StatusCode::NOT_FOUND, ErrorCode::EndpointNotFound)
}
