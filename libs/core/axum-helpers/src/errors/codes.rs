//! Error codes attached to every logged failure.
//!
//! Clients only ever see the short `error` message; the integer code goes to
//! the logs so failures can be grouped without parsing text.
//!
//! # Example
//!
//! ```rust
//! use axum_helpers::errors::ErrorCode;
//!
//! let code = ErrorCode::InvalidId;
//! assert_eq!(code.as_str(), "INVALID_ID");
//! assert_eq!(code.code(), 1002);
//! assert_eq!(code.default_message(), "Invalid ID");
//! ```

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    // Client errors (1000s)
    /// Required fields absent from a create or validated update
    MissingFields,

    /// Path identifier is not a 24-hex ObjectId
    InvalidId,

    /// JSON extraction from request body failed
    JsonExtraction,

    /// Requested resource was not found
    NotFound,

    /// No route matched the request
    EndpointNotFound,

    /// Generic malformed request
    BadRequest,

    /// API key header missing
    Unauthorized,

    /// API key header present but wrong
    Forbidden,

    // Server errors
    /// An unexpected internal server error occurred
    InternalError,

    /// Database driver or query error
    DatabaseError,
}

impl ErrorCode {
    /// Returns the string representation of the error code.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::MissingFields => "MISSING_FIELDS",
            Self::InvalidId => "INVALID_ID",
            Self::JsonExtraction => "JSON_EXTRACTION",
            Self::NotFound => "NOT_FOUND",
            Self::EndpointNotFound => "ENDPOINT_NOT_FOUND",
            Self::BadRequest => "BAD_REQUEST",
            Self::Unauthorized => "UNAUTHORIZED",
            Self::Forbidden => "FORBIDDEN",
            Self::InternalError => "INTERNAL_ERROR",
            Self::DatabaseError => "DATABASE_ERROR",
        }
    }

    /// Returns the integer code used in log records.
    pub const fn code(&self) -> i32 {
        match self {
            Self::MissingFields => 1001,
            Self::InvalidId => 1002,
            Self::JsonExtraction => 1003,
            Self::NotFound => 1004,
            Self::EndpointNotFound => 1005,
            Self::BadRequest => 1006,
            Self::Unauthorized => 1007,
            Self::Forbidden => 1008,
            Self::InternalError => 1500,
            Self::DatabaseError => 2001,
        }
    }

    /// Message placed in the response body.
    pub const fn default_message(&self) -> &'static str {
        match self {
            Self::MissingFields => "Missing fields",
            Self::InvalidId => "Invalid ID",
            Self::JsonExtraction => "Invalid JSON body",
            Self::NotFound => "Not found",
            Self::EndpointNotFound => "Endpoint not found",
            Self::BadRequest => "Bad request",
            Self::Unauthorized => "Unauthorized",
            Self::Forbidden => "Forbidden",
            // internals are never leaked
            Self::InternalError | Self::DatabaseError => "Server error",
        }
    }

    pub const fn is_server_error(&self) -> bool {
        matches!(self, Self::InternalError | Self::DatabaseError)
    }
}

impl std::fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
