//! Request-level errors and their HTTP mapping.
//!
//! Every variant is terminal for the request that produced it and is
//! rendered as `{"error": "<message>"}` with a 400 or 404 status.

use axum::{
    extract::{rejection::PathRejection, Path},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ApiError {
    /// The request body could not be decoded into a `TodoInput`.
    #[error("{0}")]
    Validation(String),

    /// The `{id}` path segment is not an integer.
    #[error("Invalid ID")]
    InvalidIdentifier,

    #[error("Todo not found")]
    NotFound,
}

impl ApiError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::Validation(_) | ApiError::InvalidIdentifier => StatusCode::BAD_REQUEST,
            ApiError::NotFound => StatusCode::NOT_FOUND,
        }
    }
}

#[derive(Serialize)]
struct ErrorBody {
    error: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = ErrorBody {
            error: self.to_string(),
        };
        (self.status_code(), Json(body)).into_response()
    }
}

/// Parse a path id the way the route expects it.
pub fn parse_id(raw: &str) -> Result<i64, ApiError> {
    raw.parse().map_err(|_| ApiError::InvalidIdentifier)
}

/// Resolve the `{id}` segment. A segment axum cannot extract (not UTF-8
/// once percent-decoded) is reported the same way as a non-integer one.
pub fn path_id(path: Result<Path<String>, PathRejection>) -> Result<i64, ApiError> {
    let Path(raw) = path.map_err(|_| ApiError::InvalidIdentifier)?;
    parse_id(&raw)
}
