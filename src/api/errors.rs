//! # API Errors
//!
//! Client-facing error types for the todo API.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use thiserror::Error;

/// Result type for API operations
pub type ApiResult<T> = Result<T, ApiError>;

/// Errors surfaced to API callers
#[derive(Debug, Clone, Error)]
pub enum ApiError {
    /// The `limit` query parameter is not a non-negative integer
    #[error("specified limit '{0}' can't be parsed to an integer")]
    InvalidLimit(String),

    /// No todo with the requested id exists
    #[error("no todo with id {0} was found")]
    NotFound(String),
}

impl ApiError {
    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::InvalidLimit(_) => StatusCode::BAD_REQUEST,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
        }
    }
}

/// Error response body
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub code: u16,
}

impl From<ApiError> for ErrorResponse {
    fn from(err: ApiError) -> Self {
        Self {
            code: err.status_code().as_u16(),
            error: err.to_string(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let body = Json(ErrorResponse::from(self));
        (status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_codes() {
        assert_eq!(
            ApiError::InvalidLimit("abc".to_string()).status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            ApiError::NotFound("xyz".to_string()).status_code(),
            StatusCode::NOT_FOUND
        );
    }

    #[test]
    fn test_invalid_limit_names_the_value() {
        let err = ApiError::InvalidLimit("abc".to_string());
        assert!(err.to_string().contains("'abc'"));
    }

    #[test]
    fn test_not_found_names_the_id() {
        let err = ApiError::NotFound("58895985deadbeef".to_string());
        assert!(err.to_string().contains("58895985deadbeef"));
    }

    #[test]
    fn test_error_response_body() {
        let body = ErrorResponse::from(ApiError::NotFound("x".to_string()));
        assert_eq!(body.code, 404);
        assert!(body.error.contains("no todo with id x"));
    }
}
