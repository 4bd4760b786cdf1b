//! HTTP error mapping.
//!
//! Converts crate errors into status codes and `{"error": ...}` bodies.
//! Storage failures are logged in full and reported to the client with a
//! generic message.

use crate::errors::Error;
use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use thiserror::Error;
use tracing::error;

/// Result type for HTTP handlers
pub type ApiResult<T> = std::result::Result<T, ApiError>;

/// Errors a handler can answer with
#[derive(Debug, Error)]
pub enum ApiError {
    /// Malformed or incomplete client input
    #[error("{0}")]
    BadRequest(String),

    /// The targeted product does not exist
    #[error("Product not found")]
    NotFound,

    /// Any storage, transport or other server-side failure
    #[error("Internal server error")]
    Internal(#[source] Error),
}

impl ApiError {
    /// HTTP status code for this error
    #[must_use]
    pub const fn status_code(&self) -> StatusCode {
        match self {
            Self::BadRequest(_) => StatusCode::BAD_REQUEST,
            Self::NotFound => StatusCode::NOT_FOUND,
            Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<Error> for ApiError {
    fn from(err: Error) -> Self {
        match err {
            Error::Validation { message } => Self::BadRequest(message),
            Error::ProductNotFound { .. } => Self::NotFound,
            other => Self::Internal(other),
        }
    }
}

/// Error response body
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    /// Client-facing message
    pub error: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        if let Self::Internal(source) = &self {
            error!("Request failed: {}", source);
        }
        let status = self.status_code();
        let body = Json(ErrorResponse {
            error: self.to_string(),
        });
        (status, body).into_response()
    }
}
