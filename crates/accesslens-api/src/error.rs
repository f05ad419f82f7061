//! API error types.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

use accesslens_core::CoreError;
use accesslens_store_client::StoreClientError;

/// API error response body.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    /// Error code for client handling.
    pub error: String,
    /// Human-readable error message.
    pub message: String,
}

/// accesslens API error type.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Domain error from the core crate.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// Request body failed validation.
    #[error("validation error: {0}")]
    Validation(String),

    /// The access-inventory store failed. Surfaced as-is, never
    /// retried here.
    #[error(transparent)]
    Store(#[from] StoreClientError),
}

impl ApiError {
    /// Shorthand for an unknown-identity lookup: an expected
    /// outcome, mapped to 404 rather than treated as a fault.
    #[must_use]
    pub fn user_not_found(email: impl Into<String>) -> Self {
        ApiError::Core(CoreError::NotFound {
            resource: "user".to_string(),
            id: Some(email.into()),
        })
    }

    /// Shorthand for an unusable request parameter that survives
    /// planner normalization (e.g. an unknown provider path segment).
    #[must_use]
    pub fn invalid_query(message: impl Into<String>) -> Self {
        ApiError::Core(CoreError::InvalidQuery {
            message: message.into(),
        })
    }

    fn status(&self) -> StatusCode {
        match self {
            ApiError::Core(CoreError::NotFound { .. }) => StatusCode::NOT_FOUND,
            ApiError::Core(_) | ApiError::Validation(_) => StatusCode::BAD_REQUEST,
            ApiError::Store(_) => StatusCode::BAD_GATEWAY,
        }
    }

    fn code(&self) -> &'static str {
        match self {
            ApiError::Core(CoreError::NotFound { .. }) => "not_found",
            ApiError::Core(CoreError::InvalidQuery { .. }) => "invalid_query",
            ApiError::Core(CoreError::Validation { .. }) | ApiError::Validation(_) => {
                "validation_error"
            }
            ApiError::Store(_) => "upstream_unavailable",
        }
    }
}

impl From<validator::ValidationErrors> for ApiError {
    fn from(errors: validator::ValidationErrors) -> Self {
        ApiError::Validation(errors.to_string())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            tracing::error!(error = %self, "request failed");
        }
        let body = ErrorResponse {
            error: self.code().to_string(),
            message: self.to_string(),
        };
        (status, Json(body)).into_response()
    }
}
