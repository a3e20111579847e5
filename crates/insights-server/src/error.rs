//! Fault-to-status mapping for the HTTP boundary.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use insights_core::errors::ValidationError;
use insights_core::responses::ErrorResponse;
use insights_db::error::StorageError;
use thiserror::Error;

/// Generic body for storage faults; the cause goes to the log only.
pub const STORAGE_FAILURE_MESSAGE: &str = "storage failure";

#[derive(Debug, Error)]
pub enum ApiError {
    /// Client input did not validate. 400 with per-field issues.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// The store failed. 500 with a generic message.
    #[error(transparent)]
    Storage(#[from] StorageError),

    /// Request body could not be decoded at all. 400.
    #[error("{0}")]
    BadRequest(String),

    /// Lookup of an absent insight. 404.
    #[error("{0}")]
    NotFound(String),
}

impl ApiError {
    #[must_use]
    pub const fn status(&self) -> StatusCode {
        match self {
            Self::Validation(_) | Self::BadRequest(_) => StatusCode::BAD_REQUEST,
            Self::Storage(_) => StatusCode::INTERNAL_SERVER_ERROR,
            Self::NotFound(_) => StatusCode::NOT_FOUND,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let body = match self {
            Self::Validation(err) => {
                let message = err.to_string();
                ErrorResponse::new(message).with_issues(err.issues)
            }
            Self::Storage(err) => {
                tracing::error!(error = %err, cause = %err.source, "storage fault");
                ErrorResponse::new(STORAGE_FAILURE_MESSAGE)
            }
            Self::BadRequest(msg) | Self::NotFound(msg) => ErrorResponse::new(msg),
        };

        (status, Json(body)).into_response()
    }
}
