//! API error type and its HTTP mapping.

use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use flashdeck_core::db::DatabaseError;
use flashdeck_core::models::ErrorBody;
use flashdeck_core::ValidationError;
use thiserror::Error;
use tracing::error;

/// Message returned for every unexpected failure.
pub const INTERNAL_ERROR_MESSAGE: &str = "Internal server error";

/// Errors a handler can produce. The message of every variant except
/// `Internal` is sent to the caller.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("{0}")]
    BadRequest(String),

    #[error("{0}")]
    NotFound(String),

    #[error("{0}")]
    PayloadTooLarge(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl ApiError {
    /// Map a storage error for an operation targeting `entity`
    /// (`"Deck"` or `"Card"`).
    pub fn from_db(err: DatabaseError, entity: &str) -> Self {
        match err {
            DatabaseError::NotFound(_) => Self::NotFound(format!("{entity} not found")),
            DatabaseError::Conflict(_) => Self::BadRequest("Deck name already exists".into()),
            DatabaseError::InvalidReference(_) => Self::BadRequest("Deck does not exist".into()),
            other => Self::Internal(other.to_string()),
        }
    }

    pub const fn status(&self) -> StatusCode {
        match self {
            Self::BadRequest(_) => StatusCode::BAD_REQUEST,
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::PayloadTooLarge(_) => StatusCode::PAYLOAD_TOO_LARGE,
            Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<ValidationError> for ApiError {
    fn from(e: ValidationError) -> Self {
        Self::BadRequest(e.0)
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        if rejection.status() == StatusCode::PAYLOAD_TOO_LARGE {
            Self::PayloadTooLarge(rejection.body_text())
        } else {
            Self::BadRequest(rejection.body_text())
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let message = match self {
            Self::Internal(detail) => {
                error!(error = %detail, "Request failed");
                INTERNAL_ERROR_MESSAGE.to_string()
            }
            Self::BadRequest(m) | Self::NotFound(m) | Self::PayloadTooLarge(m) => m,
        };
        (status, Json(ErrorBody { error: message })).into_response()
    }
}
