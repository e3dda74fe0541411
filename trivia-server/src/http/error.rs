//! API error types with IntoResponse
//!
//! Every failure renders as `{"success": false, "error": <code>, "message": ..}`
//! with a fixed message per status. Details are logged, never returned.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;

use crate::db::DbError;
use crate::models::ValidationError;

/// API error type with automatic HTTP status mapping
#[derive(Debug)]
pub enum ApiError {
    /// Resource not found (404)
    NotFound { resource: &'static str, id: String },

    /// Request understood but cannot be processed (422)
    Unprocessable { reason: String },

    /// Malformed query string (400)
    BadRequest { reason: String },

    /// Store failure outside a recoverable path (500, logged)
    Internal { message: String },
}

impl ApiError {
    pub fn not_found(resource: &'static str, id: impl ToString) -> Self {
        Self::NotFound {
            resource,
            id: id.to_string(),
        }
    }

    pub fn unprocessable(reason: impl ToString) -> Self {
        Self::Unprocessable {
            reason: reason.to_string(),
        }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            Self::NotFound { .. } => StatusCode::NOT_FOUND,
            Self::Unprocessable { .. } => StatusCode::UNPROCESSABLE_ENTITY,
            Self::BadRequest { .. } => StatusCode::BAD_REQUEST,
            Self::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn message(&self) -> &'static str {
        match self {
            Self::NotFound { .. } => "resource not found",
            Self::Unprocessable { .. } => "unprocessable",
            Self::BadRequest { .. } => "bad request",
            Self::Internal { .. } => "internal server error",
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match &self {
            Self::NotFound { resource, id } => {
                tracing::debug!(resource, id = %id, "resource not found");
            }
            Self::Unprocessable { reason } => {
                tracing::warn!(reason = %reason, "unprocessable request");
            }
            Self::BadRequest { reason } => {
                tracing::debug!(reason = %reason, "bad request");
            }
            Self::Internal { message } => {
                tracing::error!("Internal error: {}", message);
            }
        }

        let status = self.status();
        let body = json!({
            "success": false,
            "error": status.as_u16(),
            "message": self.message()
        });

        (status, Json(body)).into_response()
    }
}

impl From<ValidationError> for ApiError {
    fn from(e: ValidationError) -> Self {
        Self::unprocessable(e)
    }
}

impl From<DbError> for ApiError {
    fn from(e: DbError) -> Self {
        match e {
            DbError::NotFound { resource, id } => Self::NotFound { resource, id },
            DbError::Constraint(reason) => Self::Unprocessable { reason },
            DbError::Sqlx(e) => Self::Internal {
                message: e.to_string(),
            },
        }
    }
}
