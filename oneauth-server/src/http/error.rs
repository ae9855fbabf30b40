//! API error types with IntoResponse
//!
//! Errors are converted to `{"error": <message>, "status": <code>}`.
//! Storage failures surface the raw database message to the caller.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;

use crate::db::repos::DbError;

/// API error type with automatic HTTP status mapping
#[derive(Debug)]
pub enum ApiError {
    /// Request body could not be parsed (400)
    BadRequest { message: String },

    /// No row for the requested id (404)
    NotFound { resource: &'static str, id: String },

    /// Any database-layer failure (500, logged)
    Storage(DbError),
}

impl ApiError {
    pub fn invalid_json() -> Self {
        Self::BadRequest {
            message: "Invalid JSON".to_owned(),
        }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            Self::BadRequest { .. } => StatusCode::BAD_REQUEST,
            Self::NotFound { .. } => StatusCode::NOT_FOUND,
            Self::Storage(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::BadRequest { message } => f.write_str(message),
            Self::NotFound { resource, .. } => write!(f, "{} not found", resource),
            Self::Storage(e) => write!(f, "{}", e),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        match &self {
            Self::Storage(e) => tracing::error!("Database error: {}", e),
            Self::NotFound { resource, id } => tracing::debug!(resource, id = %id, "not found"),
            Self::BadRequest { .. } => {}
        }

        let body = Json(json!({
            "error": self.to_string(),
            "status": status.as_u16()
        }));

        (status, body).into_response()
    }
}

impl From<DbError> for ApiError {
    fn from(e: DbError) -> Self {
        match e {
            DbError::NotFound { resource, id } => Self::NotFound { resource, id },
            _ => Self::Storage(e),
        }
    }
}
