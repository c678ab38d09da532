//! # Report Errors
//!
//! Error taxonomy for the report pipeline.
//!
//! Three runtime categories, all surfaced to the caller with a distinguishing
//! status code and a human-readable message:
//! - `Validation`: malformed filter value, rejected as a client error
//! - `Storage`: row source unreachable or query execution failure
//! - `Render`: adapter-specific encoding failure (e.g. zero selected columns)
//!
//! `Schema` covers startup schema-file failures and is never produced while
//! serving requests. None of these are retried; they stem from caller input or
//! environment, not transient conditions.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use thiserror::Error;

/// Report pipeline errors
#[derive(Debug, Clone, Error)]
pub enum ReportError {
    /// Malformed or unsupported filter value
    #[error("Invalid filter value: {0}")]
    Validation(String),

    /// Row source unreachable or execution failure
    #[error("Storage error: {0}")]
    Storage(String),

    /// Export encoding failure
    #[error("Render error: {0}")]
    Render(String),

    /// Schema configuration failure (startup only)
    #[error("Schema error: {0}")]
    Schema(String),
}

impl ReportError {
    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            ReportError::Validation(_) => StatusCode::BAD_REQUEST,
            ReportError::Render(_) => StatusCode::UNPROCESSABLE_ENTITY,
            ReportError::Storage(_) => StatusCode::INTERNAL_SERVER_ERROR,
            ReportError::Schema(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<rusqlite::Error> for ReportError {
    fn from(err: rusqlite::Error) -> Self {
        ReportError::Storage(err.to_string())
    }
}

/// Error response body
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub code: u16,
}

impl From<ReportError> for ErrorResponse {
    fn from(err: ReportError) -> Self {
        Self {
            code: err.status_code().as_u16(),
            error: err.to_string(),
        }
    }
}

impl IntoResponse for ReportError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let body = Json(ErrorResponse::from(self));
        (status, body).into_response()
    }
}
