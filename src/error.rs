//! Error types and error handling for the application
//!
//! Not-found and bad-body errors only appear in strict mode; the others can
//! happen in any mode. All errors implement `IntoResponse` to provide consistent
//! JSON error formatting.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

/// Application-level error types
#[derive(Error, Debug)]
pub enum AppError {
    /// Movie with the given ID was not found
    #[error("Movie not found: {0}")]
    MovieNotFound(String),

    /// Request body could not be decoded as a movie
    #[error("Invalid movie: {0}")]
    InvalidMovie(String),

    /// No unused id could be drawn for a new movie
    #[error("No free movie id after {0} attempts")]
    IdSpaceExhausted(usize),

    /// Internal server error (catch-all for unexpected errors)
    #[error("Internal server error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl AppError {
    /// HTTP status this error maps to
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::MovieNotFound(_) => StatusCode::NOT_FOUND,
            AppError::InvalidMovie(_) => StatusCode::BAD_REQUEST,
            AppError::IdSpaceExhausted(_) => StatusCode::SERVICE_UNAVAILABLE,
            AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            tracing::error!(error = %self, "Request failed");
        }

        let body = Json(json!({
            "error": self.to_string(),
            "status": status.as_u16(),
        }));

        (status, body).into_response()
    }
}
