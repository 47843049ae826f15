/// Error handling for the tasks gateway
///
/// This module provides a unified error type that maps to HTTP responses.
/// Handlers return `Result<T, ApiError>` which automatically converts to the
/// gateway's two terminal error responses, both HTTP 500 with a JSON body of
/// the shape `{"error": "<message>"}`:
///
/// - `{"error": "Database connection failed"}` when the fallback connection
///   cannot be opened (fixed message)
/// - `{"error": "Failed to fetch tasks: <message>"}` for every other failure
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// API result type alias
pub type ApiResult<T> = Result<T, ApiError>;

/// Unified API error type
///
/// An unreachable upstream is deliberately NOT represented here: it is an
/// expected branch that redirects to the database fallback, not an error
/// response.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The fallback database connection could not be opened (500)
    #[error("Database connection failed")]
    DatabaseUnavailable,

    /// Any other failure while producing the task list (500)
    #[error("Failed to fetch tasks: {0}")]
    FetchFailed(String),
}

/// Error response format
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Human-readable error message
    pub error: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        tracing::error!(error = %self, "Request failed");

        let body = Json(ErrorResponse {
            error: self.to_string(),
        });

        (StatusCode::INTERNAL_SERVER_ERROR, body).into_response()
    }
}

/// Query failures surface through the generic fetch error; connection
/// failures are mapped explicitly in the `db` module and never reach this.
impl From<sqlx::Error> for ApiError {
    fn from(err: sqlx::Error) -> Self {
        ApiError::FetchFailed(format!("Database error: {}", err))
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(err: serde_json::Error) -> Self {
        ApiError::FetchFailed(format!("Serialization error: {}", err))
    }
}
