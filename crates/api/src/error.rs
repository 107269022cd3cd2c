//! API error handling
//!
//! Consistent JSON error responses across all endpoints.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use tracing::error;

/// Structured JSON error response
#[derive(Serialize)]
pub struct ErrorResponse {
    pub error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub retry_after_secs: Option<u64>,
}

/// API error type that converts to JSON responses
#[derive(Debug)]
pub enum ApiError {
    /// Malformed or out-of-range input; never retried
    Validation(String),
    /// The call lost against the campaign/ledger state machine
    Conflict { code: &'static str, message: String },
    /// Per-entity lock retries exhausted; worth an immediate retry
    Contended,
    /// Resource not found
    NotFound(String),
    /// Internal server error
    Internal(String),
}

impl From<common::Error> for ApiError {
    fn from(err: common::Error) -> Self {
        match err {
            common::Error::InvalidInput(msg) => ApiError::Validation(msg),
            common::Error::InvalidDelta(msg) => ApiError::Validation(msg),
            common::Error::CampaignClosed(msg) => ApiError::Conflict {
                code: "campaign_closed",
                message: msg,
            },
            common::Error::CapacityExceeded {
                requested,
                headroom,
            } => ApiError::Conflict {
                code: "capacity_exceeded",
                message: format!("campaign full: requested {requested} more, only {headroom} left"),
            },
            common::Error::Contended => ApiError::Contended,
            err @ common::Error::InsufficientHistory { .. } => ApiError::Conflict {
                code: "insufficient_history",
                message: err.to_string(),
            },
            common::Error::NotFound(msg) => ApiError::NotFound(msg),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, response) = match self {
            ApiError::Validation(msg) => (
                StatusCode::BAD_REQUEST,
                ErrorResponse {
                    error: msg,
                    code: Some("invalid_input".to_string()),
                    retry_after_secs: None,
                },
            ),
            ApiError::Conflict { code, message } => (
                StatusCode::CONFLICT,
                ErrorResponse {
                    error: message,
                    code: Some(code.to_string()),
                    retry_after_secs: None,
                },
            ),
            ApiError::Contended => (
                StatusCode::SERVICE_UNAVAILABLE,
                ErrorResponse {
                    error: "Operation contended, try again".to_string(),
                    code: Some("contended".to_string()),
                    retry_after_secs: Some(1),
                },
            ),
            ApiError::NotFound(msg) => (
                StatusCode::NOT_FOUND,
                ErrorResponse {
                    error: msg,
                    code: Some("not_found".to_string()),
                    retry_after_secs: None,
                },
            ),
            ApiError::Internal(msg) => {
                error!("Internal error: {}", msg);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    ErrorResponse {
                        error: "Internal server error".to_string(),
                        code: Some("internal_error".to_string()),
                        retry_after_secs: None,
                    },
                )
            }
        };

        (status, Json(response)).into_response()
    }
}

/// Result type for API handlers
pub type ApiResult<T> = Result<T, ApiError>;
