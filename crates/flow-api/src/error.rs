//! API error types and JSON error response formatting.
//!
//! ApiError keeps the wire shape clients already parse: an `error` string
//! plus optional `details`, with the status code carried by the response.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;

/// JSON error response body.
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    /// Human-readable error message.
    pub error: String,
    /// Optional underlying cause.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

/// API error type that maps to HTTP status codes and JSON responses.
#[derive(Debug)]
pub enum ApiError {
    /// 400 Bad Request - missing or invalid request fields.
    BadRequest(String),
    /// 500 Internal Server Error - required credential or setup missing.
    Configuration(String),
    /// 500 Internal Server Error - reply generation failed.
    Internal { message: String, details: String },
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, body) = match self {
            ApiError::BadRequest(msg) => (
                StatusCode::BAD_REQUEST,
                ErrorBody {
                    error: msg,
                    details: None,
                },
            ),
            ApiError::Configuration(msg) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                ErrorBody {
                    error: msg,
                    details: None,
                },
            ),
            ApiError::Internal { message, details } => (
                StatusCode::INTERNAL_SERVER_ERROR,
                ErrorBody {
                    error: message,
                    details: Some(details),
                },
            ),
        };

        (status, Json(body)).into_response()
    }
}
