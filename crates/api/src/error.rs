//! API error types with HTTP response mapping.

use application::HandlerError;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

/// API-level error type that maps to HTTP responses.
#[derive(Debug)]
pub enum ApiError {
    /// Resource not found.
    NotFound(String),
    /// Bad request from the client.
    BadRequest(String),
    /// The request-handling core failed.
    Handler(HandlerError),
    /// Internal server error.
    Internal(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            ApiError::NotFound(msg) => (StatusCode::NOT_FOUND, msg),
            ApiError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            ApiError::Handler(err) => handler_error_to_response(err),
            ApiError::Internal(msg) => {
                tracing::error!(error = %msg, "internal server error");
                (StatusCode::INTERNAL_SERVER_ERROR, msg)
            }
        };

        let body = serde_json::json!({ "error": message });
        (status, axum::Json(body)).into_response()
    }
}

fn handler_error_to_response(err: HandlerError) -> (StatusCode, String) {
    let status = match &err {
        // Transient: the client may retry.
        HandlerError::StoreUnavailable(_) => StatusCode::SERVICE_UNAVAILABLE,
        HandlerError::StoreQueryFailed(_)
        | HandlerError::MalformedDocument(_)
        | HandlerError::Dispatch(_) => StatusCode::INTERNAL_SERVER_ERROR,
    };
    tracing::error!(error = %err, "request handling failed");
    (status, err.to_string())
}

impl From<HandlerError> for ApiError {
    fn from(err: HandlerError) -> Self {
        ApiError::Handler(err)
    }
}
