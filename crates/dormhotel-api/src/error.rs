//! Maps domain `AppError` to HTTP responses.

use std::any::Any;

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::{Deserialize, Serialize};
use tracing::error;

use dormhotel_core::error::{AppError, ErrorKind};

const INTERNAL_MESSAGE: &str = "Internal server error";

/// Standard API error response body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorBody {
    /// Human-readable message.
    pub error: String,
}

impl ErrorBody {
    /// Build the JSON body for `message`.
    pub fn new(message: impl Into<String>) -> Json<Self> {
        Json(Self {
            error: message.into(),
        })
    }
}

/// Handler-facing error wrapper that renders as JSON.
#[derive(Debug)]
pub struct ApiError(pub AppError);

/// Result alias for handlers.
pub type ApiResult<T> = Result<T, ApiError>;

impl From<AppError> for ApiError {
    fn from(err: AppError) -> Self {
        Self(err)
    }
}

fn status_for(kind: ErrorKind) -> StatusCode {
    match kind {
        ErrorKind::Validation | ErrorKind::DuplicateEmail => StatusCode::BAD_REQUEST,
        ErrorKind::PayloadTooLarge => StatusCode::PAYLOAD_TOO_LARGE,
        ErrorKind::Unauthenticated => StatusCode::UNAUTHORIZED,
        ErrorKind::Forbidden => StatusCode::FORBIDDEN,
        ErrorKind::NotFound => StatusCode::NOT_FOUND,
        ErrorKind::StoreUnavailable | ErrorKind::Configuration | ErrorKind::Internal => {
            StatusCode::INTERNAL_SERVER_ERROR
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let err = self.0;
        let status = status_for(err.kind);

        if err.is_server_fault() {
            error!(
                kind = %err.kind,
                error = %err.message,
                source = ?err.source,
                "Request failed with a server error"
            );
            return (status, ErrorBody::new(INTERNAL_MESSAGE)).into_response();
        }

        (status, ErrorBody::new(err.message)).into_response()
    }
}

/// Response for a handler that panicked.
pub fn handle_panic(panic: Box<dyn Any + Send + 'static>) -> Response {
    let detail = panic
        .downcast_ref::<String>()
        .map(String::as_str)
        .or_else(|| panic.downcast_ref::<&str>().copied())
        .unwrap_or("unknown panic payload");
    error!(panic = %detail, "Handler panicked");

    (StatusCode::INTERNAL_SERVER_ERROR, ErrorBody::new(INTERNAL_MESSAGE)).into_response()
}

/// Fallback for unknown `/api/*` paths.
pub async fn api_not_found() -> Response {
    (StatusCode::NOT_FOUND, ErrorBody::new("API endpoint not found")).into_response()
}
