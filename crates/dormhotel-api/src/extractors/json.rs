//! JSON body extractor whose rejections use the API error format.

use axum::Json;
use axum::extract::{FromRequest, Request};
use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use serde::de::DeserializeOwned;
use tracing::debug;

use dormhotel_core::error::AppError;

use crate::error::ApiError;

/// Like `axum::Json`, but a malformed body is a 400 validation error and an
/// oversized one is a 413.
#[derive(Debug, Clone)]
pub struct JsonBody<T>(pub T);

impl<T, S> FromRequest<S> for JsonBody<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        match Json::<T>::from_request(req, state).await {
            Ok(Json(value)) => Ok(Self(value)),
            Err(rejection) => {
                debug!(reason = %rejection.body_text(), "Rejected request body");
                if rejection.status() == StatusCode::PAYLOAD_TOO_LARGE {
                    return Err(AppError::payload_too_large("Request body too large").into());
                }
                Err(AppError::validation(rejection_message(&rejection)).into())
            }
        }
    }
}

fn rejection_message(rejection: &JsonRejection) -> &'static str {
    match rejection {
        JsonRejection::MissingJsonContentType(_) => "Expected a JSON request body",
        JsonRejection::BytesRejection(_) => "Request body could not be read",
        _ => "Malformed JSON request body",
    }
}
