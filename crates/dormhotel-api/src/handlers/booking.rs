//! Booking handlers.

use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;

use dormhotel_core::error::AppError;
use dormhotel_entity::booking::Booking;

use crate::dto::request::CreateBookingRequest;
use crate::dto::response::BookingCreatedResponse;
use crate::error::ApiResult;
use crate::extractors::{Authenticated, JsonBody, UserOnly};
use crate::state::AppState;

/// GET /api/bookings
pub async fn list_bookings(
    State(state): State<AppState>,
    auth: Authenticated,
) -> ApiResult<Json<Vec<Booking>>> {
    let bookings = state.booking_service.list(&auth).await?;
    Ok(Json(bookings))
}

/// POST /api/bookings
pub async fn create_booking(
    State(state): State<AppState>,
    auth: Authenticated<UserOnly>,
    JsonBody(req): JsonBody<CreateBookingRequest>,
) -> ApiResult<(StatusCode, Json<BookingCreatedResponse>)> {
    let booking = state
        .booking_service
        .create(&auth, &req.into())
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(BookingCreatedResponse {
            id: booking.id,
            message: "Booking confirmed".to_string(),
        }),
    ))
}

/// DELETE /api/bookings/{id}
pub async fn delete_booking(
    State(state): State<AppState>,
    auth: Authenticated,
    Path(id): Path<String>,
) -> ApiResult<StatusCode> {
    // An id that cannot name a row is simply not found
    let id: i64 = id
        .parse()
        .map_err(|_| AppError::not_found("Booking not found"))?;

    state.booking_service.delete(&auth, id).await?;
    Ok(StatusCode::NO_CONTENT)
}
