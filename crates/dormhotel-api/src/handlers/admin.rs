//! Admin reporting handlers.

use axum::Json;
use axum::extract::State;

use dormhotel_service::admin::BookingStats;

use crate::dto::response::UserSummary;
use crate::error::ApiResult;
use crate::extractors::{AdminOnly, Authenticated};
use crate::state::AppState;

/// GET /api/admin/users
pub async fn list_users(
    State(state): State<AppState>,
    _admin: Authenticated<AdminOnly>,
) -> ApiResult<Json<Vec<UserSummary>>> {
    let users = state.admin_service.list_users().await?;
    Ok(Json(users.into_iter().map(UserSummary::from).collect()))
}

/// GET /api/admin/stats
pub async fn stats(
    State(state): State<AppState>,
    _admin: Authenticated<AdminOnly>,
) -> ApiResult<Json<BookingStats>> {
    Ok(Json(state.admin_service.stats().await?))
}
