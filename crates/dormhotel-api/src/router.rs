//! Route definitions for the DormHotel HTTP API.
//!
//! Business routes are mounted under `/api`; `/health` sits at the root.

use axum::{
    Router,
    extract::DefaultBodyLimit,
    middleware as axum_middleware,
    routing::{delete, get, post},
};
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::trace::TraceLayer;

use crate::error;
use crate::handlers;
use crate::middleware;
use crate::state::AppState;

/// Build the complete Axum router with all routes and middleware.
pub fn build_router(state: AppState) -> Router {
    let body_limit = state.config.server.body_limit_bytes;

    let api_routes = Router::new()
        .merge(auth_routes())
        .merge(booking_routes())
        .merge(admin_routes())
        .fallback(error::api_not_found);

    Router::new()
        .route("/health", get(handlers::health::health))
        .nest("/api", api_routes)
        .layer(DefaultBodyLimit::max(body_limit))
        .layer(axum_middleware::from_fn(middleware::logging::request_logging))
        .layer(TraceLayer::new_for_http())
        .layer(CatchPanicLayer::custom(error::handle_panic))
        .with_state(state)
}

/// Register, login, logout
fn auth_routes() -> Router<AppState> {
    Router::new()
        .route("/register", post(handlers::auth::register))
        .route("/login", post(handlers::auth::login))
        .route("/logout", post(handlers::auth::logout))
}

/// Booking CRUD
fn booking_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/bookings",
            get(handlers::booking::list_bookings).post(handlers::booking::create_booking),
        )
        .route("/bookings/{id}", delete(handlers::booking::delete_booking))
}

/// Admin reporting
fn admin_routes() -> Router<AppState> {
    Router::new()
        .route("/admin/users", get(handlers::admin::list_users))
        .route("/admin/stats", get(handlers::admin::stats))
}
