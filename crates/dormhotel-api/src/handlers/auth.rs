//! Auth handlers: register, login, logout.

use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;
use axum_extra::extract::CookieJar;
use axum_extra::extract::cookie::{Cookie, SameSite};

use dormhotel_core::config::AuthConfig;

use crate::dto::request::CredentialsRequest;
use crate::dto::response::{LoginResponse, MessageResponse};
use crate::error::ApiResult;
use crate::extractors::JsonBody;
use crate::state::AppState;

/// Session cookie carrying `token`. Domain stays unset so the browser
/// scopes it to the request host.
fn session_cookie(config: &AuthConfig, token: String) -> Cookie<'static> {
    Cookie::build((config.cookie_name.clone(), token))
        .http_only(true)
        .secure(config.cookie_secure)
        .same_site(SameSite::Lax)
        .path("/")
        .max_age(time::Duration::hours(config.token_ttl_hours as i64))
        .build()
}

/// POST /api/register
pub async fn register(
    State(state): State<AppState>,
    JsonBody(req): JsonBody<CredentialsRequest>,
) -> ApiResult<(StatusCode, Json<MessageResponse>)> {
    state
        .auth_service
        .register(req.email.as_deref(), req.password.as_deref())
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(MessageResponse::new("Registration successful")),
    ))
}

/// POST /api/login
pub async fn login(
    State(state): State<AppState>,
    jar: CookieJar,
    JsonBody(req): JsonBody<CredentialsRequest>,
) -> ApiResult<(CookieJar, Json<LoginResponse>)> {
    let outcome = state
        .auth_service
        .login(req.email.as_deref(), req.password.as_deref())
        .await?;

    let body = LoginResponse::from(&outcome.user);
    let jar = jar.add(session_cookie(&state.config.auth, outcome.token));
    Ok((jar, Json(body)))
}

/// POST /api/logout
pub async fn logout(
    State(state): State<AppState>,
    jar: CookieJar,
) -> (CookieJar, Json<MessageResponse>) {
    let mut cookie = session_cookie(&state.config.auth, String::new());
    cookie.make_removal();

    (
        jar.add(cookie),
        Json(MessageResponse::new("Logged out successfully")),
    )
}
