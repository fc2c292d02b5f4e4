//! `Authenticated` extractor: reads the session token from the cookie or the
//! `Authorization` header and resolves it to a user with an allowed role.

use std::marker::PhantomData;

use axum::extract::FromRequestParts;
use axum::http::header::AUTHORIZATION;
use axum::http::request::Parts;
use axum_extra::extract::CookieJar;

use dormhotel_auth::guard::extract_token;
use dormhotel_entity::user::{User, UserRole};

use crate::error::ApiError;
use crate::state::AppState;

/// Type-level set of roles a route accepts. An empty set accepts any role.
pub trait RoleRequirement: Send + Sync + 'static {
    /// Accepted roles.
    const ROLES: &'static [UserRole];
}

/// Any authenticated user.
#[derive(Debug)]
pub struct AnyRole;

impl RoleRequirement for AnyRole {
    const ROLES: &'static [UserRole] = &[];
}

/// Regular guests only.
#[derive(Debug)]
pub struct UserOnly;

impl RoleRequirement for UserOnly {
    const ROLES: &'static [UserRole] = &[UserRole::User];
}

/// Administrators only.
#[derive(Debug)]
pub struct AdminOnly;

impl RoleRequirement for AdminOnly {
    const ROLES: &'static [UserRole] = &[UserRole::Admin];
}

/// The user behind the request, loaded fresh from the store.
#[derive(Debug)]
pub struct Authenticated<R: RoleRequirement = AnyRole> {
    /// The authenticated user.
    pub user: User,
    _requirement: PhantomData<R>,
}

impl<R: RoleRequirement> std::ops::Deref for Authenticated<R> {
    type Target = User;
    fn deref(&self) -> &Self::Target {
        &self.user
    }
}

impl<R: RoleRequirement> FromRequestParts<AppState> for Authenticated<R> {
    type Rejection = ApiError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let jar = CookieJar::from_headers(&parts.headers);
        let cookie = jar
            .get(&state.config.auth.cookie_name)
            .map(|c| c.value().to_string());
        let authorization = parts
            .headers
            .get(AUTHORIZATION)
            .and_then(|v| v.to_str().ok());

        let token = extract_token(cookie.as_deref(), authorization);
        let user = state.guard.authorize(token, R::ROLES).await?;

        Ok(Self {
            user,
            _requirement: PhantomData,
        })
    }
}
