//! Per-request access control.
//!
//! Every protected request is re-evaluated from its token; there is no
//! server-side session state.

use std::sync::Arc;

use tracing::debug;

use dormhotel_core::error::AppError;
use dormhotel_core::result::AppResult;
use dormhotel_database::store::UserStore;
use dormhotel_entity::user::{User, UserRole};

use crate::jwt::JwtDecoder;

const BEARER_PREFIX: &str = "Bearer ";

/// Pick the session token from the cookie value or the `Authorization`
/// header. A non-empty cookie always wins.
pub fn extract_token<'a>(cookie: Option<&'a str>, authorization: Option<&'a str>) -> Option<&'a str> {
    if let Some(token) = cookie.map(str::trim).filter(|t| !t.is_empty()) {
        return Some(token);
    }

    authorization
        .and_then(|h| h.strip_prefix(BEARER_PREFIX))
        .map(str::trim)
        .filter(|t| !t.is_empty())
}

/// Resolves a token into a loaded user with an acceptable role.
#[derive(Clone)]
pub struct AccessGuard {
    decoder: JwtDecoder,
    users: Arc<dyn UserStore>,
}

impl std::fmt::Debug for AccessGuard {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AccessGuard")
            .field("decoder", &self.decoder)
            .finish()
    }
}

impl AccessGuard {
    /// Creates a guard over the given verifier and credential store.
    pub fn new(decoder: JwtDecoder, users: Arc<dyn UserStore>) -> Self {
        Self { decoder, users }
    }

    /// Authorize a request.
    ///
    /// Checks run in order: token present, token valid, role in `required`
    /// (skipped when `required` is empty), user still exists.
    pub async fn authorize(&self, token: Option<&str>, required: &[UserRole]) -> AppResult<User> {
        let token = token.ok_or_else(|| AppError::unauthenticated("Authentication required"))?;

        let (user_id, claims) = self.decoder.verify(token)?;

        if !required.is_empty() && !required.contains(&claims.role) {
            debug!(user_id, role = %claims.role, "Role not permitted for route");
            return Err(AppError::forbidden("Insufficient permissions"));
        }

        self.users
            .find_by_id(user_id)
            .await?
            .ok_or_else(|| AppError::unauthenticated("User not found"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::jwt::JwtEncoder;
    use dormhotel_core::config::AuthConfig;
    use dormhotel_core::error::ErrorKind;
    use dormhotel_database::memory::MemoryUserStore;

    #[test]
    fn test_extract_token_prefers_cookie() {
        assert_eq!(extract_token(Some("c"), Some("Bearer h")), Some("c"));
        assert_eq!(extract_token(None, Some("Bearer h")), Some("h"));
        assert_eq!(extract_token(Some(""), Some("Bearer h")), Some("h"));
        assert_eq!(extract_token(None, Some("Basic abc")), None);
        assert_eq!(extract_token(None, Some("Bearer ")), None);
        assert_eq!(extract_token(None, None), None);
    }

    async fn setup() -> (AccessGuard, JwtEncoder, MemoryUserStore) {
        let config = AuthConfig::default();
        let users = MemoryUserStore::new();
        let guard = AccessGuard::new(JwtDecoder::new(&config), Arc::new(users.clone()));
        (guard, JwtEncoder::new(&config), users)
    }

    #[tokio::test]
    async fn test_missing_token() {
        let (guard, _, _) = setup().await;
        let err = guard.authorize(None, &[]).await.unwrap_err();
        assert_eq!(err.kind, ErrorKind::Unauthenticated);
        assert_eq!(err.message, "Authentication required");
    }

    #[tokio::test]
    async fn test_garbage_token() {
        let (guard, _, _) = setup().await;
        let err = guard.authorize(Some("garbage"), &[]).await.unwrap_err();
        assert_eq!(err.kind, ErrorKind::Unauthenticated);
    }

    #[tokio::test]
    async fn test_role_checked_before_user_lookup() {
        let (guard, encoder, _) = setup().await;
        // id 99 does not exist; the role check must fail first
        let token = encoder.issue(99, UserRole::User).unwrap();

        let err = guard
            .authorize(Some(&token), &[UserRole::Admin])
            .await
            .unwrap_err();
        assert_eq!(err.kind, ErrorKind::Forbidden);
    }

    #[tokio::test]
    async fn test_unknown_user() {
        let (guard, encoder, _) = setup().await;
        let token = encoder.issue(99, UserRole::User).unwrap();

        let err = guard.authorize(Some(&token), &[]).await.unwrap_err();
        assert_eq!(err.kind, ErrorKind::Unauthenticated);
    }

    #[tokio::test]
    async fn test_loads_user() {
        let (guard, encoder, users) = setup().await;
        let user = users.insert("guest@example.com", "hash").await.unwrap();
        let token = encoder.issue(user.id, user.role).unwrap();

        let loaded = guard
            .authorize(Some(&token), &[UserRole::User, UserRole::Admin])
            .await
            .unwrap();
        assert_eq!(loaded.id, user.id);
    }
}
