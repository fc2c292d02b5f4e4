//! Session token verification.

use jsonwebtoken::{Algorithm, DecodingKey, Validation, decode};
use thiserror::Error;
use tracing::debug;

use dormhotel_core::config::AuthConfig;
use dormhotel_core::error::AppError;

use super::claims::Claims;

/// Why a presented token was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum TokenError {
    /// Malformed token, bad signature, or unusable claims.
    #[error("invalid token")]
    Invalid,
    /// Well-formed token past its expiry.
    #[error("token expired")]
    Expired,
}

impl From<TokenError> for AppError {
    fn from(err: TokenError) -> Self {
        debug!(reason = %err, "Rejected session token");
        AppError::unauthenticated("Invalid token")
    }
}

/// Validates HS256 session tokens.
#[derive(Clone)]
pub struct JwtDecoder {
    decoding_key: DecodingKey,
    validation: Validation,
}

impl std::fmt::Debug for JwtDecoder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("JwtDecoder")
            .field("validation", &self.validation)
            .finish()
    }
}

impl JwtDecoder {
    /// Creates a new decoder from auth configuration.
    pub fn new(config: &AuthConfig) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.validate_exp = true;
        // Any expiry in the past is rejected
        validation.leeway = 0;

        Self {
            decoding_key: DecodingKey::from_secret(config.jwt_secret.as_bytes()),
            validation,
        }
    }

    /// Verifies signature and expiry, returning the user id and claims.
    pub fn verify(&self, token: &str) -> Result<(i64, Claims), TokenError> {
        let data = decode::<Claims>(token, &self.decoding_key, &self.validation).map_err(
            |e| match e.kind() {
                jsonwebtoken::errors::ErrorKind::ExpiredSignature => TokenError::Expired,
                _ => TokenError::Invalid,
            },
        )?;

        let user_id = data.claims.user_id().ok_or(TokenError::Invalid)?;
        Ok((user_id, data.claims))
    }
}
