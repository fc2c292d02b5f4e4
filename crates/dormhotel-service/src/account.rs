//! Registration, login, and administrator seeding.

use std::sync::Arc;

use tokio::sync::OnceCell;
use tracing::{info, warn};

use dormhotel_auth::jwt::JwtEncoder;
use dormhotel_auth::password::PasswordHasher;
use dormhotel_core::error::{AppError, ErrorKind};
use dormhotel_core::result::AppResult;
use dormhotel_database::store::UserStore;
use dormhotel_entity::user::User;

/// Result of a successful login.
#[derive(Debug, Clone)]
pub struct LoginOutcome {
    /// The authenticated user.
    pub user: User,
    /// Freshly issued session token.
    pub token: String,
}

/// Password verified against `decoy_hash` when the email is unknown.
const DECOY_PASSWORD: &str = "dormhotel-decoy-password";

/// Handles account creation and credential checks.
#[derive(Clone)]
pub struct AuthService {
    users: Arc<dyn UserStore>,
    hasher: Arc<PasswordHasher>,
    encoder: Arc<JwtEncoder>,
    /// Lets unknown-email logins pay the same Argon2 cost as wrong passwords.
    decoy_hash: Arc<OnceCell<String>>,
}

impl std::fmt::Debug for AuthService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AuthService")
            .field("hasher", &self.hasher)
            .field("encoder", &self.encoder)
            .finish_non_exhaustive()
    }
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.trim().is_empty())
}

impl AuthService {
    /// Creates a new account service.
    pub fn new(
        users: Arc<dyn UserStore>,
        hasher: Arc<PasswordHasher>,
        encoder: Arc<JwtEncoder>,
    ) -> Self {
        Self {
            users,
            hasher,
            encoder,
            decoy_hash: Arc::new(OnceCell::new()),
        }
    }

    /// Hash on the blocking pool; Argon2 is deliberately slow.
    async fn hash(&self, password: &str) -> AppResult<String> {
        let hasher = Arc::clone(&self.hasher);
        let password = password.to_string();
        tokio::task::spawn_blocking(move || hasher.hash_password(&password))
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Internal, "Password hashing task failed", e))?
    }

    async fn verify(&self, password: &str, hash: &str) -> AppResult<bool> {
        let hasher = Arc::clone(&self.hasher);
        let password = password.to_string();
        let hash = hash.to_string();
        tokio::task::spawn_blocking(move || hasher.verify_password(&password, &hash))
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Internal, "Password verification task failed", e))?
    }

    /// Register a new `user`-role account.
    pub async fn register(&self, email: Option<&str>, password: Option<&str>) -> AppResult<User> {
        let (Some(email), Some(password)) = (non_blank(email), non_blank(password)) else {
            return Err(AppError::validation("Email and password required"));
        };

        if self.users.find_by_email(email).await?.is_some() {
            return Err(AppError::duplicate_email("Email already exists"));
        }

        let password_hash = self.hash(password).await?;
        // The store enforces uniqueness if a concurrent registration got here first
        let user = self.users.insert(email, &password_hash).await?;

        info!(user_id = user.id, "User registered");
        Ok(user)
    }

    /// Check credentials and issue a session token.
    pub async fn login(
        &self,
        email: Option<&str>,
        password: Option<&str>,
    ) -> AppResult<LoginOutcome> {
        let invalid = || AppError::unauthenticated("Invalid credentials");

        let (Some(email), Some(password)) = (non_blank(email), non_blank(password)) else {
            return Err(invalid());
        };

        let Some(user) = self.users.find_by_email(email).await? else {
            let decoy = self
                .decoy_hash
                .get_or_try_init(|| self.hash(DECOY_PASSWORD))
                .await?;
            self.verify(password, decoy).await?;
            warn!("Login attempt for unknown email");
            return Err(invalid());
        };

        if !self.verify(password, &user.password_hash).await? {
            warn!(user_id = user.id, "Login attempt with wrong password");
            return Err(invalid());
        }

        let token = self.encoder.issue(user.id, user.role)?;
        info!(user_id = user.id, role = %user.role, "Login successful");
        Ok(LoginOutcome { user, token })
    }

    /// Create or refresh the administrator account.
    pub async fn seed_admin(&self, email: &str, password: &str) -> AppResult<User> {
        let password_hash = self.hash(password).await?;
        let admin = self.users.upsert_admin(email, &password_hash).await?;
        info!(user_id = admin.id, email = %admin.email, "Admin account ensured");
        Ok(admin)
    }
}
