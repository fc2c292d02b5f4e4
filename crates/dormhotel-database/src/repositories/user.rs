//! User repository implementation.

use async_trait::async_trait;
use sqlx::PgPool;

use dormhotel_core::error::AppError;
use dormhotel_core::result::AppResult;
use dormhotel_entity::user::User;

use super::store_error;
use crate::store::UserStore;

const EMAIL_UNIQUE_CONSTRAINT: &str = "users_email_key";

/// PostgreSQL-backed credential store.
#[derive(Debug, Clone)]
pub struct UserRepository {
    pool: PgPool,
}

impl UserRepository {
    /// Create a new user repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

fn is_email_conflict(err: &sqlx::Error) -> bool {
    err.as_database_error()
        .and_then(|db| db.constraint())
        .is_some_and(|c| c == EMAIL_UNIQUE_CONSTRAINT)
}

#[async_trait]
impl UserStore for UserRepository {
    async fn find_by_email(&self, email: &str) -> AppResult<Option<User>> {
        sqlx::query_as::<_, User>(
            "SELECT id, email, password_hash, role, created_at FROM users WHERE email = $1",
        )
        .bind(email)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| store_error("Failed to find user by email", e))
    }

    async fn find_by_id(&self, id: i64) -> AppResult<Option<User>> {
        sqlx::query_as::<_, User>(
            "SELECT id, email, password_hash, role, created_at FROM users WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| store_error("Failed to find user by id", e))
    }

    async fn insert(&self, email: &str, password_hash: &str) -> AppResult<User> {
        sqlx::query_as::<_, User>(
            "INSERT INTO users (email, password_hash) VALUES ($1, $2) \
             RETURNING id, email, password_hash, role, created_at",
        )
        .bind(email)
        .bind(password_hash)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            if is_email_conflict(&e) {
                AppError::duplicate_email("Email already exists")
            } else {
                store_error("Failed to create user", e)
            }
        })
    }

    async fn upsert_admin(&self, email: &str, password_hash: &str) -> AppResult<User> {
        sqlx::query_as::<_, User>(
            "INSERT INTO users (email, password_hash, role) VALUES ($1, $2, 'admin') \
             ON CONFLICT (email) DO UPDATE \
             SET password_hash = EXCLUDED.password_hash, role = EXCLUDED.role \
             RETURNING id, email, password_hash, role, created_at",
        )
        .bind(email)
        .bind(password_hash)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| store_error("Failed to upsert admin user", e))
    }

    async fn list_all(&self) -> AppResult<Vec<User>> {
        sqlx::query_as::<_, User>(
            "SELECT id, email, password_hash, role, created_at FROM users \
             ORDER BY created_at DESC, id DESC",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| store_error("Failed to list users", e))
    }

    async fn count(&self) -> AppResult<i64> {
        sqlx::query_scalar("SELECT COUNT(*) FROM users")
            .fetch_one(&self.pool)
            .await
            .map_err(|e| store_error("Failed to count users", e))
    }
}
