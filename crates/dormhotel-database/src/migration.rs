//! Embedded schema for the `users` and `bookings` tables.

use sqlx::PgPool;
use sqlx::migrate::Migrator;
use tracing::info;

use dormhotel_core::error::{AppError, ErrorKind};

/// Migrations compiled into the binary. Also drives `#[sqlx::test]` databases.
pub static MIGRATOR: Migrator = sqlx::migrate!("../../migrations");

/// Bring the schema up to date. Already-applied versions are skipped, so
/// this is safe on every startup attempt.
pub async fn run_migrations(pool: &PgPool) -> Result<(), AppError> {
    MIGRATOR.run(pool).await.map_err(|e| {
        AppError::with_source(ErrorKind::StoreUnavailable, "Schema migration failed", e)
    })?;

    info!(known = MIGRATOR.iter().count(), "Booking store schema is current");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_users_created_before_bookings() {
        let versions: Vec<i64> = MIGRATOR.iter().map(|m| m.version).collect();
        assert_eq!(versions, vec![20240101000001, 20240101000002]);

        let descriptions: Vec<&str> = MIGRATOR.iter().map(|m| m.description.as_ref()).collect();
        assert_eq!(descriptions, vec!["create users", "create bookings"]);
    }
}
