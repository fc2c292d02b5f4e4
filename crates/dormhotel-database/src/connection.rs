//! PostgreSQL pool for the booking and credential stores.

use std::str::FromStr;
use std::time::Duration;

use sqlx::postgres::{PgConnectOptions, PgPool, PgPoolOptions};
use tracing::info;

use dormhotel_core::config::DatabaseConfig;
use dormhotel_core::error::{AppError, ErrorKind};

/// Shared handle to the store's connection pool.
#[derive(Debug, Clone)]
pub struct DatabasePool {
    pool: PgPool,
}

/// Parse the configured URL. Only host, port and database are ever logged.
fn connect_options(config: &DatabaseConfig) -> Result<PgConnectOptions, AppError> {
    PgConnectOptions::from_str(&config.url).map_err(|e| {
        AppError::with_source(ErrorKind::Configuration, "Invalid database URL", e)
    })
}

/// Pool sizing and timeouts. Acquire waits past the timeout surface as
/// `StoreUnavailable` from the repositories.
fn pool_options(config: &DatabaseConfig) -> PgPoolOptions {
    PgPoolOptions::new()
        .max_connections(config.max_connections)
        .min_connections(config.min_connections.min(config.max_connections))
        .acquire_timeout(Duration::from_secs(config.connect_timeout_seconds))
        .idle_timeout(Duration::from_secs(config.idle_timeout_seconds))
}

impl DatabasePool {
    /// Open the pool. One call is one startup attempt; retrying is the
    /// caller's job.
    pub async fn connect(config: &DatabaseConfig) -> Result<Self, AppError> {
        let options = connect_options(config)?;
        info!(
            host = options.get_host(),
            port = options.get_port(),
            database = options.get_database().unwrap_or("<default>"),
            max_connections = config.max_connections,
            "Opening booking store pool"
        );

        let pool = pool_options(config)
            .connect_with(options)
            .await
            .map_err(|e| {
                AppError::with_source(
                    ErrorKind::StoreUnavailable,
                    "Booking store is unreachable",
                    e,
                )
            })?;

        Ok(Self { pool })
    }

    pub fn pool(&self) -> &PgPool {
        &self.pool
    }

    /// Round-trip a trivial query.
    pub async fn health_check(&self) -> Result<(), AppError> {
        sqlx::query("SELECT 1")
            .execute(&self.pool)
            .await
            .map(|_| ())
            .map_err(|e| {
                AppError::with_source(ErrorKind::StoreUnavailable, "Booking store health check failed", e)
            })
    }

    /// Drain the pool during shutdown.
    pub async fn close(&self) {
        self.pool.close().await;
        info!("Booking store pool closed");
    }
}
