//! Application builder and server lifecycle.

use std::future::IntoFuture;
use std::sync::Arc;
use std::time::Duration;

use axum::Router;
use tokio::sync::watch;
use tracing::{info, warn};

use dormhotel_auth::password::PasswordHasher;
use dormhotel_core::config::AppConfig;
use dormhotel_core::error::AppError;
use dormhotel_database::bootstrap::RetryPolicy;
use dormhotel_database::connection::DatabasePool;
use dormhotel_database::migration::run_migrations;
use dormhotel_database::repositories::{BookingRepository, UserRepository};

use crate::router::build_router;
use crate::state::AppState;

/// Builds the complete Axum application with all routes and middleware.
pub fn build_app(state: AppState) -> Router {
    build_router(state)
}

/// Connect, migrate, seed the admin account, and wire the state.
///
/// Any failure restarts the whole sequence, up to the configured budget.
async fn initialize(config: &AppConfig) -> Result<(DatabasePool, AppState), AppError> {
    let policy = RetryPolicy::from_config(&config.database);

    policy
        .run("Store initialization", move |attempt| async move {
            info!(attempt, max_attempts = policy.max_attempts, "Initializing store");

            let db = DatabasePool::connect(&config.database).await?;
            db.health_check().await?;
            run_migrations(db.pool()).await?;

            let state = AppState::new(
                config.clone(),
                Arc::new(UserRepository::new(db.pool().clone())),
                Arc::new(BookingRepository::new(db.pool().clone())),
            )?;
            state
                .auth_service
                .seed_admin(&config.seed.admin_email, &config.seed.admin_password)
                .await?;

            Ok::<_, AppError>((db, state))
        })
        .await
}

/// Runs the DormHotel server until a shutdown signal arrives.
pub async fn run_server(config: AppConfig) -> Result<(), AppError> {
    config.validate()?;
    // Unusable hashing parameters would otherwise burn the whole retry budget
    PasswordHasher::new(&config.auth)?;

    let (db, state) = initialize(&config).await?;

    let app = build_app(state);
    let addr = format!("{}:{}", config.server.host, config.server.port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|e| AppError::internal(format!("Failed to bind {addr}: {e}")))?;

    info!(address = %addr, environment = %config.environment, "DormHotel server listening");

    let (shutdown_tx, mut shutdown_rx) = watch::channel(false);
    let server = axum::serve(listener, app).with_graceful_shutdown(async move {
        shutdown_signal().await;
        let _ = shutdown_tx.send(true);
    });

    let grace = Duration::from_secs(config.server.shutdown_grace_seconds);
    let result = tokio::select! {
        result = server.into_future() => {
            result.map_err(|e| AppError::internal(format!("Server error: {e}")))
        }
        _ = async {
            let _ = shutdown_rx.wait_for(|stopping| *stopping).await;
            tokio::time::sleep(grace).await;
        } => {
            warn!(grace_seconds = grace.as_secs(), "Graceful shutdown timed out, dropping open connections");
            Ok(())
        }
    };

    db.close().await;
    info!("DormHotel server stopped");
    result
}

async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("Failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    info!("Shutdown signal received");
}
