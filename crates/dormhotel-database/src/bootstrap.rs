//! Bounded retry loop for store initialization at startup.

use std::future::Future;
use std::time::Duration;

use tracing::{info, warn};

use dormhotel_core::config::DatabaseConfig;
use dormhotel_core::error::{AppError, ErrorKind};
use dormhotel_core::result::AppResult;

/// Attempt budget and fixed delay for startup initialization.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryPolicy {
    /// Total attempts, including the first.
    pub max_attempts: u32,
    /// Pause between consecutive attempts.
    pub delay: Duration,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_attempts: 10,
            delay: Duration::from_secs(5),
        }
    }
}

impl RetryPolicy {
    /// Build the policy from the database configuration section.
    pub fn from_config(config: &DatabaseConfig) -> Self {
        Self {
            max_attempts: config.init_max_attempts.max(1),
            delay: Duration::from_secs(config.init_retry_delay_seconds),
        }
    }

    /// Run `operation` until it succeeds or the attempt budget is spent.
    ///
    /// The closure receives the 1-based attempt number. On exhaustion the
    /// last failure is wrapped in a `StoreUnavailable` error.
    pub async fn run<T, F, Fut>(&self, name: &str, mut operation: F) -> AppResult<T>
    where
        F: FnMut(u32) -> Fut,
        Fut: Future<Output = AppResult<T>>,
    {
        let max_attempts = self.max_attempts.max(1);
        let mut attempt = 1;

        loop {
            match operation(attempt).await {
                Ok(value) => {
                    if attempt > 1 {
                        info!(attempt, "{name} succeeded after retrying");
                    }
                    return Ok(value);
                }
                Err(err) if attempt >= max_attempts => {
                    return Err(AppError::with_source(
                        ErrorKind::StoreUnavailable,
                        format!("{name} failed after {max_attempts} attempts"),
                        err,
                    ));
                }
                Err(err) => {
                    warn!(
                        attempt,
                        max_attempts,
                        retry_in_secs = self.delay.as_secs(),
                        error = %err,
                        "{name} failed, retrying"
                    );
                    tokio::time::sleep(self.delay).await;
                    attempt += 1;
                }
            }
        }
    }
}
