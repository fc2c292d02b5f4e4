//! Application configuration schemas.
//!
//! All configuration structs are deserialized via the `config` crate from
//! `config/default.toml`, an optional environment overlay, and `HOTEL__*`
//! environment variables. Every section has defaults so a bare environment
//! still yields a usable development configuration.

pub mod app;
pub mod auth;
pub mod database;
pub mod logging;
pub mod seed;

use serde::{Deserialize, Serialize};

pub use self::app::ServerConfig;
pub use self::auth::AuthConfig;
pub use self::database::DatabaseConfig;
pub use self::logging::LoggingConfig;
pub use self::seed::SeedConfig;

use crate::error::AppError;

/// Root application configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// Deployment environment name (`development`, `production`, ...).
    #[serde(default = "default_environment")]
    pub environment: String,
    /// HTTP server settings.
    #[serde(default)]
    pub server: ServerConfig,
    /// Database connection settings.
    #[serde(default)]
    pub database: DatabaseConfig,
    /// Authentication settings.
    #[serde(default)]
    pub auth: AuthConfig,
    /// Default administrator seeding.
    #[serde(default)]
    pub seed: SeedConfig,
    /// Logging settings.
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            environment: default_environment(),
            server: ServerConfig::default(),
            database: DatabaseConfig::default(),
            auth: AuthConfig::default(),
            seed: SeedConfig::default(),
            logging: LoggingConfig::default(),
        }
    }
}

impl AppConfig {
    /// Load configuration for the given environment.
    ///
    /// Merges `config/default.toml`, `config/{env}.toml` and environment
    /// variables prefixed with `HOTEL` (separator `__`), later sources
    /// overriding earlier ones.
    pub fn load(env: &str) -> Result<Self, AppError> {
        let config = config::Config::builder()
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::File::with_name(&format!("config/{env}")).required(false))
            .add_source(
                config::Environment::with_prefix("HOTEL")
                    .separator("__")
                    .try_parsing(true),
            )
            .set_override("environment", env)?
            .build()
            .map_err(|e| AppError::configuration(format!("Failed to build config: {e}")))?;

        config
            .try_deserialize()
            .map_err(|e| AppError::configuration(format!("Failed to deserialize config: {e}")))
    }

    /// Reject configurations that would run with insecure or unusable values.
    pub fn validate(&self) -> Result<(), AppError> {
        if self.auth.jwt_secret.trim().is_empty() {
            return Err(AppError::configuration("auth.jwt_secret must not be empty"));
        }
        if self.environment == "production" && self.auth.jwt_secret == auth::PLACEHOLDER_SECRET {
            return Err(AppError::configuration(
                "auth.jwt_secret must be set in production",
            ));
        }
        if self.auth.token_ttl_hours == 0 {
            return Err(AppError::configuration("auth.token_ttl_hours must be positive"));
        }
        if self.database.init_max_attempts == 0 {
            return Err(AppError::configuration(
                "database.init_max_attempts must be at least 1",
            ));
        }
        Ok(())
    }
}

fn default_environment() -> String {
    "development".to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        let config = AppConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.auth.token_ttl_hours, 8);
        assert_eq!(config.auth.cookie_name, "token");
        assert_eq!(config.database.init_max_attempts, 10);
    }

    #[test]
    fn test_empty_secret_rejected() {
        let mut config = AppConfig::default();
        config.auth.jwt_secret = "  ".to_string();
        let err = config.validate().unwrap_err();
        assert_eq!(err.kind, crate::error::ErrorKind::Configuration);
    }

    #[test]
    fn test_placeholder_secret_rejected_in_production() {
        let mut config = AppConfig {
            environment: "production".to_string(),
            ..AppConfig::default()
        };
        assert!(config.validate().is_err());

        config.auth.jwt_secret = "a-real-secret".to_string();
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_source_fills_defaults() {
        let config: AppConfig = config::Config::builder()
            .set_override("server.port", 9090)
            .unwrap()
            .build()
            .unwrap()
            .try_deserialize()
            .unwrap();

        assert_eq!(config.server.port, 9090);
        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.logging.level, "info");
    }
}
