//! Authentication configuration.

use serde::{Deserialize, Serialize};

/// Development-only signing secret shipped in the defaults.
pub const PLACEHOLDER_SECRET: &str = "CHANGE_ME_IN_PRODUCTION";

/// Session token, cookie, and password hashing configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthConfig {
    /// Secret key for JWT signing (HMAC-SHA256).
    #[serde(default = "default_jwt_secret")]
    pub jwt_secret: String,
    /// Session token lifetime in hours.
    #[serde(default = "default_token_ttl")]
    pub token_ttl_hours: u64,
    /// Name of the HTTP-only session cookie.
    #[serde(default = "default_cookie_name")]
    pub cookie_name: String,
    /// Whether the session cookie carries the `Secure` attribute.
    #[serde(default)]
    pub cookie_secure: bool,
    /// Argon2 memory cost in KiB.
    #[serde(default = "default_hash_memory")]
    pub hash_memory_kib: u32,
    /// Argon2 iteration count.
    #[serde(default = "default_hash_iterations")]
    pub hash_iterations: u32,
    /// Argon2 degree of parallelism.
    #[serde(default = "default_hash_parallelism")]
    pub hash_parallelism: u32,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            jwt_secret: default_jwt_secret(),
            token_ttl_hours: default_token_ttl(),
            cookie_name: default_cookie_name(),
            cookie_secure: false,
            hash_memory_kib: default_hash_memory(),
            hash_iterations: default_hash_iterations(),
            hash_parallelism: default_hash_parallelism(),
        }
    }
}

fn default_jwt_secret() -> String {
    PLACEHOLDER_SECRET.to_string()
}

fn default_token_ttl() -> u64 {
    8
}

fn default_cookie_name() -> String {
    "token".to_string()
}

fn default_hash_memory() -> u32 {
    65536
}

fn default_hash_iterations() -> u32 {
    3
}

fn default_hash_parallelism() -> u32 {
    1
}
