//! Default administrator seeding configuration.

use serde::{Deserialize, Serialize};

/// Credentials of the administrator account upserted at startup.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SeedConfig {
    /// Administrator login email.
    #[serde(default = "default_admin_email")]
    pub admin_email: String,
    /// Administrator password (hashed before it reaches the store).
    #[serde(default = "default_admin_password")]
    pub admin_password: String,
}

impl Default for SeedConfig {
    fn default() -> Self {
        Self {
            admin_email: default_admin_email(),
            admin_password: default_admin_password(),
        }
    }
}

fn default_admin_email() -> String {
    "admin@thedormhotel.com".to_string()
}

fn default_admin_password() -> String {
    "admin123".to_string()
}
