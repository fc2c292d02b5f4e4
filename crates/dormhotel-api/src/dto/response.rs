//! Response DTOs.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use dormhotel_entity::user::{User, UserRole};

/// Simple message response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessageResponse {
    /// Message text.
    pub message: String,
}

impl MessageResponse {
    /// Wrap a message.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Login response body; the token itself travels in the cookie.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginResponse {
    /// User ID.
    pub id: i64,
    /// Email.
    pub email: String,
    /// Role.
    pub role: UserRole,
}

impl From<&User> for LoginResponse {
    fn from(user: &User) -> Self {
        Self {
            id: user.id,
            email: user.email.clone(),
            role: user.role,
        }
    }
}

/// Response to a successful booking creation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BookingCreatedResponse {
    /// New booking ID.
    pub id: i64,
    /// Confirmation message.
    pub message: String,
}

/// User row in the admin listing.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserSummary {
    /// User ID.
    pub id: i64,
    /// Email.
    pub email: String,
    /// Role.
    pub role: UserRole,
    /// Created at.
    pub created_at: DateTime<Utc>,
}

impl From<User> for UserSummary {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            email: user.email,
            role: user.role,
            created_at: user.created_at,
        }
    }
}

/// Health check response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Always `"OK"` while the process serves requests.
    pub status: String,
    /// Current server time.
    pub timestamp: DateTime<Utc>,
    /// Seconds since the server started.
    pub uptime_seconds: u64,
    /// Deployment environment name.
    pub environment: String,
}
