//! Request DTOs.
//!
//! Every field is optional so that missing fields reach the service layer
//! and produce its validation messages instead of a deserialization error.

use serde::{Deserialize, Serialize};

use dormhotel_service::booking::BookingDraft;

/// Credentials for register and login.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CredentialsRequest {
    /// Account email.
    pub email: Option<String>,
    /// Plaintext password.
    pub password: Option<String>,
}

/// Create booking request.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CreateBookingRequest {
    /// Guest name.
    pub name: Option<String>,
    /// Guest email.
    pub email: Option<String>,
    /// Arrival date, `YYYY-MM-DD`.
    pub check_in: Option<String>,
    /// Departure date, `YYYY-MM-DD`.
    pub check_out: Option<String>,
    /// `single`, `double` or `suite`.
    pub room_type: Option<String>,
}

impl From<CreateBookingRequest> for BookingDraft {
    fn from(req: CreateBookingRequest) -> Self {
        Self {
            name: req.name,
            email: req.email,
            check_in: req.check_in,
            check_out: req.check_out,
            room_type: req.room_type,
        }
    }
}
