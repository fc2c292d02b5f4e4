//! Booking entity model.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use super::room::RoomType;

/// A room reservation owned by one user.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Booking {
    /// Store-assigned identifier.
    pub id: i64,
    /// Owning user; fixed at creation.
    pub user_id: i64,
    /// Guest name.
    pub name: String,
    /// Guest contact email (free text, may differ from the owner's).
    pub email: String,
    /// Arrival date.
    pub check_in: NaiveDate,
    /// Departure date, strictly after `check_in`.
    pub check_out: NaiveDate,
    /// Reserved room category.
    pub room_type: RoomType,
    /// When the booking was created.
    pub created_at: DateTime<Utc>,
}

impl Booking {
    /// Number of nights covered by the stay.
    pub fn nights(&self) -> i64 {
        (self.check_out - self.check_in).num_days()
    }
}

/// Validated data required to insert a booking.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewBooking {
    /// Owning user.
    pub user_id: i64,
    /// Guest name.
    pub name: String,
    /// Guest contact email.
    pub email: String,
    /// Arrival date.
    pub check_in: NaiveDate,
    /// Departure date.
    pub check_out: NaiveDate,
    /// Room category.
    pub room_type: RoomType,
}

/// Number of bookings per room type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct RoomTypeCount {
    /// Room category.
    pub room_type: RoomType,
    /// Bookings of that category.
    pub count: i64,
}
