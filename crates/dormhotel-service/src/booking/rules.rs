//! Booking input validation.
//!
//! Checks run in a fixed order and the first failure is reported.

use chrono::{Local, NaiveDate};
use serde::{Deserialize, Serialize};

use dormhotel_core::error::AppError;
use dormhotel_core::result::AppResult;
use dormhotel_entity::booking::{NewBooking, RoomType};

const DATE_FORMAT: &str = "%Y-%m-%d";

/// Source of the current calendar date.
pub trait Clock: Send + Sync + 'static {
    /// Today's date.
    fn today(&self) -> NaiveDate;
}

/// The server's local calendar date.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn today(&self) -> NaiveDate {
        Local::now().date_naive()
    }
}

/// A clock pinned to one date.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub NaiveDate);

impl Clock for FixedClock {
    fn today(&self) -> NaiveDate {
        self.0
    }
}

/// Unvalidated booking input as submitted by a client.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BookingDraft {
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

/// Present means non-empty. Values are kept exactly as submitted.
fn present(field: &Option<String>) -> Option<&str> {
    field.as_deref().filter(|v| !v.is_empty())
}

fn parse_date(value: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(value, DATE_FORMAT).ok()
}

impl BookingDraft {
    /// Validate the draft for `user_id` against `today`.
    pub fn validate(&self, user_id: i64, today: NaiveDate) -> AppResult<NewBooking> {
        let (Some(name), Some(email), Some(check_in), Some(check_out), Some(room_type)) = (
            present(&self.name),
            present(&self.email),
            present(&self.check_in),
            present(&self.check_out),
            present(&self.room_type),
        ) else {
            return Err(AppError::validation("All fields are required"));
        };

        let check_in = parse_date(check_in)
            .ok_or_else(|| AppError::validation("Invalid check-in date"))?;
        if check_in < today {
            return Err(AppError::validation("Check-in date cannot be in the past"));
        }

        let check_out = parse_date(check_out)
            .ok_or_else(|| AppError::validation("Invalid check-out date"))?;
        if check_out <= check_in {
            return Err(AppError::validation(
                "Check-out date must be after check-in date",
            ));
        }

        let room_type: RoomType = room_type.parse()?;

        Ok(NewBooking {
            user_id,
            name: name.to_string(),
            email: email.to_string(),
            check_in,
            check_out,
            room_type,
        })
    }
}
