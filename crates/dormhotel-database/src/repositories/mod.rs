//! PostgreSQL store implementations.

pub mod booking;
pub mod user;

pub use booking::BookingRepository;
pub use user::UserRepository;

use dormhotel_core::error::{AppError, ErrorKind};

/// Map a query failure to `StoreUnavailable`, keeping the cause.
pub(crate) fn store_error(context: &str, err: sqlx::Error) -> AppError {
    AppError::with_source(ErrorKind::StoreUnavailable, context.to_string(), err)
}
