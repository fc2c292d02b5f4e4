//! Convenience result type alias for DormHotel.

use crate::error::AppError;

/// A specialized `Result` type for DormHotel operations.
pub type AppResult<T> = Result<T, AppError>;
