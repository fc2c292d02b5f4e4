//! Booking domain entities.

pub mod model;
pub mod room;

pub use model::{Booking, NewBooking, RoomTypeCount};
pub use room::RoomType;
