//! Booking rules and lifecycle.

pub mod rules;
pub mod service;

pub use rules::{BookingDraft, Clock, FixedClock, SystemClock};
pub use service::BookingService;
