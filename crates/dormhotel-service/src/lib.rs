//! # dormhotel-service
//!
//! Business logic for DormHotel. Services hold their stores behind trait
//! objects so the same code runs against PostgreSQL or the in-memory fakes.

pub mod account;
pub mod admin;
pub mod booking;

pub use account::{AuthService, LoginOutcome};
pub use admin::{AdminService, BookingStats};
pub use booking::{BookingDraft, BookingService, Clock, FixedClock, SystemClock};
