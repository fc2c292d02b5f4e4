//! # dormhotel-database
//!
//! Store traits for users and bookings with PostgreSQL and in-memory
//! implementations, plus connection pooling, migrations, and the bounded
//! startup retry loop.

pub mod bootstrap;
pub mod connection;
pub mod memory;
pub mod migration;
pub mod repositories;
pub mod store;

pub use bootstrap::RetryPolicy;
pub use connection::DatabasePool;
pub use memory::{MemoryBookingStore, MemoryUserStore};
pub use repositories::{BookingRepository, UserRepository};
pub use store::{BookingStore, UserStore};
