//! Store traits consumed by the service layer.
//!
//! Implementations must make every mutation a single atomic operation.
//! Uniqueness of user emails is enforced here, not by callers.

use async_trait::async_trait;

use dormhotel_core::result::AppResult;
use dormhotel_entity::booking::{Booking, NewBooking, RoomTypeCount};
use dormhotel_entity::user::User;

/// Persistent set of user accounts.
#[async_trait]
pub trait UserStore: Send + Sync + 'static {
    /// Find a user by exact email.
    async fn find_by_email(&self, email: &str) -> AppResult<Option<User>>;

    /// Find a user by id.
    async fn find_by_id(&self, id: i64) -> AppResult<Option<User>>;

    /// Insert a new `user`-role account.
    ///
    /// Fails with `DuplicateEmail` when the email is already stored.
    async fn insert(&self, email: &str, password_hash: &str) -> AppResult<User>;

    /// Insert the admin account, or overwrite its hash and force the admin
    /// role if the email already exists.
    async fn upsert_admin(&self, email: &str, password_hash: &str) -> AppResult<User>;

    /// All users, newest first.
    async fn list_all(&self) -> AppResult<Vec<User>>;

    /// Total number of users.
    async fn count(&self) -> AppResult<i64>;
}

/// Persistent set of bookings.
#[async_trait]
pub trait BookingStore: Send + Sync + 'static {
    /// All bookings, newest first.
    async fn list_all(&self) -> AppResult<Vec<Booking>>;

    /// Bookings owned by one user, newest first.
    async fn list_by_owner(&self, user_id: i64) -> AppResult<Vec<Booking>>;

    /// Insert a booking and return the stored row.
    async fn insert(&self, booking: &NewBooking) -> AppResult<Booking>;

    /// Find a booking by id.
    async fn find_by_id(&self, id: i64) -> AppResult<Option<Booking>>;

    /// Delete a booking; `false` when no row was removed.
    async fn delete_by_id(&self, id: i64) -> AppResult<bool>;

    /// Total number of bookings.
    async fn count(&self) -> AppResult<i64>;

    /// Booking counts grouped by room type, in room type order.
    async fn count_by_room_type(&self) -> AppResult<Vec<RoomTypeCount>>;
}
