//! Booking repository implementation.

use async_trait::async_trait;
use sqlx::PgPool;

use dormhotel_core::result::AppResult;
use dormhotel_entity::booking::{Booking, NewBooking, RoomTypeCount};

use super::store_error;
use crate::store::BookingStore;

const BOOKING_COLUMNS: &str =
    "id, user_id, name, email, check_in, check_out, room_type, created_at";

/// PostgreSQL-backed booking store.
#[derive(Debug, Clone)]
pub struct BookingRepository {
    pool: PgPool,
}

impl BookingRepository {
    /// Create a new booking repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl BookingStore for BookingRepository {
    async fn list_all(&self) -> AppResult<Vec<Booking>> {
        sqlx::query_as::<_, Booking>(&format!(
            "SELECT {BOOKING_COLUMNS} FROM bookings ORDER BY created_at DESC, id DESC"
        ))
        .fetch_all(&self.pool)
        .await
        .map_err(|e| store_error("Failed to list bookings", e))
    }

    async fn list_by_owner(&self, user_id: i64) -> AppResult<Vec<Booking>> {
        sqlx::query_as::<_, Booking>(&format!(
            "SELECT {BOOKING_COLUMNS} FROM bookings WHERE user_id = $1 \
             ORDER BY created_at DESC, id DESC"
        ))
        .bind(user_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| store_error("Failed to list bookings by owner", e))
    }

    async fn insert(&self, booking: &NewBooking) -> AppResult<Booking> {
        sqlx::query_as::<_, Booking>(&format!(
            "INSERT INTO bookings (user_id, name, email, check_in, check_out, room_type) \
             VALUES ($1, $2, $3, $4, $5, $6) RETURNING {BOOKING_COLUMNS}"
        ))
        .bind(booking.user_id)
        .bind(&booking.name)
        .bind(&booking.email)
        .bind(booking.check_in)
        .bind(booking.check_out)
        .bind(booking.room_type)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| store_error("Failed to create booking", e))
    }

    async fn find_by_id(&self, id: i64) -> AppResult<Option<Booking>> {
        sqlx::query_as::<_, Booking>(&format!(
            "SELECT {BOOKING_COLUMNS} FROM bookings WHERE id = $1"
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| store_error("Failed to find booking", e))
    }

    async fn delete_by_id(&self, id: i64) -> AppResult<bool> {
        let result = sqlx::query("DELETE FROM bookings WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| store_error("Failed to delete booking", e))?;
        Ok(result.rows_affected() > 0)
    }

    async fn count(&self) -> AppResult<i64> {
        sqlx::query_scalar("SELECT COUNT(*) FROM bookings")
            .fetch_one(&self.pool)
            .await
            .map_err(|e| store_error("Failed to count bookings", e))
    }

    async fn count_by_room_type(&self) -> AppResult<Vec<RoomTypeCount>> {
        sqlx::query_as::<_, RoomTypeCount>(
            "SELECT room_type, COUNT(*) AS count FROM bookings \
             GROUP BY room_type ORDER BY room_type",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| store_error("Failed to count bookings by room type", e))
    }
}
