//! Booking creation, cancellation, and listing with ownership rules.

use std::sync::Arc;

use tracing::info;

use dormhotel_core::error::AppError;
use dormhotel_core::result::AppResult;
use dormhotel_database::store::BookingStore;
use dormhotel_entity::booking::Booking;
use dormhotel_entity::user::User;

use super::rules::{BookingDraft, Clock};

/// Applies booking rules on behalf of an authenticated actor.
#[derive(Clone)]
pub struct BookingService {
    bookings: Arc<dyn BookingStore>,
    clock: Arc<dyn Clock>,
}

impl std::fmt::Debug for BookingService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BookingService").finish_non_exhaustive()
    }
}

impl BookingService {
    /// Creates a new booking service.
    pub fn new(bookings: Arc<dyn BookingStore>, clock: Arc<dyn Clock>) -> Self {
        Self { bookings, clock }
    }

    /// Validate and store a booking owned by `actor`.
    pub async fn create(&self, actor: &User, draft: &BookingDraft) -> AppResult<Booking> {
        let new_booking = draft.validate(actor.id, self.clock.today())?;
        let booking = self.bookings.insert(&new_booking).await?;

        info!(
            booking_id = booking.id,
            user_id = actor.id,
            room_type = %booking.room_type,
            check_in = %booking.check_in,
            check_out = %booking.check_out,
            "Booking created"
        );
        Ok(booking)
    }

    /// Delete a booking owned by `actor`, or any booking if `actor` is an admin.
    pub async fn delete(&self, actor: &User, booking_id: i64) -> AppResult<()> {
        let booking = self
            .bookings
            .find_by_id(booking_id)
            .await?
            .ok_or_else(|| AppError::not_found("Booking not found"))?;

        if !actor.can_manage(booking.user_id) {
            return Err(AppError::forbidden("You can only delete your own bookings"));
        }

        // A concurrent delete may win between the lookup and here
        if !self.bookings.delete_by_id(booking_id).await? {
            return Err(AppError::not_found("Booking not found"));
        }

        info!(
            booking_id,
            owner_id = booking.user_id,
            deleted_by = actor.id,
            "Booking deleted"
        );
        Ok(())
    }

    /// All bookings for admins, otherwise only the actor's own.
    pub async fn list(&self, actor: &User) -> AppResult<Vec<Booking>> {
        if actor.is_admin() {
            self.bookings.list_all().await
        } else {
            self.bookings.list_by_owner(actor.id).await
        }
    }
}
