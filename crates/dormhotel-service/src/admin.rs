//! Admin reporting over users and bookings.

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use dormhotel_core::result::AppResult;
use dormhotel_database::store::{BookingStore, UserStore};
use dormhotel_entity::booking::RoomTypeCount;
use dormhotel_entity::user::User;

/// Aggregate counts for the admin dashboard.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingStats {
    /// Registered users, admins included.
    pub total_users: i64,
    /// Stored bookings.
    pub total_bookings: i64,
    /// Bookings per room type; types with no bookings are omitted.
    pub room_stats: Vec<RoomTypeCount>,
}

/// Read-only reporting for administrators.
#[derive(Clone)]
pub struct AdminService {
    users: Arc<dyn UserStore>,
    bookings: Arc<dyn BookingStore>,
}

impl std::fmt::Debug for AdminService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AdminService").finish_non_exhaustive()
    }
}

impl AdminService {
    /// Creates a new admin service.
    pub fn new(users: Arc<dyn UserStore>, bookings: Arc<dyn BookingStore>) -> Self {
        Self { users, bookings }
    }

    /// All users, newest first.
    pub async fn list_users(&self) -> AppResult<Vec<User>> {
        self.users.list_all().await
    }

    /// User and booking totals plus the per-room-type breakdown.
    pub async fn stats(&self) -> AppResult<BookingStats> {
        Ok(BookingStats {
            total_users: self.users.count().await?,
            total_bookings: self.bookings.count().await?,
            room_stats: self.bookings.count_by_room_type().await?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use dormhotel_database::memory::{MemoryBookingStore, MemoryUserStore};
    use dormhotel_entity::booking::{NewBooking, RoomType};

    #[tokio::test]
    async fn test_stats() {
        let users = MemoryUserStore::new();
        let bookings = MemoryBookingStore::new();
        let owner = users.insert("a@example.com", "h").await.unwrap();
        users.upsert_admin("admin@example.com", "h").await.unwrap();

        for room_type in [RoomType::Double, RoomType::Double, RoomType::Suite] {
            bookings
                .insert(&NewBooking {
                    user_id: owner.id,
                    name: "A".to_string(),
                    email: "a@example.com".to_string(),
                    check_in: NaiveDate::from_ymd_opt(2030, 1, 1).unwrap(),
                    check_out: NaiveDate::from_ymd_opt(2030, 1, 2).unwrap(),
                    room_type,
                })
                .await
                .unwrap();
        }

        let service = AdminService::new(Arc::new(users), Arc::new(bookings));
        let stats = service.stats().await.unwrap();

        assert_eq!(stats.total_users, 2);
        assert_eq!(stats.total_bookings, 3);

        let json = serde_json::to_value(&stats).unwrap();
        assert_eq!(json["totalUsers"], 2);
        assert_eq!(json["roomStats"][0]["room_type"], "double");
        assert_eq!(json["roomStats"][0]["count"], 2);
    }
}
