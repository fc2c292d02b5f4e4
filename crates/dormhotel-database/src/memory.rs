//! In-memory stores using a Tokio mutex, for tests and single-process fakes.
//!
//! Each operation holds the lock for its whole duration, so every mutation
//! is atomic in the same way a single SQL statement is.

use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::Mutex;
use tracing::debug;

use dormhotel_core::error::AppError;
use dormhotel_core::result::AppResult;
use dormhotel_entity::booking::{Booking, NewBooking, RoomType, RoomTypeCount};
use dormhotel_entity::user::{User, UserRole};

use crate::store::{BookingStore, UserStore};

#[derive(Debug)]
struct Table<T> {
    next_id: i64,
    rows: Vec<T>,
}

impl<T> Default for Table<T> {
    fn default() -> Self {
        Self {
            next_id: 0,
            rows: Vec::new(),
        }
    }
}

impl<T> Table<T> {
    fn allocate_id(&mut self) -> i64 {
        self.next_id += 1;
        self.next_id
    }
}

/// In-memory credential store.
#[derive(Debug, Clone, Default)]
pub struct MemoryUserStore {
    state: Arc<Mutex<Table<User>>>,
}

impl MemoryUserStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl UserStore for MemoryUserStore {
    async fn find_by_email(&self, email: &str) -> AppResult<Option<User>> {
        let state = self.state.lock().await;
        Ok(state.rows.iter().find(|u| u.email == email).cloned())
    }

    async fn find_by_id(&self, id: i64) -> AppResult<Option<User>> {
        let state = self.state.lock().await;
        Ok(state.rows.iter().find(|u| u.id == id).cloned())
    }

    async fn insert(&self, email: &str, password_hash: &str) -> AppResult<User> {
        let mut state = self.state.lock().await;
        if state.rows.iter().any(|u| u.email == email) {
            return Err(AppError::duplicate_email("Email already exists"));
        }

        let user = User {
            id: state.allocate_id(),
            email: email.to_string(),
            password_hash: password_hash.to_string(),
            role: UserRole::User,
            created_at: Utc::now(),
        };
        state.rows.push(user.clone());
        debug!(user_id = user.id, "User inserted");
        Ok(user)
    }

    async fn upsert_admin(&self, email: &str, password_hash: &str) -> AppResult<User> {
        let mut state = self.state.lock().await;
        if let Some(existing) = state.rows.iter_mut().find(|u| u.email == email) {
            existing.password_hash = password_hash.to_string();
            existing.role = UserRole::Admin;
            return Ok(existing.clone());
        }

        let user = User {
            id: state.allocate_id(),
            email: email.to_string(),
            password_hash: password_hash.to_string(),
            role: UserRole::Admin,
            created_at: Utc::now(),
        };
        state.rows.push(user.clone());
        Ok(user)
    }

    async fn list_all(&self) -> AppResult<Vec<User>> {
        let state = self.state.lock().await;
        let mut users = state.rows.clone();
        users.sort_by(|a, b| (b.created_at, b.id).cmp(&(a.created_at, a.id)));
        Ok(users)
    }

    async fn count(&self) -> AppResult<i64> {
        let state = self.state.lock().await;
        Ok(state.rows.len() as i64)
    }
}

/// In-memory booking store.
#[derive(Debug, Clone, Default)]
pub struct MemoryBookingStore {
    state: Arc<Mutex<Table<Booking>>>,
}

impl MemoryBookingStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }
}

fn newest_first(mut bookings: Vec<Booking>) -> Vec<Booking> {
    bookings.sort_by(|a, b| (b.created_at, b.id).cmp(&(a.created_at, a.id)));
    bookings
}

#[async_trait]
impl BookingStore for MemoryBookingStore {
    async fn list_all(&self) -> AppResult<Vec<Booking>> {
        let state = self.state.lock().await;
        Ok(newest_first(state.rows.clone()))
    }

    async fn list_by_owner(&self, user_id: i64) -> AppResult<Vec<Booking>> {
        let state = self.state.lock().await;
        let owned = state
            .rows
            .iter()
            .filter(|b| b.user_id == user_id)
            .cloned()
            .collect();
        Ok(newest_first(owned))
    }

    async fn insert(&self, booking: &NewBooking) -> AppResult<Booking> {
        let mut state = self.state.lock().await;
        let stored = Booking {
            id: state.allocate_id(),
            user_id: booking.user_id,
            name: booking.name.clone(),
            email: booking.email.clone(),
            check_in: booking.check_in,
            check_out: booking.check_out,
            room_type: booking.room_type,
            created_at: Utc::now(),
        };
        state.rows.push(stored.clone());
        Ok(stored)
    }

    async fn find_by_id(&self, id: i64) -> AppResult<Option<Booking>> {
        let state = self.state.lock().await;
        Ok(state.rows.iter().find(|b| b.id == id).cloned())
    }

    async fn delete_by_id(&self, id: i64) -> AppResult<bool> {
        let mut state = self.state.lock().await;
        let before = state.rows.len();
        state.rows.retain(|b| b.id != id);
        Ok(state.rows.len() < before)
    }

    async fn count(&self) -> AppResult<i64> {
        let state = self.state.lock().await;
        Ok(state.rows.len() as i64)
    }

    async fn count_by_room_type(&self) -> AppResult<Vec<RoomTypeCount>> {
        let state = self.state.lock().await;
        let counts = [RoomType::Single, RoomType::Double, RoomType::Suite]
            .into_iter()
            .map(|room_type| RoomTypeCount {
                room_type,
                count: state.rows.iter().filter(|b| b.room_type == room_type).count() as i64,
            })
            .filter(|c| c.count > 0)
            .collect();
        Ok(counts)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use dormhotel_core::error::ErrorKind;

    fn new_booking(user_id: i64, room_type: RoomType) -> NewBooking {
        NewBooking {
            user_id,
            name: "Guest".to_string(),
            email: "guest@example.com".to_string(),
            check_in: NaiveDate::from_ymd_opt(2031, 5, 1).unwrap(),
            check_out: NaiveDate::from_ymd_opt(2031, 5, 2).unwrap(),
            room_type,
        }
    }

    #[tokio::test]
    async fn test_duplicate_email_rejected() {
        let store = MemoryUserStore::new();
        store.insert("a@example.com", "h1").await.unwrap();

        let err = store.insert("a@example.com", "h2").await.unwrap_err();
        assert_eq!(err.kind, ErrorKind::DuplicateEmail);
        assert_eq!(store.count().await.unwrap(), 1);
    }

    #[tokio::test]
    async fn test_email_is_case_sensitive() {
        let store = MemoryUserStore::new();
        store.insert("a@example.com", "h1").await.unwrap();
        assert!(store.insert("A@example.com", "h2").await.is_ok());
        assert!(store.find_by_email("A@EXAMPLE.COM").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_upsert_admin_overwrites_existing() {
        let store = MemoryUserStore::new();
        let plain = store.insert("boss@example.com", "old").await.unwrap();

        let admin = store.upsert_admin("boss@example.com", "new").await.unwrap();
        store.upsert_admin("boss@example.com", "new").await.unwrap();

        assert_eq!(admin.id, plain.id);
        assert_eq!(admin.role, UserRole::Admin);
        assert_eq!(admin.password_hash, "new");
        assert_eq!(store.count().await.unwrap(), 1);
    }

    #[tokio::test]
    async fn test_bookings_newest_first_and_scoped_by_owner() {
        let store = MemoryBookingStore::new();
        let a = store.insert(&new_booking(1, RoomType::Single)).await.unwrap();
        let b = store.insert(&new_booking(2, RoomType::Double)).await.unwrap();
        let c = store.insert(&new_booking(1, RoomType::Double)).await.unwrap();

        let all: Vec<i64> = store.list_all().await.unwrap().iter().map(|x| x.id).collect();
        assert_eq!(all, vec![c.id, b.id, a.id]);

        let mine: Vec<i64> = store
            .list_by_owner(1)
            .await
            .unwrap()
            .iter()
            .map(|x| x.id)
            .collect();
        assert_eq!(mine, vec![c.id, a.id]);
    }

    #[tokio::test]
    async fn test_delete_reports_missing_row() {
        let store = MemoryBookingStore::new();
        let booking = store.insert(&new_booking(1, RoomType::Suite)).await.unwrap();

        assert!(store.delete_by_id(booking.id).await.unwrap());
        assert!(!store.delete_by_id(booking.id).await.unwrap());
        assert!(store.find_by_id(booking.id).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_count_by_room_type_skips_empty() {
        let store = MemoryBookingStore::new();
        store.insert(&new_booking(1, RoomType::Suite)).await.unwrap();
        store.insert(&new_booking(1, RoomType::Single)).await.unwrap();
        store.insert(&new_booking(2, RoomType::Suite)).await.unwrap();

        let counts = store.count_by_room_type().await.unwrap();
        assert_eq!(
            counts,
            vec![
                RoomTypeCount { room_type: RoomType::Single, count: 1 },
                RoomTypeCount { room_type: RoomType::Suite, count: 2 },
            ]
        );
    }
}
