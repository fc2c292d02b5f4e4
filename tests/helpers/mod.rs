//! Shared test helpers for HTTP integration tests.
//!
//! Drives the real router over in-memory stores with a pinned clock.

#![allow(dead_code)]

use std::sync::Arc;

use axum::Router;
use axum::body::Body;
use axum::http::header::{AUTHORIZATION, CONTENT_TYPE, COOKIE, SET_COOKIE};
use axum::http::{HeaderMap, Request, StatusCode};
use chrono::NaiveDate;
use serde_json::{Value, json};
use tower::ServiceExt;

use dormhotel_api::{AppState, build_app};
use dormhotel_core::config::AppConfig;
use dormhotel_database::memory::{MemoryBookingStore, MemoryUserStore};
use dormhotel_service::booking::FixedClock;

pub const ADMIN_EMAIL: &str = "admin@thedormhotel.com";
pub const ADMIN_PASSWORD: &str = "admin123";

/// How a request presents its session token.
#[derive(Debug, Clone, Copy)]
pub enum Auth<'a> {
    None,
    Cookie(&'a str),
    Bearer(&'a str),
}

/// Captured response.
#[derive(Debug)]
pub struct TestResponse {
    pub status: StatusCode,
    pub headers: HeaderMap,
    pub body: Value,
}

impl TestResponse {
    /// Value of the `token` cookie set by this response, if any.
    pub fn session_cookie(&self) -> Option<String> {
        self.headers
            .get_all(SET_COOKIE)
            .iter()
            .filter_map(|v| v.to_str().ok())
            .find(|v| v.starts_with("token="))
            .map(str::to_string)
    }

    /// The token carried by the session cookie.
    pub fn token(&self) -> Option<String> {
        self.session_cookie().and_then(|c| {
            c.split(';')
                .next()
                .and_then(|pair| pair.strip_prefix("token="))
                .map(str::to_string)
        })
    }

    /// The `error` message of a JSON error body.
    pub fn error(&self) -> &str {
        self.body["error"].as_str().unwrap_or_default()
    }
}

/// Test application context.
pub struct TestApp {
    pub router: Router,
    pub users: MemoryUserStore,
    pub bookings: MemoryBookingStore,
    pub today: NaiveDate,
}

impl TestApp {
    /// Build the app with the admin account already seeded.
    pub async fn new() -> Self {
        let mut config = AppConfig::default();
        config.environment = "test".to_string();
        config.auth.jwt_secret = "integration-test-secret".to_string();
        config.auth.hash_memory_kib = 1024;
        config.auth.hash_iterations = 1;

        let users = MemoryUserStore::new();
        let bookings = MemoryBookingStore::new();
        let today = NaiveDate::from_ymd_opt(2030, 6, 1).unwrap();

        let state = AppState::with_clock(
            config,
            Arc::new(users.clone()),
            Arc::new(bookings.clone()),
            Arc::new(FixedClock(today)),
        )
        .expect("Failed to build state");

        state
            .auth_service
            .seed_admin(ADMIN_EMAIL, ADMIN_PASSWORD)
            .await
            .expect("Failed to seed admin");

        Self {
            router: build_app(state),
            users,
            bookings,
            today,
        }
    }

    /// Date `days` after the pinned "today", formatted for the API.
    pub fn date(&self, days: i64) -> String {
        (self.today + chrono::Duration::days(days))
            .format("%Y-%m-%d")
            .to_string()
    }

    /// Send a request with an optional JSON body.
    pub async fn request(
        &self,
        method: &str,
        path: &str,
        body: Option<Value>,
        auth: Auth<'_>,
    ) -> TestResponse {
        let body = body.map(|b| b.to_string()).unwrap_or_default();
        self.raw_request(method, path, body, auth).await
    }

    /// Send a request with a verbatim body.
    pub async fn raw_request(
        &self,
        method: &str,
        path: &str,
        body: String,
        auth: Auth<'_>,
    ) -> TestResponse {
        let mut req = Request::builder()
            .method(method)
            .uri(path)
            .header(CONTENT_TYPE, "application/json");

        req = match auth {
            Auth::None => req,
            Auth::Cookie(token) => req.header(COOKIE, format!("token={token}")),
            Auth::Bearer(token) => req.header(AUTHORIZATION, format!("Bearer {token}")),
        };

        let req = req.body(Body::from(body)).expect("Failed to build request");

        let response = self
            .router
            .clone()
            .oneshot(req)
            .await
            .expect("Failed to send request");

        let status = response.status();
        let headers = response.headers().clone();
        let bytes = axum::body::to_bytes(response.into_body(), 1024 * 1024)
            .await
            .expect("Failed to read body");
        let body = serde_json::from_slice(&bytes).unwrap_or(Value::Null);

        TestResponse {
            status,
            headers,
            body,
        }
    }

    pub async fn register(&self, email: &str, password: &str) -> TestResponse {
        self.request(
            "POST",
            "/api/register",
            Some(json!({ "email": email, "password": password })),
            Auth::None,
        )
        .await
    }

    pub async fn login(&self, email: &str, password: &str) -> TestResponse {
        self.request(
            "POST",
            "/api/login",
            Some(json!({ "email": email, "password": password })),
            Auth::None,
        )
        .await
    }

    /// Register a guest account and return its session token.
    pub async fn guest_token(&self, email: &str) -> String {
        let registered = self.register(email, "guest-pass").await;
        assert_eq!(registered.status, StatusCode::CREATED);
        self.login(email, "guest-pass")
            .await
            .token()
            .expect("Login did not set a session cookie")
    }

    /// Session token of the seeded admin.
    pub async fn admin_token(&self) -> String {
        self.login(ADMIN_EMAIL, ADMIN_PASSWORD)
            .await
            .token()
            .expect("Admin login did not set a session cookie")
    }

    /// A valid booking body starting `offset` days from today.
    pub fn booking_body(&self, offset: i64, nights: i64, room_type: &str) -> Value {
        json!({
            "name": "Jane Guest",
            "email": "jane@example.com",
            "check_in": self.date(offset),
            "check_out": self.date(offset + nights),
            "room_type": room_type,
        })
    }

    /// Create a booking and return its id.
    pub async fn create_booking(&self, token: &str, room_type: &str) -> i64 {
        let response = self
            .request(
                "POST",
                "/api/bookings",
                Some(self.booking_body(1, 2, room_type)),
                Auth::Cookie(token),
            )
            .await;
        assert_eq!(response.status, StatusCode::CREATED);
        response.body["id"].as_i64().expect("Booking id missing")
    }
}
