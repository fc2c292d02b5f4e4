//! Shared application state passed to all handlers via Axum's `State` extractor.

use std::sync::Arc;
use std::time::Instant;

use dormhotel_auth::guard::AccessGuard;
use dormhotel_auth::jwt::{JwtDecoder, JwtEncoder};
use dormhotel_auth::password::PasswordHasher;
use dormhotel_core::config::AppConfig;
use dormhotel_core::result::AppResult;
use dormhotel_database::store::{BookingStore, UserStore};
use dormhotel_service::account::AuthService;
use dormhotel_service::admin::AdminService;
use dormhotel_service::booking::{BookingService, Clock, SystemClock};

/// Application state, built once at startup and read-only afterwards.
#[derive(Clone)]
pub struct AppState {
    /// Application configuration.
    pub config: Arc<AppConfig>,
    /// Process start, for uptime reporting.
    pub started_at: Instant,
    /// Per-request token and role checks.
    pub guard: Arc<AccessGuard>,
    /// Registration, login, admin seeding.
    pub auth_service: Arc<AuthService>,
    /// Booking rules.
    pub booking_service: Arc<BookingService>,
    /// Admin reporting.
    pub admin_service: Arc<AdminService>,
}

impl std::fmt::Debug for AppState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppState")
            .field("environment", &self.config.environment)
            .finish_non_exhaustive()
    }
}

impl AppState {
    /// Wire services over the given stores using the system clock.
    pub fn new(
        config: AppConfig,
        users: Arc<dyn UserStore>,
        bookings: Arc<dyn BookingStore>,
    ) -> AppResult<Self> {
        Self::with_clock(config, users, bookings, Arc::new(SystemClock))
    }

    /// Wire services over the given stores and clock.
    pub fn with_clock(
        config: AppConfig,
        users: Arc<dyn UserStore>,
        bookings: Arc<dyn BookingStore>,
        clock: Arc<dyn Clock>,
    ) -> AppResult<Self> {
        let hasher = Arc::new(PasswordHasher::new(&config.auth)?);
        let encoder = Arc::new(JwtEncoder::new(&config.auth));
        let guard = Arc::new(AccessGuard::new(
            JwtDecoder::new(&config.auth),
            Arc::clone(&users),
        ));

        let auth_service = Arc::new(AuthService::new(Arc::clone(&users), hasher, encoder));
        let booking_service = Arc::new(BookingService::new(Arc::clone(&bookings), clock));
        let admin_service = Arc::new(AdminService::new(users, bookings));

        Ok(Self {
            config: Arc::new(config),
            started_at: Instant::now(),
            guard,
            auth_service,
            booking_service,
            admin_service,
        })
    }
}
