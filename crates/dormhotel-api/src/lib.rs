//! # dormhotel-api
//!
//! HTTP API layer for DormHotel built on Axum.
//!
//! Provides the REST endpoints, cookie/bearer authentication extractors,
//! request logging, DTOs, error mapping, and the server lifecycle.

pub mod app;
pub mod dto;
pub mod error;
pub mod extractors;
pub mod handlers;
pub mod middleware;
pub mod router;
pub mod state;

pub use app::{build_app, run_server};
pub use error::{ApiError, ApiResult};
pub use state::AppState;
