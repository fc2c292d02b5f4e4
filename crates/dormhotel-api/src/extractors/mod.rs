//! Custom Axum extractors.

pub mod auth;
pub mod json;

pub use auth::{AdminOnly, AnyRole, Authenticated, RoleRequirement, UserOnly};
pub use json::JsonBody;
