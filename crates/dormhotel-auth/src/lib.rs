//! # dormhotel-auth
//!
//! Credential and session model for DormHotel.
//!
//! ## Modules
//!
//! - `password`: Argon2id password hashing and verification
//! - `jwt`: session token issuance and verification
//! - `guard`: per-request token extraction and role enforcement

pub mod guard;
pub mod jwt;
pub mod password;

pub use guard::{AccessGuard, extract_token};
pub use jwt::{Claims, JwtDecoder, JwtEncoder, TokenError};
pub use password::PasswordHasher;
