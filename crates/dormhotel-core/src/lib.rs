//! # dormhotel-core
//!
//! Core crate for the DormHotel booking service. Contains the configuration
//! schemas and the unified error system shared by every other crate.
//!
//! This crate has **no** internal dependencies on other DormHotel crates.

pub mod config;
pub mod error;
pub mod result;

pub use error::AppError;
pub use result::AppResult;
