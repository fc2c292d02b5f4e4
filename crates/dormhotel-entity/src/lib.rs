//! # dormhotel-entity
//!
//! Domain entity models for DormHotel. Database entities derive
//! `sqlx::FromRow`; enums map onto PostgreSQL enum types.

pub mod booking;
pub mod user;
