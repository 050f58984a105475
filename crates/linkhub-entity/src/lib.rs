//! # linkhub-entity
//!
//! Domain entity models for LinkHub. Every struct in this crate
//! represents a database table row or a domain value object. Database
//! entities additionally derive `sqlx::FromRow`.

pub mod attachment;
pub mod file;
