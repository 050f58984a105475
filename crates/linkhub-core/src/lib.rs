//! # linkhub-core
//!
//! Core crate for LinkHub. Contains the configuration schema and loader,
//! the collaborator traits implemented elsewhere,
//! and the unified error system shared by every other crate.
//!
//! This crate has **no** internal dependencies on other LinkHub crates.

pub mod config;
pub mod error;
pub mod result;
pub mod traits;

pub use error::AppError;
pub use result::AppResult;
