//! # linkhub-api
//!
//! HTTP API layer for LinkHub built on Axum.
//!
//! Provides the attachment URL endpoints, the bearer-token extractor,
//! middleware (CORS, request logging), DTOs, and error mapping.

pub mod app;
pub mod dto;
pub mod error;
pub mod extractors;
pub mod handlers;
pub mod middleware;
pub mod router;
pub mod state;

pub use app::{build_app, serve};
pub use state::AppState;
