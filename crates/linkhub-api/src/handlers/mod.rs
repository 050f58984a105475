//! HTTP request handlers.

pub mod attachment_url;
pub mod health;
