//! Route definitions for the LinkHub HTTP API.

use axum::Router;
use axum::routing::{get, post, put};

use crate::handlers;
use crate::state::AppState;

/// Build the router with all routes, threading `AppState` through them.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .merge(attachment_url_routes())
        .merge(health_routes())
        .with_state(state)
}

/// Attachment URL endpoints
fn attachment_url_routes() -> Router<AppState> {
    Router::new()
        .route("/create_url", post(handlers::attachment_url::create_url))
        .route("/update_url", put(handlers::attachment_url::update_url))
        .route("/get_url", post(handlers::attachment_url::get_url))
}

/// Liveness
fn health_routes() -> Router<AppState> {
    Router::new().route("/health", get(handlers::health::health))
}
