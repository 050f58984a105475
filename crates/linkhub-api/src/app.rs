//! Application builder: wires router, middleware, and state into an Axum app.

use axum::Router;
use axum::middleware as axum_middleware;
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;

use linkhub_core::error::AppError;

use crate::middleware::cors::build_cors_layer;
use crate::middleware::logging::request_logging;
use crate::router::build_router;
use crate::state::AppState;

/// Builds the complete Axum application with all routes and middleware.
pub fn build_app(state: AppState) -> Router {
    let cors = build_cors_layer(&state.config.server.cors);

    build_router(state)
        .layer(axum_middleware::from_fn(request_logging))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
}

/// Binds the configured address and serves until Ctrl+C.
pub async fn serve(state: AppState) -> Result<(), AppError> {
    let addr = format!("{}:{}", state.config.server.host, state.config.server.port);
    let listener = TcpListener::bind(&addr)
        .await
        .map_err(|e| AppError::internal(format!("Failed to bind {}: {}", addr, e)))?;

    tracing::info!(%addr, backend = state.store.backend(), "LinkHub server listening");

    axum::serve(listener, build_app(state))
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| AppError::internal(format!("Server error: {}", e)))?;

    tracing::info!("LinkHub server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "Failed to install Ctrl+C handler");
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received");
}
