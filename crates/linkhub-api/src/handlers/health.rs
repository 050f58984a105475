//! Health check handler.

use axum::Json;
use axum::extract::State;

use linkhub_core::error::AppError;

use crate::dto::response::HealthResponse;
use crate::error::ApiResult;
use crate::state::AppState;

/// GET /health
pub async fn health(State(state): State<AppState>) -> ApiResult<Json<HealthResponse>> {
    state.store.health_check().await.map_err(|e| {
        tracing::warn!(error = %e, backend = state.store.backend(), "Store health check failed");
        AppError::service_unavailable("Database unavailable")
    })?;

    let database = match state.store.backend() {
        "memory" => "memory",
        _ => "connected",
    };

    Ok(Json(HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        database: database.to_string(),
    }))
}
