//! Attachment URL handlers.

use axum::Json;
use axum::extract::State;
use validator::Validate;

use linkhub_core::error::AppError;

use crate::dto::request::{CreateUrlRequest, GetUrlRequest, UpdateUrlRequest};
use crate::dto::response::{AttachmentUrlListResponse, AttachmentUrlResponse};
use crate::error::ApiResult;
use crate::extractors::AuthUser;
use crate::state::AppState;

/// POST /create_url
pub async fn create_url(
    State(state): State<AppState>,
    auth: AuthUser,
    Json(req): Json<CreateUrlRequest>,
) -> ApiResult<Json<AttachmentUrlResponse>> {
    validate(&req)?;

    let link = state
        .attachment_url_service
        .create_url(&auth, req.into())
        .await?;

    Ok(Json(link.into()))
}

/// PUT /update_url
pub async fn update_url(
    State(state): State<AppState>,
    auth: AuthUser,
    Json(req): Json<UpdateUrlRequest>,
) -> ApiResult<Json<AttachmentUrlResponse>> {
    validate(&req)?;

    let link = state
        .attachment_url_service
        .update_url(&auth, req.into())
        .await?;

    Ok(Json(link.into()))
}

/// POST /get_url
pub async fn get_url(
    State(state): State<AppState>,
    auth: AuthUser,
    Json(req): Json<GetUrlRequest>,
) -> ApiResult<Json<AttachmentUrlListResponse>> {
    validate(&req)?;

    let links = state
        .attachment_url_service
        .list_urls(&auth, &req.file_guid)
        .await?;

    Ok(Json(AttachmentUrlListResponse {
        attachment_urls: links.into_iter().map(Into::into).collect(),
    }))
}

/// Runs derive-based validation, surfacing the first field message.
fn validate<T: Validate>(req: &T) -> Result<(), AppError> {
    req.validate().map_err(|errors| {
        let message = errors
            .field_errors()
            .values()
            .flat_map(|errs| errs.iter())
            .find_map(|e| e.message.as_ref().map(|m| m.to_string()))
            .unwrap_or_else(|| errors.to_string());
        AppError::validation(message)
    })
}
