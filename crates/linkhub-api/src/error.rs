//! Maps domain `AppError` to HTTP responses.
//!
//! Handlers return [`ApiError`]; `?` converts any `AppError` into it.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::{Deserialize, Serialize};

use linkhub_core::error::{AppError, ErrorKind};

/// Standard API error response body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiErrorResponse {
    /// Machine-readable error code.
    pub error: String,
    /// Human-readable message.
    pub message: String,
}

/// HTTP-facing wrapper around [`AppError`].
#[derive(Debug)]
pub struct ApiError(pub AppError);

impl From<AppError> for ApiError {
    fn from(err: AppError) -> Self {
        Self(err)
    }
}

/// Result type returned by handlers and extractors.
pub type ApiResult<T> = Result<T, ApiError>;

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let Self(err) = self;

        // Validation failures go back as the bare message; clients display it verbatim.
        if err.kind == ErrorKind::Validation {
            return (StatusCode::BAD_REQUEST, err.message).into_response();
        }

        let (status, error_code) = match &err.kind {
            ErrorKind::Authentication => (StatusCode::UNAUTHORIZED, "UNAUTHORIZED"),
            ErrorKind::Authorization => (StatusCode::FORBIDDEN, "FORBIDDEN"),
            ErrorKind::NotFound => (StatusCode::NOT_FOUND, "NOT_FOUND"),
            ErrorKind::Conflict => (StatusCode::CONFLICT, "CONFLICT"),
            ErrorKind::ServiceUnavailable => {
                (StatusCode::SERVICE_UNAVAILABLE, "SERVICE_UNAVAILABLE")
            }
            _ => {
                tracing::error!(kind = %err.kind, error = %err.message, "Internal server error");
                (StatusCode::INTERNAL_SERVER_ERROR, "INTERNAL_ERROR")
            }
        };

        let body = ApiErrorResponse {
            error: error_code.to_string(),
            message: err.message,
        };

        (status, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use axum::body::to_bytes;
    use axum::http::header::CONTENT_TYPE;

    use super::*;

    async fn render(err: AppError) -> (StatusCode, String, String) {
        let response = ApiError::from(err).into_response();
        let status = response.status();
        let content_type = response
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .unwrap_or_default()
            .to_string();
        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, content_type, String::from_utf8(body.to_vec()).unwrap())
    }

    #[tokio::test]
    async fn test_validation_is_plain_text_400() {
        let (status, content_type, body) = render(AppError::validation("bad date")).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(content_type.starts_with("text/plain"));
        assert_eq!(body, "bad date");
    }

    #[tokio::test]
    async fn test_not_found_is_json_404() {
        let (status, content_type, body) = render(AppError::not_found("File not found")).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert!(content_type.starts_with("application/json"));
        let parsed: ApiErrorResponse = serde_json::from_str(&body).unwrap();
        assert_eq!(parsed.error, "NOT_FOUND");
        assert_eq!(parsed.message, "File not found");
    }

    #[tokio::test]
    async fn test_database_error_is_500() {
        let (status, _, _) = render(AppError::database("connection reset")).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[tokio::test]
    async fn test_authentication_is_401() {
        let (status, _, _) = render(AppError::authentication("Token has expired")).await;
        assert_eq!(status, StatusCode::UNAUTHORIZED);
    }
}
