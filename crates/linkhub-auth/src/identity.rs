//! Resolution of the acting user from request credentials.

use async_trait::async_trait;
use http::HeaderMap;
use http::header::AUTHORIZATION;
use uuid::Uuid;

use linkhub_core::error::AppError;
use linkhub_core::result::AppResult;

use crate::jwt::JwtDecoder;

/// The authenticated user on whose behalf a request runs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Identity {
    /// User ID.
    pub user_id: Uuid,
    /// Username.
    pub username: String,
}

/// Turns request credentials into an [`Identity`], or fails the request.
#[async_trait]
pub trait IdentityResolver: Send + Sync + std::fmt::Debug + 'static {
    /// Resolve the identity carried by the request headers.
    async fn resolve(&self, headers: &HeaderMap) -> AppResult<Identity>;
}

/// Resolves identities from HS256-signed `Authorization: Bearer` tokens.
#[derive(Debug, Clone)]
pub struct JwtIdentityResolver {
    decoder: JwtDecoder,
}

impl JwtIdentityResolver {
    /// Creates a resolver around a configured decoder.
    pub fn new(decoder: JwtDecoder) -> Self {
        Self { decoder }
    }
}

#[async_trait]
impl IdentityResolver for JwtIdentityResolver {
    async fn resolve(&self, headers: &HeaderMap) -> AppResult<Identity> {
        let auth_header = headers
            .get(AUTHORIZATION)
            .and_then(|v| v.to_str().ok())
            .ok_or_else(|| AppError::authentication("Missing Authorization header"))?;

        let token = auth_header
            .strip_prefix("Bearer ")
            .ok_or_else(|| AppError::authentication("Invalid Authorization header format"))?;

        let claims = self.decoder.decode_access_token(token.trim())?;
        tracing::debug!(user_id = %claims.sub, "Resolved bearer identity");
        Ok(Identity {
            user_id: claims.user_id(),
            username: claims.username,
        })
    }
}
