//! Attachment URL repository implementation.

use std::sync::Arc;

use async_trait::async_trait;
use sqlx::PgPool;

use linkhub_core::error::{AppError, ErrorKind};
use linkhub_core::result::AppResult;
use linkhub_core::traits::SecretHasher;
use linkhub_entity::attachment::{AttachmentUrl, UpsertAttachmentUrl, UpsertMode};

use crate::store::AttachmentUrlStore;

/// Postgres-backed store for attachment URLs.
///
/// Password secrets are run through the injected [`SecretHasher`] before
/// they reach the table.
#[derive(Debug, Clone)]
pub struct AttachmentUrlRepository {
    pool: PgPool,
    hasher: Arc<dyn SecretHasher>,
}

impl AttachmentUrlRepository {
    /// Create a new attachment URL repository.
    pub fn new(pool: PgPool, hasher: Arc<dyn SecretHasher>) -> Self {
        Self { pool, hasher }
    }

    /// Insert a new link, or rewrite it if the key already exists.
    async fn insert(
        &self,
        req: &UpsertAttachmentUrl,
        secret: Option<String>,
    ) -> AppResult<AttachmentUrl> {
        sqlx::query_as::<_, AttachmentUrl>(
            "INSERT INTO attachment_urls (file_guid, attachment_url_guid, expires_on_date, \
             password_secret, is_anonymous, inactive, created_by) \
             VALUES ($1, $2, $3, $4, $5, $6, $7) \
             ON CONFLICT (file_guid, attachment_url_guid) DO UPDATE SET \
             expires_on_date = EXCLUDED.expires_on_date, \
             password_secret = EXCLUDED.password_secret, \
             is_anonymous = EXCLUDED.is_anonymous, \
             inactive = EXCLUDED.inactive, \
             updated_at = NOW() \
             RETURNING *",
        )
        .bind(&req.file_guid)
        .bind(req.attachment_url_guid)
        .bind(req.expires_on_date)
        .bind(secret)
        .bind(req.is_anonymous)
        .bind(req.inactive)
        .bind(req.user_id)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| map_write_error(e, "Failed to create attachment URL"))
    }

    /// Rewrite an existing link in place.
    async fn update(
        &self,
        req: &UpsertAttachmentUrl,
        secret: Option<String>,
    ) -> AppResult<AttachmentUrl> {
        sqlx::query_as::<_, AttachmentUrl>(
            "UPDATE attachment_urls SET expires_on_date = $3, password_secret = $4, \
             is_anonymous = $5, inactive = $6, updated_at = NOW() \
             WHERE file_guid = $1 AND attachment_url_guid = $2 \
             RETURNING *",
        )
        .bind(&req.file_guid)
        .bind(req.attachment_url_guid)
        .bind(req.expires_on_date)
        .bind(secret)
        .bind(req.is_anonymous)
        .bind(req.inactive)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| map_write_error(e, "Failed to update attachment URL"))?
        .ok_or_else(|| AppError::not_found("Attachment URL not found"))
    }
}

#[async_trait]
impl AttachmentUrlStore for AttachmentUrlRepository {
    async fn attachment_url(&self, req: UpsertAttachmentUrl) -> AppResult<AttachmentUrl> {
        let secret = req
            .password_secret
            .as_deref()
            .map(|s| self.hasher.hash_secret(s))
            .transpose()?;

        match req.mode {
            UpsertMode::Create => self.insert(&req, secret).await,
            UpsertMode::Update => self.update(&req, secret).await,
        }
    }

    async fn find_by_file(&self, file_guid: &str) -> AppResult<Vec<AttachmentUrl>> {
        sqlx::query_as::<_, AttachmentUrl>(
            "SELECT * FROM attachment_urls WHERE file_guid = $1 ORDER BY created_at DESC",
        )
        .bind(file_guid)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to list attachment URLs", e)
        })
    }

    fn backend(&self) -> &'static str {
        "postgres"
    }

    async fn health_check(&self) -> AppResult<()> {
        sqlx::query_scalar::<_, i32>("SELECT 1")
            .fetch_one(&self.pool)
            .await
            .map(|_| ())
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Health check failed", e))
    }
}

/// Classify constraint violations so callers get a meaningful status.
fn map_write_error(err: sqlx::Error, context: &str) -> AppError {
    if let sqlx::Error::Database(db_err) = &err {
        if db_err.is_foreign_key_violation() {
            return AppError::with_source(ErrorKind::NotFound, "File not found", err);
        }
        if db_err.is_unique_violation() {
            return AppError::with_source(
                ErrorKind::Conflict,
                "Attachment URL identifier already in use",
                err,
            );
        }
    }
    AppError::with_source(ErrorKind::Database, context, err)
}
