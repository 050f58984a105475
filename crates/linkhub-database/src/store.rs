//! Storage contract for attachment URLs.

use async_trait::async_trait;

use linkhub_core::result::AppResult;
use linkhub_entity::attachment::{AttachmentUrl, UpsertAttachmentUrl};

/// Durable home of attachment URL records.
///
/// Implementations own the atomicity of each write and translate their
/// backend failures (unknown file, constraint violations) into `AppError`.
#[async_trait]
pub trait AttachmentUrlStore: Send + Sync + std::fmt::Debug + 'static {
    /// Create or update one link according to `req.mode` and return the stored record.
    async fn attachment_url(&self, req: UpsertAttachmentUrl) -> AppResult<AttachmentUrl>;

    /// All links attached to a file, newest first.
    async fn find_by_file(&self, file_guid: &str) -> AppResult<Vec<AttachmentUrl>>;

    /// Short backend label for health reporting.
    fn backend(&self) -> &'static str;

    /// Verify the backend is reachable.
    async fn health_check(&self) -> AppResult<()> {
        Ok(())
    }
}
