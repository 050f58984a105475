//! Stored file entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// A previously uploaded file, addressed by its opaque GUID.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct StoredFile {
    /// Opaque file identifier supplied by the upload pipeline.
    pub file_guid: String,
    /// Original file name.
    pub file_name: String,
    /// Size in bytes.
    pub file_size: i64,
    /// Uploading user.
    pub created_by: Uuid,
    /// Upload time.
    pub created_at: DateTime<Utc>,
}
