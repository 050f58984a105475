//! Response DTOs.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use linkhub_entity::attachment::{AttachmentUrl, EXPIRES_ON_FORMAT};

/// An attachment URL as returned to clients. The password secret never leaves the server.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AttachmentUrlResponse {
    /// Link identifier.
    #[serde(rename = "AttachmentURLGUID")]
    pub attachment_url_guid: Uuid,
    /// Owning file.
    #[serde(rename = "FileGUID")]
    pub file_guid: String,
    /// Expiry in the same format clients submit.
    #[serde(rename = "ExpiresOnDate")]
    pub expires_on_date: Option<String>,
    /// Whether a password protects the link.
    #[serde(rename = "HasPassword")]
    pub has_password: bool,
    /// Anonymous access flag.
    #[serde(rename = "IsAnonymous")]
    pub is_anonymous: Option<bool>,
    /// Administrative kill-switch.
    #[serde(rename = "Inactive")]
    pub inactive: Option<bool>,
    /// Creating user.
    #[serde(rename = "CreatedBy")]
    pub created_by: Uuid,
    /// Creation time.
    #[serde(rename = "CreatedAt")]
    pub created_at: DateTime<Utc>,
    /// Last write time.
    #[serde(rename = "UpdatedAt")]
    pub updated_at: DateTime<Utc>,
}

impl From<AttachmentUrl> for AttachmentUrlResponse {
    fn from(link: AttachmentUrl) -> Self {
        Self {
            has_password: link.requires_password(),
            attachment_url_guid: link.attachment_url_guid,
            file_guid: link.file_guid,
            expires_on_date: link
                .expires_on_date
                .map(|d| d.format(EXPIRES_ON_FORMAT).to_string()),
            is_anonymous: link.is_anonymous,
            inactive: link.inactive,
            created_by: link.created_by,
            created_at: link.created_at,
            updated_at: link.updated_at,
        }
    }
}

/// `POST /get_url` response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AttachmentUrlListResponse {
    /// Links for the file, newest first.
    #[serde(rename = "AttachmentURL")]
    pub attachment_urls: Vec<AttachmentUrlResponse>,
}

/// Health check response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Overall status.
    pub status: String,
    /// Crate version.
    pub version: String,
    /// Store status: `"connected"`, `"memory"`, or `"unavailable"`.
    pub database: String,
}
