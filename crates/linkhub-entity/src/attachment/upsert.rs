//! Write request handed to attachment URL stores.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Wire format accepted for `ExpiresOnDate`.
pub const EXPIRES_ON_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// How a store should treat an upsert.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UpsertMode {
    /// Insert a new link; the link id was minted by the caller.
    Create,
    /// Rewrite an existing link matched by file and link id.
    Update,
}

impl std::fmt::Display for UpsertMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Create => write!(f, "create"),
            Self::Update => write!(f, "update"),
        }
    }
}

/// Fully validated and normalized data for one attachment URL write.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpsertAttachmentUrl {
    /// Owning file.
    pub file_guid: String,
    /// Link identifier.
    pub attachment_url_guid: Uuid,
    /// Parsed expiry (`None` = never).
    pub expires_on_date: Option<NaiveDateTime>,
    /// Password secret, never an empty string.
    pub password_secret: Option<String>,
    /// Anonymous access flag.
    pub is_anonymous: Option<bool>,
    /// Acting user.
    pub user_id: Uuid,
    /// Administrative kill-switch.
    pub inactive: Option<bool>,
    /// Create or update semantics.
    pub mode: UpsertMode,
}
