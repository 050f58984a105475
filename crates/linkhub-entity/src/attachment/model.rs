//! Attachment URL entity model.

use chrono::{DateTime, NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// A shareable access link attached to a stored file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct AttachmentUrl {
    /// Unique link identifier.
    pub attachment_url_guid: Uuid,
    /// The owning file.
    pub file_guid: String,
    /// When the link stops resolving (`None` = never).
    pub expires_on_date: Option<NaiveDateTime>,
    /// Credential required to dereference the link.
    #[serde(skip_serializing)]
    pub password_secret: Option<String>,
    /// Whether access bypasses per-user identity checks.
    pub is_anonymous: Option<bool>,
    /// Administrative kill-switch, independent of expiry.
    pub inactive: Option<bool>,
    /// User who created the link.
    pub created_by: Uuid,
    /// When the link was created.
    pub created_at: DateTime<Utc>,
    /// When the link was last written.
    pub updated_at: DateTime<Utc>,
}

impl AttachmentUrl {
    /// Check if the link would currently resolve.
    pub fn is_valid(&self, now: NaiveDateTime) -> bool {
        if self.inactive.unwrap_or(false) {
            return false;
        }
        if let Some(expires) = self.expires_on_date
            && expires <= now
        {
            return false;
        }
        true
    }

    /// Whether a password must be supplied to use the link.
    pub fn requires_password(&self) -> bool {
        self.password_secret.is_some()
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::*;

    fn at(y: i32, m: u32, d: u32, h: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, m, d)
            .unwrap()
            .and_hms_opt(h, 0, 0)
            .unwrap()
    }

    fn link() -> AttachmentUrl {
        AttachmentUrl {
            attachment_url_guid: Uuid::new_v4(),
            file_guid: "file-1".to_string(),
            expires_on_date: None,
            password_secret: None,
            is_anonymous: None,
            inactive: None,
            created_by: Uuid::new_v4(),
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn test_link_without_constraints_is_valid() {
        assert!(link().is_valid(at(2024, 1, 1, 10)));
    }

    #[test]
    fn test_inactive_link_is_invalid() {
        let mut l = link();
        l.inactive = Some(true);
        assert!(!l.is_valid(at(2024, 1, 1, 10)));

        l.inactive = Some(false);
        assert!(l.is_valid(at(2024, 1, 1, 10)));
    }

    #[test]
    fn test_expiry_is_exclusive() {
        let mut l = link();
        l.expires_on_date = Some(at(2024, 1, 1, 10));
        assert!(l.is_valid(at(2024, 1, 1, 9)));
        assert!(!l.is_valid(at(2024, 1, 1, 10)));
        assert!(!l.is_valid(at(2024, 1, 2, 0)));
    }

    #[test]
    fn test_password_secret_is_never_serialized() {
        let mut l = link();
        l.password_secret = Some("secret123".to_string());
        assert!(l.requires_password());

        let json = serde_json::to_value(&l).unwrap();
        assert!(json.get("password_secret").is_none());
        assert_eq!(json["file_guid"], "file-1");
    }
}
