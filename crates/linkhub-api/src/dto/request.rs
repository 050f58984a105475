//! Request DTOs with validation.

use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use linkhub_service::{CreateUrlInput, UpdateUrlInput};

/// `POST /create_url` body.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateUrlRequest {
    /// Owning file.
    #[serde(rename = "FileGUID")]
    #[validate(length(min = 1, message = "FileGUID is required"))]
    pub file_guid: String,
    /// Expiry, `YYYY-MM-DD HH:MM:SS`.
    #[serde(rename = "ExpiresOnDate", default)]
    pub expires_on_date: Option<String>,
    /// Cleartext password, despite the wire name.
    #[serde(rename = "PasswordHash", default)]
    pub password_hash: Option<String>,
    /// Anonymous access flag.
    #[serde(rename = "IsAnonymous", default)]
    pub is_anonymous: Option<bool>,
    /// Administrative kill-switch.
    #[serde(rename = "Inactive", default)]
    pub inactive: Option<bool>,
}

impl From<CreateUrlRequest> for CreateUrlInput {
    fn from(req: CreateUrlRequest) -> Self {
        Self {
            file_guid: req.file_guid,
            expires_on_date: req.expires_on_date,
            password: req.password_hash,
            is_anonymous: req.is_anonymous,
            inactive: req.inactive,
        }
    }
}

/// `PUT /update_url` body.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct UpdateUrlRequest {
    /// Owning file.
    #[serde(rename = "FileGUID")]
    #[validate(length(min = 1, message = "FileGUID is required"))]
    pub file_guid: String,
    /// The link being rewritten.
    #[serde(rename = "AttachmentURLGUID")]
    pub attachment_url_guid: Uuid,
    /// Expiry, `YYYY-MM-DD HH:MM:SS`.
    #[serde(rename = "ExpiresOnDate", default)]
    pub expires_on_date: Option<String>,
    /// Cleartext password, despite the wire name.
    #[serde(rename = "PasswordHash", default)]
    pub password_hash: Option<String>,
    /// Anonymous access flag.
    #[serde(rename = "IsAnonymous", default)]
    pub is_anonymous: Option<bool>,
    /// Administrative kill-switch.
    #[serde(rename = "Inactive", default)]
    pub inactive: Option<bool>,
}

impl From<UpdateUrlRequest> for UpdateUrlInput {
    fn from(req: UpdateUrlRequest) -> Self {
        Self {
            file_guid: req.file_guid,
            attachment_url_guid: req.attachment_url_guid,
            expires_on_date: req.expires_on_date,
            password: req.password_hash,
            is_anonymous: req.is_anonymous,
            inactive: req.inactive,
        }
    }
}

/// `POST /get_url` body.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct GetUrlRequest {
    /// File whose links are listed.
    #[serde(rename = "FileGUID")]
    #[validate(length(min = 1, message = "FileGUID is required"))]
    pub file_guid: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_request_reads_wire_names() {
        let req: CreateUrlRequest = serde_json::from_value(serde_json::json!({
            "FileGUID": "f-1",
            "ExpiresOnDate": "2024-01-01 10:00:00",
            "PasswordHash": "secret123",
            "IsAnonymous": false,
            "Inactive": true
        }))
        .unwrap();

        let input = CreateUrlInput::from(req);
        assert_eq!(input.file_guid, "f-1");
        assert_eq!(input.expires_on_date.as_deref(), Some("2024-01-01 10:00:00"));
        assert_eq!(input.password.as_deref(), Some("secret123"));
        assert_eq!(input.is_anonymous, Some(false));
        assert_eq!(input.inactive, Some(true));
    }

    #[test]
    fn test_create_request_optional_fields_may_be_null_or_missing() {
        let req: CreateUrlRequest = serde_json::from_value(serde_json::json!({
            "FileGUID": "f-1",
            "PasswordHash": null
        }))
        .unwrap();
        assert!(req.validate().is_ok());
        assert_eq!(req.expires_on_date, None);
        assert_eq!(req.password_hash, None);
        assert_eq!(req.is_anonymous, None);
    }

    #[test]
    fn test_empty_file_guid_fails_validation() {
        let req: CreateUrlRequest =
            serde_json::from_value(serde_json::json!({ "FileGUID": "" })).unwrap();
        assert!(req.validate().is_err());
    }
}
