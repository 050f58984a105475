//! Raw caller input and its normalization.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use linkhub_core::error::AppError;
use linkhub_core::result::AppResult;
use linkhub_entity::attachment::EXPIRES_ON_FORMAT;

/// Message returned when `ExpiresOnDate` does not match [`EXPIRES_ON_FORMAT`].
pub const INVALID_DATE_MESSAGE: &str =
    "Invalid date format. Expected format: YYYY-MM-DD HH:MM:SS";

/// Input for minting a new attachment URL.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CreateUrlInput {
    /// Owning file.
    pub file_guid: String,
    /// Expiry as `YYYY-MM-DD HH:MM:SS`; empty means none.
    pub expires_on_date: Option<String>,
    /// Cleartext password; empty means none.
    pub password: Option<String>,
    /// Anonymous access flag.
    pub is_anonymous: Option<bool>,
    /// Administrative kill-switch.
    pub inactive: Option<bool>,
}

/// Input for rewriting an existing attachment URL.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateUrlInput {
    /// Owning file.
    pub file_guid: String,
    /// The link being rewritten.
    pub attachment_url_guid: Uuid,
    /// Expiry as `YYYY-MM-DD HH:MM:SS`; empty means none.
    pub expires_on_date: Option<String>,
    /// Cleartext password; empty means none.
    pub password: Option<String>,
    /// Anonymous access flag.
    pub is_anonymous: Option<bool>,
    /// Administrative kill-switch.
    pub inactive: Option<bool>,
}

/// Rejects a blank file GUID.
pub(crate) fn require_file_guid(file_guid: &str) -> AppResult<()> {
    if file_guid.trim().is_empty() {
        return Err(AppError::validation("FileGUID is required"));
    }
    Ok(())
}

/// Parses an optional expiry in the fixed wire format.
///
/// chrono skips leading whitespace and takes a signed year, so the
/// four-digit year and its dash are checked up front.
pub(crate) fn parse_expires_on(raw: Option<&str>) -> AppResult<Option<NaiveDateTime>> {
    match raw {
        None | Some("") => Ok(None),
        Some(s) if !starts_with_year(s) => Err(AppError::validation(INVALID_DATE_MESSAGE)),
        Some(s) => NaiveDateTime::parse_from_str(s, EXPIRES_ON_FORMAT)
            .map(Some)
            .map_err(|_| AppError::validation(INVALID_DATE_MESSAGE)),
    }
}

fn starts_with_year(s: &str) -> bool {
    matches!(
        s.as_bytes(),
        [a, b, c, d, b'-', ..] if [a, b, c, d].iter().all(|x| x.is_ascii_digit())
    )
}

/// An empty password means "no password".
pub(crate) fn normalize_password(raw: Option<String>) -> Option<String> {
    raw.filter(|p| !p.is_empty())
}
