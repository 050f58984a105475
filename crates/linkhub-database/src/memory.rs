//! In-process attachment URL store.
//!
//! Used for local development and tests. Records live in a single map
//! behind a `tokio` write lock, so each upsert is atomic with respect to
//! concurrent callers. Password secrets are kept exactly as received.

use std::collections::{HashMap, HashSet};

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;
use uuid::Uuid;

use linkhub_core::error::AppError;
use linkhub_core::result::AppResult;
use linkhub_entity::attachment::{AttachmentUrl, UpsertAttachmentUrl, UpsertMode};
use linkhub_entity::file::StoredFile;

use crate::store::AttachmentUrlStore;

/// Attachment URLs held in memory, keyed by `(file_guid, attachment_url_guid)`.
#[derive(Debug, Default)]
pub struct MemoryAttachmentUrlStore {
    links: RwLock<HashMap<(String, Uuid), AttachmentUrl>>,
    /// Known files. `None` accepts any file GUID.
    files: Option<RwLock<HashSet<String>>>,
}

impl MemoryAttachmentUrlStore {
    /// Create a store that accepts links for any file GUID.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store that only accepts links for the given files.
    pub fn with_files(files: impl IntoIterator<Item = StoredFile>) -> Self {
        let known = files.into_iter().map(|f| f.file_guid).collect();
        Self {
            links: RwLock::default(),
            files: Some(RwLock::new(known)),
        }
    }

    /// Register another file. No effect on a store built with [`new`](Self::new).
    pub async fn register_file(&self, file: StoredFile) {
        if let Some(files) = &self.files {
            files.write().await.insert(file.file_guid);
        }
    }

    /// Number of stored links across all files.
    pub async fn len(&self) -> usize {
        self.links.read().await.len()
    }

    /// Whether no links are stored.
    pub async fn is_empty(&self) -> bool {
        self.links.read().await.is_empty()
    }

    async fn ensure_file(&self, file_guid: &str) -> AppResult<()> {
        if let Some(files) = &self.files
            && !files.read().await.contains(file_guid)
        {
            return Err(AppError::not_found("File not found"));
        }
        Ok(())
    }
}

#[async_trait]
impl AttachmentUrlStore for MemoryAttachmentUrlStore {
    async fn attachment_url(&self, req: UpsertAttachmentUrl) -> AppResult<AttachmentUrl> {
        self.ensure_file(&req.file_guid).await?;

        let key = (req.file_guid.clone(), req.attachment_url_guid);
        let now = Utc::now();
        let mut links = self.links.write().await;

        let record = match (req.mode, links.get(&key)) {
            (UpsertMode::Update, None) => {
                return Err(AppError::not_found("Attachment URL not found"));
            }
            (_, existing) => AttachmentUrl {
                attachment_url_guid: req.attachment_url_guid,
                file_guid: req.file_guid,
                expires_on_date: req.expires_on_date,
                password_secret: req.password_secret,
                is_anonymous: req.is_anonymous,
                inactive: req.inactive,
                created_by: existing.map_or(req.user_id, |e| e.created_by),
                created_at: existing.map_or(now, |e| e.created_at),
                updated_at: now,
            },
        };

        links.insert(key, record.clone());
        Ok(record)
    }

    async fn find_by_file(&self, file_guid: &str) -> AppResult<Vec<AttachmentUrl>> {
        let mut found: Vec<AttachmentUrl> = self
            .links
            .read()
            .await
            .values()
            .filter(|l| l.file_guid == file_guid)
            .cloned()
            .collect();
        found.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(found)
    }

    fn backend(&self) -> &'static str {
        "memory"
    }
}
