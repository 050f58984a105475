//! Attachment URL service.

use std::sync::Arc;

use tracing::{debug, info};
use uuid::Uuid;

use linkhub_core::error::AppError;
use linkhub_database::store::AttachmentUrlStore;
use linkhub_entity::attachment::{AttachmentUrl, UpsertAttachmentUrl, UpsertMode};

use super::input::{
    CreateUrlInput, UpdateUrlInput, normalize_password, parse_expires_on, require_file_guid,
};
use crate::context::RequestContext;

/// Issues, rewrites, and lists attachment URLs for stored files.
#[derive(Debug, Clone)]
pub struct AttachmentUrlService {
    /// Where links are persisted.
    store: Arc<dyn AttachmentUrlStore>,
}

impl AttachmentUrlService {
    /// Creates a new attachment URL service.
    pub fn new(store: Arc<dyn AttachmentUrlStore>) -> Self {
        Self { store }
    }

    /// Mints a new link for a file.
    ///
    /// Input is validated before the store is touched; the store's result,
    /// success or error, is returned as-is.
    pub async fn create_url(
        &self,
        ctx: &RequestContext,
        input: CreateUrlInput,
    ) -> Result<AttachmentUrl, AppError> {
        require_file_guid(&input.file_guid)?;
        let expires_on_date = parse_expires_on(input.expires_on_date.as_deref())?;
        let password_secret = normalize_password(input.password);

        let req = UpsertAttachmentUrl {
            file_guid: input.file_guid,
            attachment_url_guid: Uuid::new_v4(),
            expires_on_date,
            password_secret,
            is_anonymous: input.is_anonymous,
            user_id: ctx.user_id,
            inactive: input.inactive,
            mode: UpsertMode::Create,
        };

        let link = self.store.attachment_url(req).await?;

        info!(
            user_id = %ctx.user_id,
            username = %ctx.username,
            ip_address = %ctx.ip_address,
            user_agent = ctx.user_agent.as_deref().unwrap_or("-"),
            file_guid = %link.file_guid,
            attachment_url_guid = %link.attachment_url_guid,
            mode = %UpsertMode::Create,
            "Attachment URL created"
        );

        Ok(link)
    }

    /// Rewrites the constraints of an existing link.
    pub async fn update_url(
        &self,
        ctx: &RequestContext,
        input: UpdateUrlInput,
    ) -> Result<AttachmentUrl, AppError> {
        require_file_guid(&input.file_guid)?;
        let expires_on_date = parse_expires_on(input.expires_on_date.as_deref())?;
        let password_secret = normalize_password(input.password);

        let req = UpsertAttachmentUrl {
            file_guid: input.file_guid,
            attachment_url_guid: input.attachment_url_guid,
            expires_on_date,
            password_secret,
            is_anonymous: input.is_anonymous,
            user_id: ctx.user_id,
            inactive: input.inactive,
            mode: UpsertMode::Update,
        };

        let link = self.store.attachment_url(req).await?;

        info!(
            user_id = %ctx.user_id,
            username = %ctx.username,
            ip_address = %ctx.ip_address,
            user_agent = ctx.user_agent.as_deref().unwrap_or("-"),
            file_guid = %link.file_guid,
            attachment_url_guid = %link.attachment_url_guid,
            mode = %UpsertMode::Update,
            "Attachment URL updated"
        );

        Ok(link)
    }

    /// Lists the links attached to a file, newest first.
    pub async fn list_urls(
        &self,
        ctx: &RequestContext,
        file_guid: &str,
    ) -> Result<Vec<AttachmentUrl>, AppError> {
        require_file_guid(file_guid)?;
        let links = self.store.find_by_file(file_guid).await?;

        debug!(
            user_id = %ctx.user_id,
            file_guid,
            count = links.len(),
            "Attachment URLs listed"
        );

        Ok(links)
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;
    use std::sync::Mutex;

    use async_trait::async_trait;
    use chrono::{NaiveDate, Utc};

    use linkhub_core::error::ErrorKind;
    use linkhub_core::result::AppResult;

    use super::*;
    use crate::attachment::input::INVALID_DATE_MESSAGE;

    /// Records every upsert and echoes it back as a stored record.
    #[derive(Debug, Default)]
    struct RecordingStore {
        calls: Mutex<Vec<UpsertAttachmentUrl>>,
        fail_with: Option<AppError>,
    }

    impl RecordingStore {
        fn failing(err: AppError) -> Self {
            Self {
                calls: Mutex::default(),
                fail_with: Some(err),
            }
        }

        fn calls(&self) -> Vec<UpsertAttachmentUrl> {
            self.calls.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl AttachmentUrlStore for RecordingStore {
        async fn attachment_url(&self, req: UpsertAttachmentUrl) -> AppResult<AttachmentUrl> {
            self.calls.lock().unwrap().push(req.clone());
            if let Some(err) = &self.fail_with {
                return Err(err.clone());
            }
            Ok(AttachmentUrl {
                attachment_url_guid: req.attachment_url_guid,
                file_guid: req.file_guid,
                expires_on_date: req.expires_on_date,
                password_secret: req.password_secret,
                is_anonymous: req.is_anonymous,
                inactive: req.inactive,
                created_by: req.user_id,
                created_at: Utc::now(),
                updated_at: Utc::now(),
            })
        }

        async fn find_by_file(&self, _file_guid: &str) -> AppResult<Vec<AttachmentUrl>> {
            Ok(Vec::new())
        }

        fn backend(&self) -> &'static str {
            "recording"
        }
    }

    fn ctx() -> RequestContext {
        RequestContext::new(
            Uuid::new_v4(),
            "alice".to_string(),
            "127.0.0.1".to_string(),
            None,
        )
    }

    fn input(file_guid: &str) -> CreateUrlInput {
        CreateUrlInput {
            file_guid: file_guid.to_string(),
            ..CreateUrlInput::default()
        }
    }

    fn service() -> (AttachmentUrlService, Arc<RecordingStore>) {
        let store = Arc::new(RecordingStore::default());
        (AttachmentUrlService::new(store.clone()), store)
    }

    #[tokio::test]
    async fn test_create_with_defaults_mints_fresh_ids() {
        let (service, store) = service();
        let ctx = ctx();

        let mut seen = HashSet::new();
        for _ in 0..5 {
            let link = service.create_url(&ctx, input("file-1")).await.unwrap();
            assert!(!link.attachment_url_guid.is_nil());
            assert!(seen.insert(link.attachment_url_guid));
        }

        let calls = store.calls();
        assert_eq!(calls.len(), 5);
        let first = &calls[0];
        assert_eq!(first.file_guid, "file-1");
        assert_eq!(first.mode, UpsertMode::Create);
        assert_eq!(first.user_id, ctx.user_id);
        assert_eq!(first.expires_on_date, None);
        assert_eq!(first.password_secret, None);
        assert_eq!(first.is_anonymous, None);
        assert_eq!(first.inactive, None);
    }

    #[tokio::test]
    async fn test_create_forwards_parsed_expiry() {
        let (service, store) = service();
        let mut req = input("file-1");
        req.expires_on_date = Some("2024-01-01 10:00:00".to_string());

        service.create_url(&ctx(), req).await.unwrap();

        let expected = NaiveDate::from_ymd_opt(2024, 1, 1)
            .unwrap()
            .and_hms_opt(10, 0, 0)
            .unwrap();
        assert_eq!(store.calls()[0].expires_on_date, Some(expected));
    }

    #[tokio::test]
    async fn test_create_with_bad_date_never_reaches_store() {
        let (service, store) = service();
        let mut req = input("file-1");
        req.expires_on_date = Some("01/01/2024".to_string());

        let err = service.create_url(&ctx(), req).await.unwrap_err();

        assert_eq!(err.kind, ErrorKind::Validation);
        assert_eq!(err.message, INVALID_DATE_MESSAGE);
        assert!(store.calls().is_empty());
    }

    #[tokio::test]
    async fn test_empty_password_is_same_as_absent() {
        let (service, store) = service();
        let mut with_empty = input("file-1");
        with_empty.password = Some(String::new());

        service.create_url(&ctx(), with_empty).await.unwrap();
        service.create_url(&ctx(), input("file-1")).await.unwrap();

        let calls = store.calls();
        assert_eq!(calls[0].password_secret, None);
        assert_eq!(calls[0].password_secret, calls[1].password_secret);
    }

    #[tokio::test]
    async fn test_password_forwarded_unchanged() {
        let (service, store) = service();
        let mut req = input("file-1");
        req.password = Some("secret123".to_string());
        req.is_anonymous = Some(false);
        req.inactive = Some(true);

        service.create_url(&ctx(), req).await.unwrap();

        let call = &store.calls()[0];
        assert_eq!(call.password_secret.as_deref(), Some("secret123"));
        assert_eq!(call.is_anonymous, Some(false));
        assert_eq!(call.inactive, Some(true));
    }

    #[tokio::test]
    async fn test_blank_file_guid_rejected() {
        let (service, store) = service();
        let err = service.create_url(&ctx(), input("")).await.unwrap_err();
        assert_eq!(err.kind, ErrorKind::Validation);
        assert!(store.calls().is_empty());
    }

    #[tokio::test]
    async fn test_store_errors_propagate_unchanged() {
        let store = Arc::new(RecordingStore::failing(AppError::not_found("File not found")));
        let service = AttachmentUrlService::new(store.clone());

        let err = service.create_url(&ctx(), input("nope")).await.unwrap_err();

        assert_eq!(err.kind, ErrorKind::NotFound);
        assert_eq!(err.message, "File not found");
        assert_eq!(store.calls().len(), 1);
    }

    #[tokio::test]
    async fn test_concurrent_creates_produce_distinct_links() {
        let (service, store) = service();
        let ctx = ctx();

        let (a, b) = tokio::join!(
            service.create_url(&ctx, input("file-1")),
            service.create_url(&ctx, input("file-1")),
        );

        assert_ne!(
            a.unwrap().attachment_url_guid,
            b.unwrap().attachment_url_guid
        );
        assert_eq!(store.calls().len(), 2);
    }

    #[tokio::test]
    async fn test_update_keeps_caller_link_id() {
        let (service, store) = service();
        let link_id = Uuid::new_v4();

        let link = service
            .update_url(
                &ctx(),
                UpdateUrlInput {
                    file_guid: "file-1".to_string(),
                    attachment_url_guid: link_id,
                    expires_on_date: Some(String::new()),
                    password: Some(String::new()),
                    is_anonymous: Some(true),
                    inactive: Some(true),
                },
            )
            .await
            .unwrap();

        assert_eq!(link.attachment_url_guid, link_id);
        let call = &store.calls()[0];
        assert_eq!(call.mode, UpsertMode::Update);
        assert_eq!(call.expires_on_date, None);
        assert_eq!(call.password_secret, None);
    }

    #[tokio::test]
    async fn test_update_with_bad_date_never_reaches_store() {
        let (service, store) = service();
        let err = service
            .update_url(
                &ctx(),
                UpdateUrlInput {
                    file_guid: "file-1".to_string(),
                    attachment_url_guid: Uuid::new_v4(),
                    expires_on_date: Some("2024/01/01 10:00".to_string()),
                    password: None,
                    is_anonymous: None,
                    inactive: None,
                },
            )
            .await
            .unwrap_err();

        assert_eq!(err.message, INVALID_DATE_MESSAGE);
        assert!(store.calls().is_empty());
    }
}
