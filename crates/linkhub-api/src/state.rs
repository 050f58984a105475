//! Application state shared across all handlers and middleware.

use std::sync::Arc;

use linkhub_auth::IdentityResolver;
use linkhub_core::config::AppConfig;
use linkhub_database::AttachmentUrlStore;
use linkhub_service::AttachmentUrlService;

/// Application state containing all shared dependencies.
///
/// Passed to every Axum handler via `State<AppState>`.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Application configuration
    pub config: Arc<AppConfig>,
    /// Bearer token to identity resolution
    pub identity: Arc<dyn IdentityResolver>,
    /// Attachment URL persistence, also probed by the health check
    pub store: Arc<dyn AttachmentUrlStore>,
    /// Attachment URL service
    pub attachment_url_service: Arc<AttachmentUrlService>,
}

impl AppState {
    /// Wires the service on top of the given store.
    pub fn new(
        config: AppConfig,
        identity: Arc<dyn IdentityResolver>,
        store: Arc<dyn AttachmentUrlStore>,
    ) -> Self {
        let attachment_url_service = Arc::new(AttachmentUrlService::new(Arc::clone(&store)));
        Self {
            config: Arc::new(config),
            identity,
            store,
            attachment_url_service,
        }
    }
}
