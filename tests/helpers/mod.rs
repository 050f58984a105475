//! Shared test helpers for integration tests.

#![allow(dead_code)]

use std::sync::Arc;

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use chrono::Utc;
use serde_json::Value;
use tower::ServiceExt;
use uuid::Uuid;

use linkhub_api::{AppState, build_app};
use linkhub_auth::{JwtDecoder, JwtEncoder, JwtIdentityResolver};
use linkhub_core::config::AppConfig;
use linkhub_database::MemoryAttachmentUrlStore;
use linkhub_entity::file::StoredFile;

/// Test application context backed by the in-memory store.
pub struct TestApp {
    /// The Axum router for making test requests
    pub router: Router,
    /// Store behind the router, for direct inspection
    pub store: Arc<MemoryAttachmentUrlStore>,
    /// Application config
    pub config: AppConfig,
    /// User every `token` is issued for
    pub user_id: Uuid,
    /// Bearer token for `user_id`
    pub token: String,
}

impl TestApp {
    /// App whose store accepts any file GUID.
    pub fn new() -> Self {
        Self::with_store(MemoryAttachmentUrlStore::new())
    }

    /// App whose store only knows the given file GUIDs.
    pub fn with_files(file_guids: &[&str]) -> Self {
        let owner = Uuid::new_v4();
        let files = file_guids.iter().map(|guid| StoredFile {
            file_guid: guid.to_string(),
            file_name: format!("{guid}.bin"),
            file_size: 1,
            created_by: owner,
            created_at: Utc::now(),
        });
        Self::with_store(MemoryAttachmentUrlStore::with_files(files))
    }

    fn with_store(store: MemoryAttachmentUrlStore) -> Self {
        let mut config = AppConfig::default();
        config.auth.jwt_secret = "integration-test-secret".to_string();

        let store = Arc::new(store);
        let identity = Arc::new(JwtIdentityResolver::new(JwtDecoder::new(&config.auth)));
        let state = AppState::new(config.clone(), identity, store.clone());

        let user_id = Uuid::new_v4();
        let (token, _) = JwtEncoder::new(&config.auth)
            .generate_access_token(user_id, "tester")
            .expect("Failed to issue test token");

        Self {
            router: build_app(state),
            store,
            config,
            user_id,
            token,
        }
    }

    /// Authenticated request as `user_id`.
    pub async fn request(&self, method: &str, path: &str, body: Option<Value>) -> TestResponse {
        let token = self.token.clone();
        self.send(method, path, body, Some(&token)).await
    }

    /// Make an HTTP request to the test app
    pub async fn send(
        &self,
        method: &str,
        path: &str,
        body: Option<Value>,
        token: Option<&str>,
    ) -> TestResponse {
        let body_str = body
            .map(|b| serde_json::to_string(&b).expect("Failed to serialize body"))
            .unwrap_or_default();

        let mut req = Request::builder()
            .method(method)
            .uri(path)
            .header("Content-Type", "application/json");

        if let Some(token) = token {
            req = req.header("Authorization", format!("Bearer {}", token));
        }

        let req = req
            .body(Body::from(body_str))
            .expect("Failed to build request");

        let response = self
            .router
            .clone()
            .oneshot(req)
            .await
            .expect("Failed to send request");

        let status = response.status();
        let content_type = response
            .headers()
            .get("content-type")
            .and_then(|v| v.to_str().ok())
            .unwrap_or_default()
            .to_string();
        let body_bytes = axum::body::to_bytes(response.into_body(), 1024 * 1024)
            .await
            .expect("Failed to read body");

        let text = String::from_utf8_lossy(&body_bytes).to_string();
        let body: Value = serde_json::from_slice(&body_bytes).unwrap_or(Value::Null);

        TestResponse {
            status,
            content_type,
            text,
            body,
        }
    }
}

/// Response from a test request
#[derive(Debug)]
pub struct TestResponse {
    /// HTTP status code
    pub status: StatusCode,
    /// Content-Type header, empty if absent
    pub content_type: String,
    /// Raw body
    pub text: String,
    /// Parsed JSON body, `Null` when not JSON
    pub body: Value,
}
