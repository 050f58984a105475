//! LinkHub Server: attachment URL service for stored files.
//!
//! Main entry point that wires all crates together and starts the server.

use std::sync::Arc;

use tracing_subscriber::{EnvFilter, fmt};

use linkhub_api::AppState;
use linkhub_auth::{JwtDecoder, JwtIdentityResolver, PasswordHasher};
use linkhub_core::config::{AppConfig, DatabaseProvider};
use linkhub_core::error::AppError;
use linkhub_database::{
    AttachmentUrlRepository, AttachmentUrlStore, DatabasePool, MemoryAttachmentUrlStore,
};

#[tokio::main]
async fn main() {
    let config = match load_configuration() {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Failed to load configuration: {}", e);
            std::process::exit(1);
        }
    };

    init_logging(&config);

    if let Err(e) = run(config).await {
        tracing::error!("Server error: {}", e);
        std::process::exit(1);
    }
}

/// Load configuration from the config directory and environment
fn load_configuration() -> Result<AppConfig, AppError> {
    let config_dir = std::env::var("LINKHUB_CONFIG_DIR").unwrap_or_else(|_| "config".to_string());
    let env = std::env::var("LINKHUB_ENV").unwrap_or_else(|_| "development".to_string());

    AppConfig::load(&config_dir, &env)
}

/// Initialize tracing/logging
fn init_logging(config: &AppConfig) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.logging.level));

    match config.logging.format.as_str() {
        "json" => {
            fmt()
                .json()
                .with_env_filter(filter)
                .with_target(true)
                .with_thread_ids(true)
                .init();
        }
        _ => {
            fmt()
                .pretty()
                .with_env_filter(filter)
                .with_target(true)
                .init();
        }
    }
}

/// Main server run function
async fn run(config: AppConfig) -> Result<(), AppError> {
    tracing::info!("Starting LinkHub v{}", env!("CARGO_PKG_VERSION"));

    let store = build_store(&config).await?;

    let identity = Arc::new(JwtIdentityResolver::new(JwtDecoder::new(&config.auth)));

    let state = AppState::new(config, identity, store);

    linkhub_api::serve(state).await
}

/// Picks the attachment URL store for the configured provider.
async fn build_store(config: &AppConfig) -> Result<Arc<dyn AttachmentUrlStore>, AppError> {
    match config.database.provider {
        DatabaseProvider::Postgres => {
            tracing::info!("Connecting to database...");
            let db = DatabasePool::connect(&config.database).await?;

            if config.database.run_migrations {
                linkhub_database::migration::run_migrations(db.pool()).await?;
            }

            let hasher = Arc::new(PasswordHasher::new());
            Ok(Arc::new(AttachmentUrlRepository::new(
                db.into_pool(),
                hasher,
            )))
        }
        DatabaseProvider::Memory => {
            tracing::warn!("Using in-memory store; attachment URLs are lost on restart");
            Ok(Arc::new(MemoryAttachmentUrlStore::new()))
        }
    }
}
