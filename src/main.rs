//! Stash server — personal file-storage backend.
//!
//! Main entry point that wires all crates together and starts the server.

use std::sync::Arc;

use tracing_subscriber::{EnvFilter, fmt};

use stash_api::AppState;
use stash_auth::{CredentialVerifier, SessionManager};
use stash_cache::CacheManager;
use stash_core::config::AppConfig;
use stash_core::error::AppError;
use stash_database::repositories::{PgFileStore, PgUserStore};
use stash_database::{DatabasePool, FileStore, UserStore};
use stash_service::{FileService, UserService};
use stash_storage::LocalContentStore;

#[tokio::main]
async fn main() {
    let config = match load_configuration() {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Failed to load configuration: {e}");
            std::process::exit(1);
        }
    };

    init_logging(&config);

    if let Err(e) = run(config).await {
        tracing::error!("Server error: {e}");
        std::process::exit(1);
    }
}

/// Load configuration from file and environment.
fn load_configuration() -> Result<AppConfig, AppError> {
    let config_path =
        std::env::var("STASH_CONFIG").unwrap_or_else(|_| "config/default.toml".to_string());
    AppConfig::load(&config_path)
}

/// Initialize tracing/logging.
fn init_logging(config: &AppConfig) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.logging.level));

    match config.logging.format.as_str() {
        "json" => {
            fmt()
                .json()
                .with_env_filter(filter)
                .with_target(true)
                .init();
        }
        _ => {
            fmt().pretty().with_env_filter(filter).with_target(true).init();
        }
    }
}

/// Main server run function.
async fn run(config: AppConfig) -> Result<(), AppError> {
    tracing::info!("Starting Stash v{}", env!("CARGO_PKG_VERSION"));

    let db_pool = DatabasePool::connect(&config.database).await?;
    stash_database::migration::run_migrations(db_pool.pool()).await?;

    tracing::info!(provider = %config.cache.provider, "Initializing cache");
    let cache = Arc::new(CacheManager::new(&config.cache).await?);

    let content = Arc::new(LocalContentStore::new(&config.storage.root_path).await?);

    let users: Arc<dyn UserStore> = Arc::new(PgUserStore::new(db_pool.pool().clone()));
    let files: Arc<dyn FileStore> = Arc::new(PgFileStore::new(db_pool.pool().clone()));

    let verifier = Arc::new(CredentialVerifier::new(Arc::clone(&users)));
    let sessions = Arc::new(SessionManager::new(Arc::clone(&cache), &config.auth));
    let user_service = Arc::new(UserService::new(Arc::clone(&users)));
    let file_service = Arc::new(FileService::new(Arc::clone(&files), content));

    let addr = config.server.bind_addr();
    let state = AppState {
        config: Arc::new(config),
        cache,
        users,
        files,
        verifier,
        sessions,
        user_service,
        file_service,
    };

    let app = stash_api::build_router(state);

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|e| AppError::internal(format!("Failed to bind {addr}: {e}")))?;

    tracing::info!("Stash server listening on {addr}");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| AppError::internal(format!("Server error: {e}")))?;

    db_pool.close().await;
    tracing::info!("Stash server shut down gracefully");
    Ok(())
}

/// Wait for shutdown signal (Ctrl+C or SIGTERM).
async fn shutdown_signal() {
    let ctrl_c = async {
        if tokio::signal::ctrl_c().await.is_err() {
            tracing::error!("Failed to install Ctrl+C handler");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(_) => std::future::pending::<()>().await,
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
