//! Application state shared across all handlers and extractors.

use std::sync::Arc;

use stash_auth::{CredentialVerifier, SessionManager};
use stash_cache::CacheManager;
use stash_core::config::AppConfig;
use stash_database::{FileStore, UserStore};
use stash_service::{FileService, UserService};

/// Application state containing all shared dependencies.
///
/// Passed to every axum handler via `State<AppState>`. All fields are
/// `Arc`-wrapped for cheap cloning across tasks; everything is
/// constructed once at process start and injected by handle.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Application configuration.
    pub config: Arc<AppConfig>,
    /// Cache manager (Redis or in-memory).
    pub cache: Arc<CacheManager>,
    /// Users collection.
    pub users: Arc<dyn UserStore>,
    /// Files collection.
    pub files: Arc<dyn FileStore>,
    /// Basic-auth credential verifier.
    pub verifier: Arc<CredentialVerifier>,
    /// Session token lifecycle.
    pub sessions: Arc<SessionManager>,
    /// Registration and profile service.
    pub user_service: Arc<UserService>,
    /// File hierarchy service.
    pub file_service: Arc<FileService>,
}
