//! Local filesystem content store.

use std::path::PathBuf;

use async_trait::async_trait;
use bytes::Bytes;
use tokio::fs;
use tracing::debug;
use uuid::Uuid;

use stash_core::error::{AppError, ErrorKind};
use stash_core::result::AppResult;
use stash_core::traits::storage::ContentStore;

/// Content store backed by a directory on the local filesystem.
///
/// Each write lands in a fresh UUID-named file under the root; content is
/// write-once per generated path.
#[derive(Debug, Clone)]
pub struct LocalContentStore {
    /// Root directory for all stored payloads.
    root: PathBuf,
}

impl LocalContentStore {
    /// Create a new content store rooted at the given path, creating the
    /// directory if needed.
    pub async fn new(root_path: &str) -> AppResult<Self> {
        let root = PathBuf::from(root_path);
        fs::create_dir_all(&root).await.map_err(|e| {
            AppError::with_source(
                ErrorKind::Storage,
                format!("Failed to create storage root: {}", root.display()),
                e,
            )
        })?;
        Ok(Self { root })
    }

    /// Resolve a stored relative path to an absolute path within the root.
    fn resolve(&self, path: &str) -> PathBuf {
        self.root.join(path.trim_start_matches('/'))
    }
}

#[async_trait]
impl ContentStore for LocalContentStore {
    async fn write(&self, data: Bytes) -> AppResult<String> {
        let path = Uuid::new_v4().to_string();
        let full_path = self.resolve(&path);

        fs::write(&full_path, &data).await.map_err(|e| {
            AppError::with_source(
                ErrorKind::Storage,
                format!("Failed to write content: {path}"),
                e,
            )
        })?;

        debug!(path, bytes = data.len(), "Wrote content");
        Ok(path)
    }

    async fn read(&self, path: &str) -> AppResult<Bytes> {
        let full_path = self.resolve(path);
        let data = fs::read(&full_path).await.map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                AppError::not_found(format!("Content not found: {path}"))
            } else {
                AppError::with_source(
                    ErrorKind::Storage,
                    format!("Failed to read content: {path}"),
                    e,
                )
            }
        })?;
        Ok(Bytes::from(data))
    }

    async fn health_check(&self) -> AppResult<bool> {
        Ok(self.root.exists() && self.root.is_dir())
    }
}
