//! Content store trait for byte-addressable file payload storage.

use async_trait::async_trait;
use bytes::Bytes;

use crate::result::AppResult;

/// Trait for the byte-addressable content store, separate from the file
/// metadata store.
///
/// Paths are generated by the store on write and recorded in file metadata;
/// they are never exposed externally. Content bytes are write-once per
/// generated path.
#[async_trait]
pub trait ContentStore: Send + Sync + std::fmt::Debug + 'static {
    /// Write a payload and return the generated storage path.
    async fn write(&self, data: Bytes) -> AppResult<String>;

    /// Read the payload at a previously generated path.
    ///
    /// Fails with a not-found error if the path is absent.
    async fn read(&self, path: &str) -> AppResult<Bytes>;

    /// Check that the store is usable.
    async fn health_check(&self) -> AppResult<bool>;
}
