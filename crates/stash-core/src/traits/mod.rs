//! Collaborator traits implemented by the infrastructure crates.

pub mod cache;
pub mod storage;

pub use cache::CacheProvider;
pub use storage::ContentStore;
