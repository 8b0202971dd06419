//! # stash-cache
//!
//! Cache providers for Stash: Redis-backed for deployment, moka-backed
//! in-memory for single-node use and tests. Session tokens live here with
//! a cache-enforced TTL; expiry is entirely the cache's job.

pub mod keys;
#[cfg(feature = "memory")]
pub mod memory;
pub mod provider;
#[cfg(feature = "redis-backend")]
pub mod redis;

pub use provider::CacheManager;
