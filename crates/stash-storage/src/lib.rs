//! # stash-storage
//!
//! Byte-addressable content store for file payloads, separate from the
//! metadata store. Paths are generated on write and recorded in file
//! metadata, never exposed externally.

pub mod local;

pub use local::LocalContentStore;
