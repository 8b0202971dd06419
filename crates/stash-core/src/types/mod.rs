//! Shared value types.

pub mod pagination;

pub use pagination::{PAGE_SIZE, Page};
