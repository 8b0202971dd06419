//! Pagination for file listings.
//!
//! Listings use a fixed page size of 20 with zero-based page numbers, so
//! page `k` covers items `[20k, 20k + 20)` in stable insertion order.

use serde::{Deserialize, Serialize};

/// Fixed number of items per listing page.
pub const PAGE_SIZE: u64 = 20;

/// A zero-based page request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct Page {
    /// Zero-based page index.
    #[serde(default)]
    pub index: u64,
}

impl Page {
    /// Create a page request for the given zero-based index.
    pub fn new(index: u64) -> Self {
        Self { index }
    }

    /// The number of items to skip.
    pub fn offset(&self) -> u64 {
        self.index * PAGE_SIZE
    }

    /// The maximum number of items to return.
    pub fn limit(&self) -> u64 {
        PAGE_SIZE
    }
}
