//! Content store configuration.

use serde::{Deserialize, Serialize};

/// Content store configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StorageConfig {
    /// Root directory for all stored content bytes.
    #[serde(default = "default_root_path")]
    pub root_path: String,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            root_path: default_root_path(),
        }
    }
}

fn default_root_path() -> String {
    "/tmp/stash".to_string()
}
