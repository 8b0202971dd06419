//! Authentication and session configuration.

use serde::{Deserialize, Serialize};

/// Authentication configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthConfig {
    /// Absolute TTL for session tokens in seconds.
    #[serde(default = "default_session_ttl")]
    pub session_ttl_seconds: u64,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            session_ttl_seconds: default_session_ttl(),
        }
    }
}

fn default_session_ttl() -> u64 {
    86_400
}
