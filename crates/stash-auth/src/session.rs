//! Cache-backed session token lifecycle.

use std::sync::Arc;
use std::time::Duration;

use base64::Engine as _;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use rand::Rng;
use tracing::{debug, info};

use stash_cache::CacheManager;
use stash_cache::keys;
use stash_core::config::auth::AuthConfig;
use stash_core::result::AppResult;
use stash_core::traits::cache::CacheProvider;

/// Number of random bytes in a session token (256 bits of entropy).
const TOKEN_BYTES: usize = 32;

/// Issues, resolves, and revokes opaque session tokens.
///
/// The token-to-user mapping lives entirely in the cache with an absolute
/// TTL; expiry is delegated to the cache and no background sweep runs.
/// Tokens are unique by construction, so creation needs no compare-and-set.
#[derive(Debug, Clone)]
pub struct SessionManager {
    cache: Arc<CacheManager>,
    ttl: Duration,
}

impl SessionManager {
    /// Create a new session manager over the given cache.
    pub fn new(cache: Arc<CacheManager>, config: &AuthConfig) -> Self {
        Self {
            cache,
            ttl: Duration::from_secs(config.session_ttl_seconds),
        }
    }

    /// Issue a fresh token for the given user.
    pub async fn create(&self, user_id: i64) -> AppResult<String> {
        let token = generate_token();
        self.cache
            .set(&keys::session_token(&token), &user_id.to_string(), self.ttl)
            .await?;
        info!(user_id, "Session created");
        Ok(token)
    }

    /// Resolve a token to its user id, or `None` if unknown or expired.
    pub async fn resolve(&self, token: &str) -> AppResult<Option<i64>> {
        let value = self.cache.get(&keys::session_token(token)).await?;
        Ok(value.and_then(|v| v.parse().ok()))
    }

    /// Revoke a token. Idempotent: revoking an absent token is not an error.
    pub async fn revoke(&self, token: &str) -> AppResult<()> {
        self.cache.delete(&keys::session_token(token)).await?;
        debug!("Session revoked");
        Ok(())
    }
}

/// Generate an opaque URL-safe token from 256 bits of randomness.
fn generate_token() -> String {
    let bytes: [u8; TOKEN_BYTES] = rand::rng().random();
    URL_SAFE_NO_PAD.encode(bytes)
}
