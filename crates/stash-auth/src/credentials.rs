//! Basic-auth credential verification.

use std::sync::Arc;

use base64::Engine as _;
use base64::engine::general_purpose::STANDARD as BASE64;
use tracing::debug;

use stash_core::error::AppError;
use stash_core::result::AppResult;
use stash_database::UserStore;
use stash_entity::user::User;

use crate::password::PasswordDigest;

/// Message used for every credential failure so callers cannot tell a
/// missing user from a wrong password.
const UNAUTHORIZED: &str = "Unauthorized";

/// Validates a basic-auth header against stored user records.
///
/// Read-only; holds no state beyond its injected collaborators.
#[derive(Debug, Clone)]
pub struct CredentialVerifier {
    users: Arc<dyn UserStore>,
    hasher: PasswordDigest,
}

impl CredentialVerifier {
    /// Create a new verifier over the given user store.
    pub fn new(users: Arc<dyn UserStore>) -> Self {
        Self {
            users,
            hasher: PasswordDigest::new(),
        }
    }

    /// Verify a `Basic base64(email:password)` header value and return the
    /// matching user.
    ///
    /// Fails with an authentication error if the header is malformed, the
    /// user is absent, or the digest does not match.
    pub async fn verify(&self, header: &str) -> AppResult<User> {
        let (email, password) = parse_basic_header(header)?;

        let user = self
            .users
            .find_by_email(&email)
            .await?
            .ok_or_else(|| AppError::authentication(UNAUTHORIZED))?;

        if !self.hasher.verify(&password, &user.password_digest) {
            debug!(email, "Password digest mismatch");
            return Err(AppError::authentication(UNAUTHORIZED));
        }

        Ok(user)
    }
}

/// Decode a basic-auth header into `(email, password)`.
///
/// The decoded credentials split on the first colon, so passwords may
/// contain colons.
fn parse_basic_header(header: &str) -> AppResult<(String, String)> {
    let encoded = header
        .strip_prefix("Basic ")
        .ok_or_else(|| AppError::authentication(UNAUTHORIZED))?;

    let decoded = BASE64
        .decode(encoded)
        .map_err(|_| AppError::authentication(UNAUTHORIZED))?;
    let decoded =
        String::from_utf8(decoded).map_err(|_| AppError::authentication(UNAUTHORIZED))?;

    let (email, password) = decoded
        .split_once(':')
        .ok_or_else(|| AppError::authentication(UNAUTHORIZED))?;

    Ok((email.to_string(), password.to_string()))
}
