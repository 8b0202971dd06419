//! Request context carrying the authenticated user.

use serde::{Deserialize, Serialize};

/// Context for the current authenticated request.
///
/// Extracted by the access gate and passed into service methods so that
/// every operation knows *who* is acting. The raw token is kept so that
/// logout can revoke the session it arrived on.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RequestContext {
    /// The authenticated user's id.
    pub user_id: i64,
    /// The session token this request authenticated with.
    pub token: String,
}

impl RequestContext {
    /// Creates a new request context.
    pub fn new(user_id: i64, token: String) -> Self {
        Self { user_id, token }
    }
}
