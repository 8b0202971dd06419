//! Cache key builders for all Stash cache entries.
//!
//! Centralising key construction prevents typos and makes it easy to find
//! every key the application uses.

/// Cache key for a session token mapping (`token -> user id`).
pub fn session_token(token: &str) -> String {
    format!("auth:{token}")
}
