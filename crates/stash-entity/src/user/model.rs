//! User entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A registered user.
///
/// Users are created at registration and immutable afterwards; they are
/// never deleted.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct User {
    /// Unique user identifier.
    pub id: i64,
    /// Email address (unique, looked up case-insensitively).
    pub email: String,
    /// Deterministic password digest (hex). Never serialized.
    #[serde(skip_serializing)]
    pub password_digest: String,
    /// When the user registered.
    pub created_at: DateTime<Utc>,
}

/// Data required to create a new user.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewUser {
    /// Email address.
    pub email: String,
    /// Pre-computed password digest.
    pub password_digest: String,
}
