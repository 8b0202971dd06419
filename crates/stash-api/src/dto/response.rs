//! Response DTOs.

use serde::{Deserialize, Serialize};

use stash_entity::file::{File, FileKind};
use stash_entity::user::User;

/// User summary for responses. Never carries the password digest.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserResponse {
    /// User id.
    pub id: i64,
    /// Email address.
    pub email: String,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            email: user.email,
        }
    }
}

/// Session token issued on login.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenResponse {
    /// Opaque session token.
    pub token: String,
}

/// File metadata for responses. The storage path is internal and never
/// serialized.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FileResponse {
    /// File id.
    pub id: i64,
    /// Owner's user id.
    #[serde(rename = "userId")]
    pub user_id: i64,
    /// File name.
    pub name: String,
    /// Kind.
    #[serde(rename = "type")]
    pub kind: FileKind,
    /// Visibility flag.
    #[serde(rename = "isPublic")]
    pub is_public: bool,
    /// Parent folder id; 0 for the root.
    #[serde(rename = "parentId")]
    pub parent_id: i64,
}

impl From<File> for FileResponse {
    fn from(file: File) -> Self {
        Self {
            id: file.id,
            user_id: file.owner_id,
            name: file.name,
            kind: file.kind,
            is_public: file.is_public,
            parent_id: file.parent_id,
        }
    }
}

/// Backend liveness summary.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StatusResponse {
    /// Cache connectivity.
    pub redis: bool,
    /// Document store connectivity.
    pub db: bool,
}

/// Collection counts.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StatsResponse {
    /// Total registered users.
    pub users: u64,
    /// Total file records.
    pub files: u64,
}
