//! Request DTOs.
//!
//! Required fields arrive as `Option` so the services can report the
//! exact "Missing ..." message the API contract promises instead of a
//! generic deserialization failure.

use serde::{Deserialize, Serialize};

use stash_entity::file::ROOT_PARENT;
use stash_service::CreateFileInput;

/// Registration request body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateUserRequest {
    /// Email address.
    pub email: Option<String>,
    /// Plaintext password.
    pub password: Option<String>,
}

/// File creation request body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateFileRequest {
    /// File name.
    pub name: Option<String>,
    /// Kind: `"folder"`, `"file"`, or `"image"`.
    #[serde(rename = "type")]
    pub kind: Option<String>,
    /// Parent folder id; 0 means the root.
    #[serde(rename = "parentId", default)]
    pub parent_id: i64,
    /// Initial visibility.
    #[serde(rename = "isPublic", default)]
    pub is_public: bool,
    /// Base64-encoded payload.
    pub data: Option<String>,
}

impl From<CreateFileRequest> for CreateFileInput {
    fn from(req: CreateFileRequest) -> Self {
        Self {
            name: req.name,
            kind: req.kind,
            parent_id: req.parent_id,
            is_public: req.is_public,
            data: req.data,
        }
    }
}

/// Query parameters for listing files.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ListFilesQuery {
    /// Parent folder id; defaults to the root.
    #[serde(rename = "parentId", default = "root_parent")]
    pub parent_id: i64,
    /// Zero-based page index.
    #[serde(default)]
    pub page: u64,
}

fn root_parent() -> i64 {
    ROOT_PARENT
}
