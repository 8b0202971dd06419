//! File entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use super::kind::FileKind;

/// The `parent_id` sentinel denoting "no parent folder".
pub const ROOT_PARENT: i64 = 0;

/// A file, image, or folder stored in Stash.
///
/// Metadata persists indefinitely once created. `owner_id` is immutable;
/// `is_public` is the only field visibility changes may mutate.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct File {
    /// Unique file identifier.
    pub id: i64,
    /// The owning user. Immutable once set.
    pub owner_id: i64,
    /// The file name (including extension, for content-type guessing).
    pub name: String,
    /// Folder, file, or image.
    pub kind: FileKind,
    /// Parent folder id, or [`ROOT_PARENT`] for top-level entries.
    pub parent_id: i64,
    /// Whether anonymous content reads are allowed.
    pub is_public: bool,
    /// Content-store path for file/image kinds. Never serialized; folders
    /// never carry one.
    #[serde(skip_serializing)]
    pub local_path: Option<String>,
    /// When the file was created.
    pub created_at: DateTime<Utc>,
}

impl File {
    /// Whether this entry is a folder.
    pub fn is_folder(&self) -> bool {
        self.kind == FileKind::Folder
    }
}

/// Data required to create a new file record.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewFile {
    /// The owning user.
    pub owner_id: i64,
    /// The file name.
    pub name: String,
    /// Folder, file, or image.
    pub kind: FileKind,
    /// Parent folder id, or [`ROOT_PARENT`].
    pub parent_id: i64,
    /// Initial visibility.
    pub is_public: bool,
    /// Content-store path (file/image only).
    pub local_path: Option<String>,
}
