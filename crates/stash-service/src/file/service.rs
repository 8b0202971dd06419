//! File hierarchy operations: create, fetch, list, visibility, content.
//!
//! All ownership and visibility rules live here. Absence and lack of
//! ownership are deliberately reported identically ("Not found") so that
//! callers cannot probe for the existence of private files.

use std::str::FromStr;
use std::sync::Arc;

use base64::Engine as _;
use base64::engine::general_purpose::STANDARD as BASE64;
use bytes::Bytes;
use tracing::info;

use stash_core::error::AppError;
use stash_core::result::AppResult;
use stash_core::traits::storage::ContentStore;
use stash_core::types::pagination::Page;
use stash_database::FileStore;
use stash_entity::file::{File, FileKind, NewFile, ROOT_PARENT};

/// Input for creating a file, image, or folder.
///
/// Fields arrive optional so that validation can report the first missing
/// one with the exact message the API contract promises.
#[derive(Debug, Clone, Default, serde::Serialize, serde::Deserialize)]
pub struct CreateFileInput {
    /// File name.
    pub name: Option<String>,
    /// Kind: `"folder"`, `"file"`, or `"image"`.
    pub kind: Option<String>,
    /// Parent folder id; defaults to the root sentinel.
    pub parent_id: i64,
    /// Initial visibility; defaults to private.
    pub is_public: bool,
    /// Base64-encoded payload (required unless kind is folder).
    pub data: Option<String>,
}

/// A file's payload bytes together with the name used for content-type
/// guessing.
#[derive(Debug, Clone)]
pub struct FileContent {
    /// The file name, including extension.
    pub name: String,
    /// The raw payload bytes.
    pub data: Bytes,
}

/// Handles file hierarchy validation, access control, and content reads.
#[derive(Debug, Clone)]
pub struct FileService {
    files: Arc<dyn FileStore>,
    content: Arc<dyn ContentStore>,
}

impl FileService {
    /// Creates a new file service over the given stores.
    pub fn new(files: Arc<dyn FileStore>, content: Arc<dyn ContentStore>) -> Self {
        Self { files, content }
    }

    /// Create a file, image, or folder owned by `owner_id`.
    ///
    /// Validation precedence (first failing check wins): name required,
    /// kind must parse, data required unless folder. A nonzero parent must
    /// exist and be a folder. Folders persist metadata only; file/image
    /// kinds decode the payload and write it to the content store before
    /// the metadata is persisted.
    pub async fn create_file(&self, owner_id: i64, input: CreateFileInput) -> AppResult<File> {
        let name = input
            .name
            .filter(|n| !n.is_empty())
            .ok_or_else(|| AppError::validation("Missing name"))?;

        let kind = input
            .kind
            .as_deref()
            .and_then(|k| FileKind::from_str(k).ok())
            .ok_or_else(|| AppError::validation("Missing type"))?;

        let data = input.data.filter(|d| !d.is_empty());
        if kind.has_content() && data.is_none() {
            return Err(AppError::validation("Missing data"));
        }

        if input.parent_id != ROOT_PARENT {
            match self.files.find_by_id(input.parent_id).await? {
                None => return Err(AppError::validation("Parent not found")),
                Some(parent) if !parent.is_folder() => {
                    return Err(AppError::validation("Parent is not a folder"));
                }
                Some(_) => {}
            }
        }

        // Folders never carry a content path; other kinds are write-once
        // into the content store before the metadata exists.
        let local_path = match data {
            Some(data) if kind.has_content() => {
                let bytes = BASE64
                    .decode(data.as_bytes())
                    .map_err(|_| AppError::validation("Invalid data"))?;
                Some(self.content.write(Bytes::from(bytes)).await?)
            }
            _ => None,
        };

        let file = self
            .files
            .insert(&NewFile {
                owner_id,
                name,
                kind,
                parent_id: input.parent_id,
                is_public: input.is_public,
                local_path,
            })
            .await?;

        info!(file_id = file.id, owner_id, kind = %file.kind, "File created");
        Ok(file)
    }

    /// Fetch a file's metadata.
    ///
    /// Only the owner may read raw metadata; there is no public-visibility
    /// bypass here.
    pub async fn get_file(&self, requester_id: i64, file_id: i64) -> AppResult<File> {
        match self.files.find_by_id(file_id).await? {
            Some(file) if file.owner_id == requester_id => Ok(file),
            _ => Err(AppError::not_found("Not found")),
        }
    }

    /// List one page of the requester's files under `parent_id`, in stable
    /// insertion order. Never returns another user's files.
    pub async fn list_files(
        &self,
        requester_id: i64,
        parent_id: i64,
        page: Page,
    ) -> AppResult<Vec<File>> {
        self.files
            .find_by_owner_and_parent(requester_id, parent_id, &page)
            .await
    }

    /// Set a file's visibility flag.
    ///
    /// Same existence/ownership rules as [`get_file`](Self::get_file);
    /// setting the current state again is a permitted no-op.
    pub async fn set_visibility(
        &self,
        requester_id: i64,
        file_id: i64,
        is_public: bool,
    ) -> AppResult<File> {
        self.get_file(requester_id, file_id).await?;

        self.files
            .set_visibility(file_id, is_public)
            .await?
            .ok_or_else(|| AppError::not_found("Not found"))
    }

    /// Read a file's content bytes.
    ///
    /// Folders have no content (a 400-class domain error). Private files
    /// are readable only by their owner; any other failure mode — absent
    /// id, foreign private file, unreadable bytes — reports an identical
    /// "Not found" so existence never leaks.
    pub async fn get_content(
        &self,
        requester_id: Option<i64>,
        file_id: i64,
    ) -> AppResult<FileContent> {
        let file = self
            .files
            .find_by_id(file_id)
            .await?
            .ok_or_else(|| AppError::not_found("Not found"))?;

        if file.is_folder() {
            return Err(AppError::domain("A folder doesn't have content"));
        }

        let authorized = file.is_public || requester_id == Some(file.owner_id);
        if !authorized {
            return Err(AppError::not_found("Not found"));
        }

        let path = file
            .local_path
            .as_deref()
            .ok_or_else(|| AppError::not_found("Not found"))?;

        let data = self
            .content
            .read(path)
            .await
            .map_err(|_| AppError::not_found("Not found"))?;

        Ok(FileContent {
            name: file.name,
            data,
        })
    }
}
