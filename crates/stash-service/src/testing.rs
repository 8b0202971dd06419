//! In-memory fakes for the store contracts, used by unit tests.

use std::collections::HashMap;
use std::sync::Mutex;

use async_trait::async_trait;
use bytes::Bytes;
use chrono::Utc;

use stash_core::result::AppResult;
use stash_core::traits::storage::ContentStore;
use stash_core::types::pagination::Page;
use stash_database::{FileStore, UserStore};
use stash_entity::file::{File, NewFile};
use stash_entity::user::{NewUser, User};

/// In-memory user store.
#[derive(Debug, Default)]
pub struct MemUserStore {
    users: Mutex<Vec<User>>,
}

#[async_trait]
impl UserStore for MemUserStore {
    async fn insert(&self, user: &NewUser) -> AppResult<User> {
        let mut users = self.users.lock().unwrap();
        let record = User {
            id: users.len() as i64 + 1,
            email: user.email.clone(),
            password_digest: user.password_digest.clone(),
            created_at: Utc::now(),
        };
        users.push(record.clone());
        Ok(record)
    }

    async fn find_by_id(&self, id: i64) -> AppResult<Option<User>> {
        Ok(self
            .users
            .lock()
            .unwrap()
            .iter()
            .find(|u| u.id == id)
            .cloned())
    }

    async fn find_by_email(&self, email: &str) -> AppResult<Option<User>> {
        Ok(self
            .users
            .lock()
            .unwrap()
            .iter()
            .find(|u| u.email.eq_ignore_ascii_case(email))
            .cloned())
    }

    async fn count(&self) -> AppResult<u64> {
        Ok(self.users.lock().unwrap().len() as u64)
    }

    async fn health_check(&self) -> AppResult<bool> {
        Ok(true)
    }
}

/// In-memory file store preserving insertion order.
#[derive(Debug, Default)]
pub struct MemFileStore {
    files: Mutex<Vec<File>>,
}

#[async_trait]
impl FileStore for MemFileStore {
    async fn insert(&self, file: &NewFile) -> AppResult<File> {
        let mut files = self.files.lock().unwrap();
        let record = File {
            id: files.len() as i64 + 1,
            owner_id: file.owner_id,
            name: file.name.clone(),
            kind: file.kind,
            parent_id: file.parent_id,
            is_public: file.is_public,
            local_path: file.local_path.clone(),
            created_at: Utc::now(),
        };
        files.push(record.clone());
        Ok(record)
    }

    async fn find_by_id(&self, id: i64) -> AppResult<Option<File>> {
        Ok(self
            .files
            .lock()
            .unwrap()
            .iter()
            .find(|f| f.id == id)
            .cloned())
    }

    async fn find_by_owner_and_parent(
        &self,
        owner_id: i64,
        parent_id: i64,
        page: &Page,
    ) -> AppResult<Vec<File>> {
        Ok(self
            .files
            .lock()
            .unwrap()
            .iter()
            .filter(|f| f.owner_id == owner_id && f.parent_id == parent_id)
            .skip(page.offset() as usize)
            .take(page.limit() as usize)
            .cloned()
            .collect())
    }

    async fn set_visibility(&self, id: i64, is_public: bool) -> AppResult<Option<File>> {
        let mut files = self.files.lock().unwrap();
        Ok(files.iter_mut().find(|f| f.id == id).map(|f| {
            f.is_public = is_public;
            f.clone()
        }))
    }

    async fn count(&self) -> AppResult<u64> {
        Ok(self.files.lock().unwrap().len() as u64)
    }

    async fn health_check(&self) -> AppResult<bool> {
        Ok(true)
    }
}

/// In-memory content store mapping generated paths to payloads.
#[derive(Debug, Default)]
pub struct MemContentStore {
    blobs: Mutex<HashMap<String, Bytes>>,
}

#[async_trait]
impl ContentStore for MemContentStore {
    async fn write(&self, data: Bytes) -> AppResult<String> {
        let mut blobs = self.blobs.lock().unwrap();
        let path = format!("blob-{}", blobs.len());
        blobs.insert(path.clone(), data);
        Ok(path)
    }

    async fn read(&self, path: &str) -> AppResult<Bytes> {
        self.blobs
            .lock()
            .unwrap()
            .get(path)
            .cloned()
            .ok_or_else(|| stash_core::AppError::not_found(format!("Content not found: {path}")))
    }

    async fn health_check(&self) -> AppResult<bool> {
        Ok(true)
    }
}
