//! File repository implementation.

use async_trait::async_trait;
use sqlx::PgPool;

use stash_core::error::{AppError, ErrorKind};
use stash_core::result::AppResult;
use stash_core::types::pagination::Page;
use stash_entity::file::{File, NewFile};

use super::FileStore;

/// sqlx-backed store for the files collection.
#[derive(Debug, Clone)]
pub struct PgFileStore {
    pool: PgPool,
}

impl PgFileStore {
    /// Create a new file store over the given pool.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl FileStore for PgFileStore {
    async fn insert(&self, file: &NewFile) -> AppResult<File> {
        sqlx::query_as::<_, File>(
            "INSERT INTO files (owner_id, name, kind, parent_id, is_public, local_path) \
             VALUES ($1, $2, $3, $4, $5, $6) RETURNING *",
        )
        .bind(file.owner_id)
        .bind(&file.name)
        .bind(file.kind)
        .bind(file.parent_id)
        .bind(file.is_public)
        .bind(&file.local_path)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to insert file", e))
    }

    async fn find_by_id(&self, id: i64) -> AppResult<Option<File>> {
        sqlx::query_as::<_, File>("SELECT * FROM files WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to find file by id", e))
    }

    async fn find_by_owner_and_parent(
        &self,
        owner_id: i64,
        parent_id: i64,
        page: &Page,
    ) -> AppResult<Vec<File>> {
        sqlx::query_as::<_, File>(
            "SELECT * FROM files WHERE owner_id = $1 AND parent_id = $2 \
             ORDER BY id LIMIT $3 OFFSET $4",
        )
        .bind(owner_id)
        .bind(parent_id)
        .bind(page.limit() as i64)
        .bind(page.offset() as i64)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list files", e))
    }

    async fn set_visibility(&self, id: i64, is_public: bool) -> AppResult<Option<File>> {
        sqlx::query_as::<_, File>("UPDATE files SET is_public = $2 WHERE id = $1 RETURNING *")
            .bind(id)
            .bind(is_public)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to update file visibility", e)
            })
    }

    async fn count(&self) -> AppResult<u64> {
        let total: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM files")
            .fetch_one(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to count files", e))?;
        Ok(total as u64)
    }

    async fn health_check(&self) -> AppResult<bool> {
        sqlx::query_scalar::<_, i32>("SELECT 1")
            .fetch_one(&self.pool)
            .await
            .map(|v| v == 1)
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Health check failed", e))
    }
}
