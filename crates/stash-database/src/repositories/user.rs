//! User repository implementation.

use async_trait::async_trait;
use sqlx::PgPool;

use stash_core::error::{AppError, ErrorKind};
use stash_core::result::AppResult;
use stash_entity::user::{NewUser, User};

use super::UserStore;

/// sqlx-backed store for the users collection.
#[derive(Debug, Clone)]
pub struct PgUserStore {
    pool: PgPool,
}

impl PgUserStore {
    /// Create a new user store over the given pool.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl UserStore for PgUserStore {
    async fn insert(&self, user: &NewUser) -> AppResult<User> {
        sqlx::query_as::<_, User>(
            "INSERT INTO users (email, password_digest) VALUES ($1, $2) RETURNING *",
        )
        .bind(&user.email)
        .bind(&user.password_digest)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            // A concurrent registration can slip past the service's
            // existence check and trip the unique email index; report it
            // the same way as the pre-checked duplicate.
            if e.as_database_error()
                .is_some_and(|db| db.is_unique_violation())
            {
                AppError::validation("Already exists")
            } else {
                AppError::with_source(ErrorKind::Database, "Failed to insert user", e)
            }
        })
    }

    async fn find_by_id(&self, id: i64) -> AppResult<Option<User>> {
        sqlx::query_as::<_, User>("SELECT * FROM users WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to find user by id", e))
    }

    async fn find_by_email(&self, email: &str) -> AppResult<Option<User>> {
        sqlx::query_as::<_, User>("SELECT * FROM users WHERE LOWER(email) = LOWER($1)")
            .bind(email)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to find user by email", e)
            })
    }

    async fn count(&self) -> AppResult<u64> {
        let total: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM users")
            .fetch_one(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to count users", e))?;
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
