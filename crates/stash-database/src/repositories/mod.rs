//! Persistent-store contracts and their sqlx implementations.
//!
//! The [`UserStore`] and [`FileStore`] traits are the narrow contracts the
//! rest of the application consumes from the document store: CRUD with
//! filter-by-field lookups over the two collections, plus `count` and a
//! liveness check. Production uses the `Pg*` implementations; tests
//! substitute in-memory fakes implementing the same contracts.

pub mod file;
pub mod user;

use async_trait::async_trait;

use stash_core::result::AppResult;
use stash_core::types::pagination::Page;
use stash_entity::file::{File, NewFile};
use stash_entity::user::{NewUser, User};

pub use file::PgFileStore;
pub use user::PgUserStore;

/// Store contract for the users collection.
#[async_trait]
pub trait UserStore: Send + Sync + std::fmt::Debug + 'static {
    /// Insert a new user and return the stored record.
    async fn insert(&self, user: &NewUser) -> AppResult<User>;

    /// Find a user by primary key.
    async fn find_by_id(&self, id: i64) -> AppResult<Option<User>>;

    /// Find a user by email (case-insensitive).
    async fn find_by_email(&self, email: &str) -> AppResult<Option<User>>;

    /// Count all users.
    async fn count(&self) -> AppResult<u64>;

    /// Check store connectivity.
    async fn health_check(&self) -> AppResult<bool>;
}

/// Store contract for the files collection.
#[async_trait]
pub trait FileStore: Send + Sync + std::fmt::Debug + 'static {
    /// Insert a new file record and return it.
    async fn insert(&self, file: &NewFile) -> AppResult<File>;

    /// Find a file by primary key.
    async fn find_by_id(&self, id: i64) -> AppResult<Option<File>>;

    /// List one page of a user's files under the given parent, in stable
    /// insertion order.
    async fn find_by_owner_and_parent(
        &self,
        owner_id: i64,
        parent_id: i64,
        page: &Page,
    ) -> AppResult<Vec<File>>;

    /// Update a file's visibility flag and return the updated record, or
    /// `None` if the file does not exist.
    async fn set_visibility(&self, id: i64, is_public: bool) -> AppResult<Option<File>>;

    /// Count all files.
    async fn count(&self) -> AppResult<u64>;

    /// Check store connectivity.
    async fn health_check(&self) -> AppResult<bool>;
}
