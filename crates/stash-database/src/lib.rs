//! # stash-database
//!
//! PostgreSQL connection management and the persistent-store contracts
//! ([`UserStore`](repositories::UserStore), [`FileStore`](repositories::FileStore))
//! together with their sqlx implementations. Services depend on the
//! contracts only; tests substitute in-memory fakes.

pub mod connection;
pub mod migration;
pub mod repositories;

pub use connection::DatabasePool;
pub use repositories::{FileStore, PgFileStore, PgUserStore, UserStore};
