//! # stash-service
//!
//! Business logic for Stash. Services receive their collaborators
//! (stores, content store) as injected handles constructed once at
//! process start; tests substitute in-memory fakes implementing the same
//! narrow contracts.

pub mod context;
pub mod file;
pub mod user;

#[cfg(test)]
pub(crate) mod testing;

pub use context::RequestContext;
pub use file::{CreateFileInput, FileContent, FileService};
pub use user::UserService;
