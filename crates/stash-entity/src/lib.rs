//! # stash-entity
//!
//! Domain entity models for Stash: users and files.

pub mod file;
pub mod user;

pub use file::{File, FileKind, NewFile, ROOT_PARENT};
pub use user::{NewUser, User};
