//! Request extractors — the access gate.

pub mod auth;

pub use auth::{AuthUser, MaybeAuthUser};
