//! HTTP handlers, one module per resource.

pub mod app;
pub mod auth;
pub mod file;
pub mod user;
