//! File hierarchy management.

pub mod service;

pub use service::{CreateFileInput, FileContent, FileService};
