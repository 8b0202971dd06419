//! # stash-api
//!
//! HTTP API layer for Stash: the axum router, the access-gate extractors,
//! request/response DTOs, and the mapping from domain errors to response
//! codes.

pub mod dto;
pub mod error;
pub mod extractors;
pub mod handlers;
pub mod router;
pub mod state;

pub use error::ApiError;
pub use router::build_router;
pub use state::AppState;
