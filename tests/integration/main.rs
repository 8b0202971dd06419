//! End-to-end tests running the full router over in-memory backends.

mod helpers;

mod app_test;
mod auth_test;
mod user_test;
