// crates/backend-lib/src/middleware/mod.rs

//! Middleware for the taskboard backend.

pub mod auth;

pub use auth::{require_auth, AuthUser};
