//! Middleware Module
//!
//! HTTP middleware for the backend server. Currently only the
//! bearer-token authentication gate.

pub mod auth;

pub use auth::{require_auth, AuthUser};
