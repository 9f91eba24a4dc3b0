//! Blogit backend
//!
//! A CRUD backend for a blogging platform: account management (signup,
//! login, profile editing, password change) behind stateless bearer-token
//! authentication, and blog post management with image uploads.

/// Authentication: password hashing, token issuance, user persistence, handlers
pub mod auth;

/// Blog posts: persistence and handlers
pub mod blog;

/// API error taxonomy and HTTP conversion
pub mod error;

/// HTTP middleware (bearer-token gate)
pub mod middleware;

/// Route configuration
pub mod routes;

/// Configuration, state, and server assembly
pub mod server;

/// Disk storage for uploaded images
pub mod uploads;
