//! Blog Module
//!
//! Blog post persistence and HTTP handlers. Posts are plain relational
//! rows, optionally tagged with an author, ordered newest-first by default.

/// Blog model and database operations
pub mod db;

/// HTTP handlers for the blog endpoints
pub mod handlers;
