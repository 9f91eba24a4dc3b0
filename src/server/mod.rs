//! Server Module
//!
//! Startup concerns: configuration loading, shared application state,
//! and assembly of the Axum application.

/// Environment-driven configuration
pub mod config;

/// Application initialization
pub mod init;

/// Shared application state
pub mod state;

pub use config::AppConfig;
pub use init::create_app;
pub use state::AppState;
