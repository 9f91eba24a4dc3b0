//! Route Configuration Module
//!
//! This module configures all HTTP routes for the backend server.
//!
//! # Module Structure
//!
//! ```text
//! routes/
//! ├── mod.rs        - Module exports
//! ├── router.rs     - Top-level router assembly (API + uploads + layers)
//! └── api_routes.rs - The /api route table
//! ```

/// API endpoint route table
pub mod api_routes;

/// Main router creation
pub mod router;

pub use router::create_router;
