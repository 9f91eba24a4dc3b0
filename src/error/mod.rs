//! API Error Module
//!
//! This module defines the error taxonomy for the HTTP API.
//! Every handler returns `Result<_, ApiError>`; the conversion submodule
//! turns each variant into the matching HTTP status and a JSON body.
//!
//! # Module Structure
//!
//! ```text
//! error/
//! ├── mod.rs        - Module exports
//! ├── types.rs      - Error type definitions
//! └── conversion.rs - IntoResponse implementation
//! ```

/// Error type definitions
pub mod types;

/// Error conversion implementations
pub mod conversion;

// Re-export commonly used types
pub use types::ApiError;
