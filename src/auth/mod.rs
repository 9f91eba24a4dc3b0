//! Authentication Module
//!
//! Credential storage, password hashing, and bearer-token issuance for the
//! account endpoints.
//!
//! # Module Structure
//!
//! ```text
//! auth/
//! ├── mod.rs       - Module exports
//! ├── password.rs  - bcrypt hash/verify
//! ├── tokens.rs    - token issuer and verifier
//! ├── users.rs     - user model and database operations
//! └── handlers/    - HTTP handlers for the account endpoints
//! ```

/// HTTP handlers for signup, login, and profile management
pub mod handlers;

/// Password hashing and verification
pub mod password;

/// Bearer-token issuance and verification
pub mod tokens;

/// User model and database operations
pub mod users;
