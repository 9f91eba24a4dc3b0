//! Account Endpoint Handlers
//!
//! HTTP handlers for the account lifecycle:
//!
//! - `POST /api/signup`   - create an account
//! - `POST /api/login`    - authenticate, receive a bearer token
//! - `GET /api/me`        - fetch own record (authenticated)
//! - `PUT /api/profile`   - partial profile update, optional picture (authenticated)
//! - `PUT /api/personal`  - replace identity fields (authenticated)
//! - `PUT /api/password`  - change password (authenticated)

/// Login handler
pub mod login;

/// Get-current-user handler
pub mod me;

/// Password change handler
pub mod password_change;

/// Personal info (identity fields) handler
pub mod personal;

/// Profile update handler
pub mod profile;

/// Signup handler
pub mod signup;

/// Request and response types
pub mod types;

pub use login::login;
pub use me::get_me;
pub use password_change::change_password;
pub use personal::update_personal;
pub use profile::update_profile;
pub use signup::signup;
