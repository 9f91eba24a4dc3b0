/**
 * API Error Types
 *
 * This module defines the error type shared by all HTTP handlers.
 * Each variant maps to exactly one HTTP status code, and internal detail
 * is logged server-side rather than returned to the client.
 *
 * # Status Code Mapping
 *
 * - `Conflict` - 400 (uniqueness violation, friendly message)
 * - `InvalidCredentials` - 400 (login or password-change mismatch)
 * - `Unauthenticated` - 401 (no bearer token presented)
 * - `Forbidden` - 403 (token present but invalid or expired)
 * - `NotFound` - 404
 * - `BadRequest` - 400 (malformed request body)
 * - `Database` - 500, except unique-constraint violations which surface
 *   as 400 so a write racing past the pre-check gets the same answer
 * - `Io` / `Internal` - 500 with a generic message
 */

use axum::http::StatusCode;
use thiserror::Error;

/// Postgres error code for unique-constraint violations.
const UNIQUE_VIOLATION: &str = "23505";

/// Error type returned by all API handlers
#[derive(Debug, Error)]
pub enum ApiError {
    /// A uniqueness invariant would be violated (email, username, secondary email)
    #[error("{0}")]
    Conflict(String),

    /// Login or password verification failed. Deliberately carries no detail:
    /// "no such user" and "wrong password" must be indistinguishable.
    #[error("Invalid credentials")]
    InvalidCredentials,

    /// No bearer token was presented on a protected route
    #[error("Access denied")]
    Unauthenticated,

    /// A bearer token was presented but its signature or expiry check failed
    #[error("Invalid token")]
    Forbidden,

    /// The requested record does not exist
    #[error("{0}")]
    NotFound(String),

    /// The request body is malformed or missing a required part
    #[error("{0}")]
    BadRequest(String),

    /// Persistence failure
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Filesystem failure while storing an upload
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Any other unexpected failure
    #[error("Internal error: {0}")]
    Internal(String),
}

impl ApiError {
    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::Conflict(_) => StatusCode::BAD_REQUEST,
            Self::InvalidCredentials => StatusCode::BAD_REQUEST,
            Self::Unauthenticated => StatusCode::UNAUTHORIZED,
            Self::Forbidden => StatusCode::FORBIDDEN,
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::BadRequest(_) => StatusCode::BAD_REQUEST,
            Self::Database(err) if is_unique_violation(err) => StatusCode::BAD_REQUEST,
            Self::Database(_) | Self::Io(_) | Self::Internal(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    /// Get the client-facing message for this error
    ///
    /// Internal failures are collapsed to a generic message; the detailed
    /// cause is logged in `into_response` and never leaves the server.
    pub fn message(&self) -> String {
        match self {
            Self::Conflict(msg) | Self::NotFound(msg) | Self::BadRequest(msg) => msg.clone(),
            Self::InvalidCredentials => "Invalid credentials".to_string(),
            Self::Unauthenticated => "Access denied".to_string(),
            Self::Forbidden => "Invalid token".to_string(),
            Self::Database(err) if is_unique_violation(err) => {
                "Record already exists".to_string()
            }
            Self::Database(_) | Self::Io(_) | Self::Internal(_) => {
                "Internal server error".to_string()
            }
        }
    }
}

/// Check whether a sqlx error is a Postgres unique-constraint violation.
///
/// The pre-write existence queries only exist for a friendly message; the
/// constraint itself is what actually guarantees uniqueness under concurrent
/// writes, so its violation must map to the same Conflict answer.
pub fn is_unique_violation(err: &sqlx::Error) -> bool {
    match err {
        sqlx::Error::Database(db) => db.code().as_deref() == Some(UNIQUE_VIOLATION),
        _ => false,
    }
}
