/**
 * Password Hashing
 *
 * One-way transform for storing and verifying account secrets.
 *
 * # Security
 *
 * - bcrypt with a fixed work factor of 10 (matching the existing stored
 *   digests, which must keep verifying)
 * - A fresh salt is baked into every digest, so hashing the same input
 *   twice produces different digests
 * - Comparison is delegated to bcrypt; no hand-rolled equality
 * - A malformed digest verifies as false instead of surfacing an error,
 *   so callers treat it exactly like a wrong password
 */

use crate::error::ApiError;

/// bcrypt work factor used for all new digests.
const BCRYPT_COST: u32 = 10;

/// Hash a plaintext password for storage
///
/// # Errors
///
/// Fails only if bcrypt itself errors, which is mapped to an internal
/// error; it never exposes the plaintext.
pub fn hash_password(plain: &str) -> Result<String, ApiError> {
    bcrypt::hash(plain, BCRYPT_COST)
        .map_err(|e| ApiError::Internal(format!("password hashing failed: {e}")))
}

/// Verify a plaintext password against a stored digest
///
/// Returns `false` for a mismatch *and* for a malformed digest; the caller
/// never needs to distinguish the two.
pub fn verify_password(plain: &str, digest: &str) -> bool {
    bcrypt::verify(plain, digest).unwrap_or(false)
}
