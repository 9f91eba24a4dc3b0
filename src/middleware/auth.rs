/**
 * Authentication Middleware
 *
 * This module provides the middleware protecting authenticated routes.
 * It extracts the bearer token from the Authorization header, verifies it,
 * and attaches the authenticated identity to the request.
 *
 * # Contract
 *
 * A linear two-state gate, terminal either way per request:
 *
 * - No token presented  -> 401, the handler never runs
 * - Token invalid/expired -> 403, the handler never runs
 * - Token valid -> `AuthUser` is inserted into request extensions and the
 *   handler runs
 */

use axum::{
    extract::{FromRequestParts, Request, State},
    http::{header::AUTHORIZATION, request::Parts},
    middleware::Next,
    response::Response,
};

use crate::auth::tokens::TokenKeys;
use crate::error::ApiError;

/// Authenticated identity extracted from a verified bearer token
#[derive(Clone, Debug)]
pub struct AuthUser {
    pub user_id: i64,
    pub username: String,
}

/// Pull the bearer credential out of a raw Authorization header value
///
/// The credential is the second whitespace-separated token ("Bearer <token>").
fn bearer_token(header: Option<&str>) -> Option<&str> {
    header.and_then(|value| value.split_whitespace().nth(1))
}

/// Authentication middleware for protected routes
///
/// # Errors
///
/// * `401 Unauthorized` - no Authorization header, or no token after the scheme
/// * `403 Forbidden` - token present but signature or expiry check failed
pub async fn require_auth(
    State(token_keys): State<TokenKeys>,
    mut request: Request,
    next: Next,
) -> Result<Response, ApiError> {
    let header = request
        .headers()
        .get(AUTHORIZATION)
        .and_then(|h| h.to_str().ok());

    let token = bearer_token(header).ok_or_else(|| {
        tracing::warn!("Missing bearer token");
        ApiError::Unauthenticated
    })?;

    // verify() already maps signature/expiry failures to Forbidden
    let claims = token_keys.verify(token)?;
    let user_id = claims.user_id()?;

    request.extensions_mut().insert(AuthUser {
        user_id,
        username: claims.username,
    });

    Ok(next.run(request).await)
}

impl<S> FromRequestParts<S> for AuthUser
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts.extensions.get::<AuthUser>().cloned().ok_or_else(|| {
            tracing::warn!("AuthUser not found in request extensions");
            ApiError::Unauthenticated
        })
    }
}
