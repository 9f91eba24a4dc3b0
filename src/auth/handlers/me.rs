/**
 * Get Current User Handler
 *
 * Handler for GET /api/me: returns the authenticated user's own record.
 * The bearer token has already been verified by the middleware; this
 * handler only has to fetch the row.
 */

use axum::{extract::State, response::Json};
use sqlx::PgPool;

use crate::auth::handlers::types::UserResponse;
use crate::auth::users::get_user_by_id;
use crate::error::ApiError;
use crate::middleware::auth::AuthUser;

/// Get current user handler
///
/// # Errors
///
/// * `404 Not Found` - the identity in the token no longer has a row.
///   No endpoint deletes users, but a row removed out-of-band must not
///   turn into a 500.
pub async fn get_me(
    State(pool): State<PgPool>,
    user: AuthUser,
) -> Result<Json<UserResponse>, ApiError> {
    let record = get_user_by_id(&pool, user.user_id)
        .await?
        .ok_or_else(|| {
            tracing::warn!("Authenticated user {} has no row", user.user_id);
            ApiError::NotFound("User not found".to_string())
        })?;

    Ok(Json(UserResponse::from(record)))
}
