/**
 * Password Change Handler
 *
 * Handler for PUT /api/password: verifies the old password, then stores a
 * digest of the new one. No strength validation is applied. Outstanding
 * bearer tokens remain valid until their natural expiry; there is no
 * revocation.
 */

use axum::{extract::State, response::Json};
use sqlx::PgPool;

use crate::auth::handlers::types::{ChangePasswordRequest, MessageResponse};
use crate::auth::password::{hash_password, verify_password};
use crate::auth::users::{get_user_by_id, update_password};
use crate::error::ApiError;
use crate::middleware::auth::AuthUser;

/// Password change handler
///
/// # Errors
///
/// * `400 Bad Request` - the old password does not match the stored digest
/// * `404 Not Found` - the authenticated user's row is gone
pub async fn change_password(
    State(pool): State<PgPool>,
    user: AuthUser,
    Json(request): Json<ChangePasswordRequest>,
) -> Result<Json<MessageResponse>, ApiError> {
    let record = get_user_by_id(&pool, user.user_id)
        .await?
        .ok_or_else(|| ApiError::NotFound("User not found".to_string()))?;

    if !verify_password(&request.old_password, &record.password_hash) {
        tracing::warn!("Password change rejected for user {}", user.user_id);
        return Err(ApiError::InvalidCredentials);
    }

    let new_hash = hash_password(&request.new_password)?;
    update_password(&pool, user.user_id, &new_hash).await?;

    tracing::info!("Password updated for user {}", user.user_id);

    Ok(Json(MessageResponse {
        message: "Password updated".to_string(),
    }))
}
