/**
 * Personal Info Handler
 *
 * Handler for PUT /api/personal: replaces the identity fields (first name,
 * last name, email, username). Uses the same uniqueness rule as signup,
 * except the caller's own row is excluded so unchanged values pass.
 */

use axum::{extract::State, response::Json};
use sqlx::PgPool;

use crate::auth::handlers::types::{PersonalInfoRequest, UserEnvelope, UserResponse};
use crate::auth::users::{email_or_username_taken, update_personal as persist_personal};
use crate::error::{types::is_unique_violation, ApiError};
use crate::middleware::auth::AuthUser;

/// Identity-fields update handler
///
/// # Errors
///
/// * `400 Conflict` - the email or username belongs to a different user
/// * `404 Not Found` - the authenticated user's row is gone
pub async fn update_personal(
    State(pool): State<PgPool>,
    user: AuthUser,
    Json(request): Json<PersonalInfoRequest>,
) -> Result<Json<UserEnvelope>, ApiError> {
    if email_or_username_taken(&pool, &request.email, &request.username, Some(user.user_id))
        .await?
    {
        tracing::warn!("Personal info collision for user {}", user.user_id);
        return Err(ApiError::Conflict("Email or username taken".to_string()));
    }

    let record = persist_personal(
        &pool,
        user.user_id,
        &request.first_name,
        &request.last_name,
        &request.email,
        &request.username,
    )
    .await
    .map_err(|e| {
        if is_unique_violation(&e) {
            ApiError::Conflict("Email or username taken".to_string())
        } else {
            e.into()
        }
    })?
    .ok_or_else(|| ApiError::NotFound("User not found".to_string()))?;

    tracing::info!("Personal info updated for user {}", user.user_id);

    Ok(Json(UserEnvelope {
        message: "Personal info updated".to_string(),
        user: UserResponse::from(record),
    }))
}
