/**
 * Profile Update Handler
 *
 * Handler for PUT /api/profile: partial update of the non-identity profile
 * fields, with an optional profile picture upload. The request body is
 * multipart form data; text parts are merged field-by-field and only a
 * supplied file part replaces the stored picture path.
 */

use axum::{
    extract::{Multipart, State},
    response::Json,
};

use crate::auth::handlers::types::{UserEnvelope, UserResponse};
use crate::auth::users::{secondary_email_taken, update_profile as persist_profile, ProfileUpdate};
use crate::error::{types::is_unique_violation, ApiError};
use crate::middleware::auth::AuthUser;
use crate::server::state::AppState;
use crate::uploads::save_upload;

/// Profile update handler
///
/// Multipart fields: `phone`, `bio`, `occupation`, `status`,
/// `secondaryEmail` (text, all optional) and `profilePicture` (file,
/// optional). Omitted fields keep their stored value.
///
/// # Errors
///
/// * `400 Conflict` - the supplied secondary email belongs to another user
/// * `404 Not Found` - the authenticated user's row is gone
/// * `500 Internal Server Error` - storage or persistence failure
pub async fn update_profile(
    State(state): State<AppState>,
    user: AuthUser,
    mut multipart: Multipart,
) -> Result<Json<UserEnvelope>, ApiError> {
    let mut update = ProfileUpdate::default();

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| ApiError::BadRequest(format!("Malformed multipart body: {e}")))?
    {
        let name = field.name().unwrap_or_default().to_string();

        match name.as_str() {
            "phone" => update.phone = Some(read_text(field).await?),
            "bio" => update.bio = Some(read_text(field).await?),
            "occupation" => update.occupation = Some(read_text(field).await?),
            "status" => update.status = Some(read_text(field).await?),
            "secondaryEmail" => update.secondary_email = Some(read_text(field).await?),
            "profilePicture" => {
                let original_name = field
                    .file_name()
                    .unwrap_or("profile-picture")
                    .to_string();
                let bytes = field
                    .bytes()
                    .await
                    .map_err(|e| ApiError::BadRequest(format!("Failed to read upload: {e}")))?;
                let path = save_upload(&state.uploads_dir, &original_name, &bytes).await?;
                update.profile_picture = Some(path);
            }
            other => {
                tracing::debug!("Ignoring unknown profile field: {}", other);
            }
        }
    }

    if let Some(secondary) = update.secondary_email.as_deref() {
        if !secondary.is_empty()
            && secondary_email_taken(&state.pool, secondary, user.user_id).await?
        {
            return Err(ApiError::Conflict(
                "Secondary email already taken".to_string(),
            ));
        }
    }

    let record = persist_profile(&state.pool, user.user_id, update)
        .await
        .map_err(|e| {
            if is_unique_violation(&e) {
                ApiError::Conflict("Secondary email already taken".to_string())
            } else {
                e.into()
            }
        })?
        .ok_or_else(|| ApiError::NotFound("User not found".to_string()))?;

    tracing::info!("Profile updated for user {}", user.user_id);

    Ok(Json(UserEnvelope {
        message: "Profile updated".to_string(),
        user: UserResponse::from(record),
    }))
}

async fn read_text(field: axum::extract::multipart::Field<'_>) -> Result<String, ApiError> {
    field
        .text()
        .await
        .map_err(|e| ApiError::BadRequest(format!("Malformed multipart field: {e}")))
}
