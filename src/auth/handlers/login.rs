/**
 * Login Handler
 *
 * This module implements the authentication handler for POST /api/login.
 *
 * # Authentication Process
 *
 * 1. Look up the user by identifier (email or username)
 * 2. Verify the password against the stored digest
 * 3. Issue a bearer token bound to the user id and username
 *
 * # Security
 *
 * - An unknown identifier and a wrong password return the identical error,
 *   so the endpoint cannot be used to enumerate accounts
 * - Password comparison is delegated to bcrypt
 * - The stored digest never appears in the response
 */

use axum::{extract::State, response::Json};
use sqlx::PgPool;

use crate::auth::handlers::types::{AuthResponse, LoginRequest, UserResponse};
use crate::auth::password::verify_password;
use crate::auth::tokens::TokenKeys;
use crate::auth::users::get_user_by_identifier;
use crate::error::ApiError;

/// Login handler
///
/// # Errors
///
/// * `400 Bad Request` - unknown identifier or wrong password (identical answers)
/// * `500 Internal Server Error` - persistence or signing failure
pub async fn login(
    State(pool): State<PgPool>,
    State(token_keys): State<TokenKeys>,
    Json(request): Json<LoginRequest>,
) -> Result<Json<AuthResponse>, ApiError> {
    tracing::info!("Login request for: {}", request.identifier);

    let user = get_user_by_identifier(&pool, &request.identifier)
        .await?
        .ok_or_else(|| {
            tracing::warn!("Login failed for: {}", request.identifier);
            ApiError::InvalidCredentials
        })?;

    if !verify_password(&request.password, &user.password_hash) {
        tracing::warn!("Login failed for: {}", request.identifier);
        return Err(ApiError::InvalidCredentials);
    }

    let token = token_keys.issue(user.id, &user.username)?;

    tracing::info!("User logged in: {} ({})", user.username, user.id);

    Ok(Json(AuthResponse {
        message: "Login successful".to_string(),
        token,
        user: UserResponse::from(user),
    }))
}
