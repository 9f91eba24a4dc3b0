/**
 * Signup Handler
 *
 * This module implements the user registration handler for POST /api/signup.
 *
 * # Registration Process
 *
 * 1. Check for an existing user with the same email or username
 * 2. Hash the password
 * 3. Create the user in the database
 * 4. Return the created record (public projection only)
 *
 * # Concurrency
 *
 * The existence check is not transactional with the insert. Two concurrent
 * signups with the same email can both pass the check; the second insert
 * then fails on the unique constraint, which is mapped to the same Conflict
 * answer the pre-check would have given.
 */

use axum::{extract::State, http::StatusCode, response::Json};
use sqlx::PgPool;

use crate::auth::handlers::types::{SignupRequest, UserEnvelope, UserResponse};
use crate::auth::password::hash_password;
use crate::auth::users::{create_user, email_or_username_taken, NewUser};
use crate::error::{types::is_unique_violation, ApiError};

/// Sign up handler
///
/// # Errors
///
/// * `400 Conflict` - email or username already registered
/// * `500 Internal Server Error` - hashing or persistence failure
pub async fn signup(
    State(pool): State<PgPool>,
    Json(request): Json<SignupRequest>,
) -> Result<(StatusCode, Json<UserEnvelope>), ApiError> {
    tracing::info!(
        "Signup request for username: {}, email: {}",
        request.username,
        request.email
    );

    if email_or_username_taken(&pool, &request.email, &request.username, None).await? {
        tracing::warn!("Signup collision for username: {}", request.username);
        return Err(ApiError::Conflict(
            "Email or username already exists".to_string(),
        ));
    }

    let password_hash = hash_password(&request.password)?;

    let user = create_user(
        &pool,
        NewUser {
            first_name: request.first_name,
            last_name: request.last_name,
            email: request.email,
            username: request.username,
            password_hash,
        },
    )
    .await
    .map_err(|e| {
        if is_unique_violation(&e) {
            // Lost the race against a concurrent signup
            ApiError::Conflict("Email or username already exists".to_string())
        } else {
            e.into()
        }
    })?;

    tracing::info!("User created: {} ({})", user.username, user.id);

    Ok((
        StatusCode::CREATED,
        Json(UserEnvelope {
            message: "Account created".to_string(),
            user: UserResponse::from(user),
        }),
    ))
}
