/**
 * User Model and Database Operations
 *
 * This module handles user data and database operations.
 *
 * Uniqueness of email, username, and secondary email is ultimately enforced
 * by the database constraints; the `*_taken` probes here only exist to give
 * a friendly error before the write is attempted.
 */

use chrono::{DateTime, Utc};
use sqlx::PgPool;

/// User struct representing a user in the database
///
/// Never serialized directly; responses go through `UserResponse`, which
/// carries no digest field.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct User {
    /// Unique user id
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
    /// Email address (unique)
    pub email: String,
    /// Username (unique)
    pub username: String,
    /// Hashed password (bcrypt)
    pub password_hash: String,
    pub phone: Option<String>,
    pub bio: Option<String>,
    pub occupation: Option<String>,
    pub status: Option<String>,
    /// Secondary email, unique across users when present
    pub secondary_email: Option<String>,
    /// Path to the stored profile picture, e.g. "/uploads/1693-avatar.png"
    pub profile_picture: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Fields required to create a new user
#[derive(Debug)]
pub struct NewUser {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub username: String,
    pub password_hash: String,
}

/// Partial profile update; `None` fields are left unchanged
///
/// `secondary_email` has a third state: `Some("")` clears the stored value
/// back to NULL, so a user can remove their secondary email.
#[derive(Debug, Default)]
pub struct ProfileUpdate {
    pub phone: Option<String>,
    pub bio: Option<String>,
    pub occupation: Option<String>,
    pub status: Option<String>,
    pub secondary_email: Option<String>,
    pub profile_picture: Option<String>,
}

const USER_COLUMNS: &str = "id, first_name, last_name, email, username, password_hash, \
     phone, bio, occupation, status, secondary_email, profile_picture, created_at, updated_at";

/// Create a new user
///
/// # Errors
///
/// A unique-constraint violation (concurrent signup racing past the
/// pre-check) surfaces as `sqlx::Error` and is mapped to Conflict by the
/// error layer.
pub async fn create_user(pool: &PgPool, new_user: NewUser) -> Result<User, sqlx::Error> {
    let query = format!(
        "INSERT INTO users (first_name, last_name, email, username, password_hash)
         VALUES ($1, $2, $3, $4, $5)
         RETURNING {USER_COLUMNS}"
    );

    sqlx::query_as::<_, User>(&query)
        .bind(&new_user.first_name)
        .bind(&new_user.last_name)
        .bind(&new_user.email)
        .bind(&new_user.username)
        .bind(&new_user.password_hash)
        .fetch_one(pool)
        .await
}

/// Get user by id
pub async fn get_user_by_id(pool: &PgPool, id: i64) -> Result<Option<User>, sqlx::Error> {
    let query = format!("SELECT {USER_COLUMNS} FROM users WHERE id = $1");

    sqlx::query_as::<_, User>(&query)
        .bind(id)
        .fetch_optional(pool)
        .await
}

/// Get user by login identifier (email or username)
pub async fn get_user_by_identifier(
    pool: &PgPool,
    identifier: &str,
) -> Result<Option<User>, sqlx::Error> {
    let query = format!("SELECT {USER_COLUMNS} FROM users WHERE email = $1 OR username = $1");

    sqlx::query_as::<_, User>(&query)
        .bind(identifier)
        .fetch_optional(pool)
        .await
}

/// Check whether an email or username is already taken
///
/// `exclude_id` skips the caller's own row so a user can re-submit their
/// current values (used by the personal-info update; signup passes `None`).
pub async fn email_or_username_taken(
    pool: &PgPool,
    email: &str,
    username: &str,
    exclude_id: Option<i64>,
) -> Result<bool, sqlx::Error> {
    sqlx::query_scalar::<_, bool>(
        "SELECT EXISTS (
             SELECT 1 FROM users
             WHERE (email = $1 OR username = $2)
               AND ($3::BIGINT IS NULL OR id <> $3)
         )",
    )
    .bind(email)
    .bind(username)
    .bind(exclude_id)
    .fetch_one(pool)
    .await
}

/// Check whether a secondary email is used by a different user
pub async fn secondary_email_taken(
    pool: &PgPool,
    secondary_email: &str,
    exclude_id: i64,
) -> Result<bool, sqlx::Error> {
    sqlx::query_scalar::<_, bool>(
        "SELECT EXISTS (
             SELECT 1 FROM users
             WHERE secondary_email = $1 AND id <> $2
         )",
    )
    .bind(secondary_email)
    .bind(exclude_id)
    .fetch_one(pool)
    .await
}

/// Apply a partial profile update
///
/// Fields left as `None` keep their current value. An empty-string
/// secondary email is normalized to NULL, clearing it.
pub async fn update_profile(
    pool: &PgPool,
    id: i64,
    update: ProfileUpdate,
) -> Result<Option<User>, sqlx::Error> {
    let query = format!(
        "UPDATE users
         SET phone = COALESCE($2, phone),
             bio = COALESCE($3, bio),
             occupation = COALESCE($4, occupation),
             status = COALESCE($5, status),
             secondary_email = CASE WHEN $6 IS NULL THEN secondary_email
                                    ELSE NULLIF($6, '') END,
             profile_picture = COALESCE($7, profile_picture),
             updated_at = now()
         WHERE id = $1
         RETURNING {USER_COLUMNS}"
    );

    sqlx::query_as::<_, User>(&query)
        .bind(id)
        .bind(update.phone)
        .bind(update.bio)
        .bind(update.occupation)
        .bind(update.status)
        .bind(update.secondary_email)
        .bind(update.profile_picture)
        .fetch_optional(pool)
        .await
}

/// Replace the identity fields (name, email, username)
pub async fn update_personal(
    pool: &PgPool,
    id: i64,
    first_name: &str,
    last_name: &str,
    email: &str,
    username: &str,
) -> Result<Option<User>, sqlx::Error> {
    let query = format!(
        "UPDATE users
         SET first_name = $2, last_name = $3, email = $4, username = $5, updated_at = now()
         WHERE id = $1
         RETURNING {USER_COLUMNS}"
    );

    sqlx::query_as::<_, User>(&query)
        .bind(id)
        .bind(first_name)
        .bind(last_name)
        .bind(email)
        .bind(username)
        .fetch_optional(pool)
        .await
}

/// Store a new password digest
pub async fn update_password(
    pool: &PgPool,
    id: i64,
    password_hash: &str,
) -> Result<(), sqlx::Error> {
    sqlx::query("UPDATE users SET password_hash = $2, updated_at = now() WHERE id = $1")
        .bind(id)
        .bind(password_hash)
        .execute(pool)
        .await?;

    Ok(())
}
