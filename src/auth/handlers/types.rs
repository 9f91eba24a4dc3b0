/**
 * Account Handler Types
 *
 * Request and response types for the account endpoints. Wire field names
 * are camelCase, matching the original clients.
 *
 * `UserResponse` is the only outbound projection of a user record; the
 * password digest has no representation here and can never serialize into
 * a response.
 */

use serde::{Deserialize, Serialize};

use crate::auth::users::User;

/// Sign up request
#[derive(Deserialize, Serialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct SignupRequest {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub username: String,
    /// Plaintext password; hashed before storage, never stored or logged
    pub password: String,
}

/// Login request
///
/// `identifier` matches either the email or the username.
#[derive(Deserialize, Serialize, Debug)]
pub struct LoginRequest {
    pub identifier: String,
    pub password: String,
}

/// Identity-fields update request
#[derive(Deserialize, Serialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct PersonalInfoRequest {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub username: String,
}

/// Password change request
#[derive(Deserialize, Serialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct ChangePasswordRequest {
    pub old_password: String,
    pub new_password: String,
}

/// Public-safe user projection (no password digest)
#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct UserResponse {
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub username: String,
    pub phone: Option<String>,
    pub bio: Option<String>,
    pub occupation: Option<String>,
    pub status: Option<String>,
    pub secondary_email: Option<String>,
    pub profile_picture: Option<String>,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            first_name: user.first_name,
            last_name: user.last_name,
            email: user.email,
            username: user.username,
            phone: user.phone,
            bio: user.bio,
            occupation: user.occupation,
            status: user.status,
            secondary_email: user.secondary_email,
            profile_picture: user.profile_picture,
        }
    }
}

/// Login response: token plus the user projection
#[derive(Serialize, Debug)]
pub struct AuthResponse {
    pub message: String,
    pub token: String,
    pub user: UserResponse,
}

/// Response carrying a message and the affected user
#[derive(Serialize, Debug)]
pub struct UserEnvelope {
    pub message: String,
    pub user: UserResponse,
}

/// Plain acknowledgement
#[derive(Serialize, Debug)]
pub struct MessageResponse {
    pub message: String,
}
