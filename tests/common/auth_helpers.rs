//! Authentication test helpers

#![allow(dead_code)]

use sqlx::PgPool;

use blogit::auth::password::hash_password;
use blogit::auth::tokens::TokenKeys;
use blogit::auth::users::{create_user, NewUser, User};

/// A created test user plus a valid token for it
pub struct TestUser {
    pub user: User,
    pub password: String,
    pub token: String,
}

/// Create a user directly in the database and issue a token for it
pub async fn create_test_user(
    pool: &PgPool,
    token_keys: &TokenKeys,
    username: &str,
    email: &str,
    password: &str,
) -> TestUser {
    let password_hash = hash_password(password).expect("failed to hash test password");

    let user = create_user(
        pool,
        NewUser {
            first_name: "Test".to_string(),
            last_name: "User".to_string(),
            email: email.to_string(),
            username: username.to_string(),
            password_hash,
        },
    )
    .await
    .expect("failed to create test user");

    let token = token_keys
        .issue(user.id, &user.username)
        .expect("failed to issue test token");

    TestUser {
        user,
        password: password.to_string(),
        token,
    }
}
