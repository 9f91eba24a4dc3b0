/**
 * Application State Management
 *
 * This module defines the application state structure and implements
 * the `FromRef` conversions for Axum state extraction.
 *
 * # Architecture
 *
 * `AppState` is the central state container, holding:
 * - The Postgres connection pool
 * - The token keys (signing secret loaded once at startup)
 * - The uploads directory path
 *
 * # State Extraction
 *
 * The `FromRef` implementations let handlers extract only the part of the
 * state they need (`State<PgPool>`, `State<TokenKeys>`) without taking the
 * entire `AppState`.
 */

use std::path::PathBuf;

use axum::extract::FromRef;
use sqlx::PgPool;

use crate::auth::tokens::TokenKeys;

/// Application state shared across all handlers
///
/// All fields are cheap to clone: the pool is reference-counted internally
/// and the token keys are behind an `Arc`.
#[derive(Clone)]
pub struct AppState {
    /// Postgres connection pool
    pub pool: PgPool,

    /// Token issuer/verifier keys, built once from `JWT_SECRET`
    pub token_keys: TokenKeys,

    /// Directory where uploaded images are written
    pub uploads_dir: PathBuf,
}

impl FromRef<AppState> for PgPool {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.pool.clone()
    }
}

impl FromRef<AppState> for TokenKeys {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.token_keys.clone()
    }
}
