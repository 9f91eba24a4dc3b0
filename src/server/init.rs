/**
 * Server Initialization
 *
 * This module handles initialization and setup of the Axum HTTP server:
 * database pool creation, migrations, uploads directory setup, and route
 * configuration.
 *
 * # Initialization Process
 *
 * 1. Connect the Postgres pool
 * 2. Run embedded migrations
 * 3. Ensure the uploads directory exists
 * 4. Build the token keys from the configured secret
 * 5. Create and configure the router
 */

use axum::Router;
use sqlx::PgPool;
use thiserror::Error;

use crate::auth::tokens::TokenKeys;
use crate::routes::router::create_router;
use crate::server::config::AppConfig;
use crate::server::state::AppState;

/// Errors raised during server initialization
#[derive(Debug, Error)]
pub enum InitError {
    #[error("failed to connect to database: {0}")]
    Connect(sqlx::Error),

    #[error("failed to run database migrations: {0}")]
    Migrate(#[from] sqlx::migrate::MigrateError),

    #[error("failed to create uploads directory: {0}")]
    UploadsDir(std::io::Error),
}

/// Create and configure the Axum application
///
/// # Errors
///
/// Fails if the database is unreachable, migrations cannot be applied, or
/// the uploads directory cannot be created. All three are fatal: the service
/// has nothing to serve without them.
pub async fn create_app(config: AppConfig) -> Result<Router, InitError> {
    tracing::info!("Initializing blogit backend server");

    tracing::info!("Connecting to database...");
    let pool = PgPool::connect(&config.database_url)
        .await
        .map_err(InitError::Connect)?;

    tracing::info!("Running database migrations...");
    sqlx::migrate!("./migrations").run(&pool).await?;

    tokio::fs::create_dir_all(&config.uploads_dir)
        .await
        .map_err(InitError::UploadsDir)?;
    tracing::info!("Serving uploads from {}", config.uploads_dir.display());

    let app_state = AppState {
        pool,
        token_keys: TokenKeys::new(config.jwt_secret.as_bytes()),
        uploads_dir: config.uploads_dir,
    };

    tracing::info!("Router configured");
    Ok(create_router(app_state))
}
