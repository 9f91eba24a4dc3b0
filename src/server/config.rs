/**
 * Server Configuration
 *
 * This module loads server configuration from the environment, once, at
 * startup. Everything downstream receives configuration as explicit values
 * (the JWT secret in particular is handed to the token keys constructor,
 * never re-read from the environment).
 *
 * # Variables
 *
 * - `JWT_SECRET`   - required, signing key for bearer tokens
 * - `DATABASE_URL` - required, Postgres connection string
 * - `PORT`         - optional, listen port (default 5000)
 * - `UPLOADS_DIR`  - optional, directory for uploaded images (default "uploads")
 */

use std::path::PathBuf;

use thiserror::Error;

const DEFAULT_PORT: u16 = 5000;
const DEFAULT_UPLOADS_DIR: &str = "uploads";

/// Errors raised while reading configuration from the environment
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing required environment variable {0}")]
    MissingVar(&'static str),

    #[error("invalid PORT value: {0}")]
    InvalidPort(String),
}

/// Server configuration collected from the environment
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Postgres connection string
    pub database_url: String,
    /// Signing key for bearer tokens
    pub jwt_secret: String,
    /// TCP port to listen on
    pub port: u16,
    /// Directory where uploaded images are written
    pub uploads_dir: PathBuf,
}

impl AppConfig {
    /// Load configuration from the environment
    ///
    /// Fails fast when a required variable is absent: the service cannot
    /// issue tokens without `JWT_SECRET` and cannot serve anything without
    /// `DATABASE_URL`, so startup stops rather than limping along.
    pub fn from_env() -> Result<Self, ConfigError> {
        let jwt_secret =
            std::env::var("JWT_SECRET").map_err(|_| ConfigError::MissingVar("JWT_SECRET"))?;
        let database_url =
            std::env::var("DATABASE_URL").map_err(|_| ConfigError::MissingVar("DATABASE_URL"))?;

        let port = match std::env::var("PORT") {
            Ok(raw) => raw.parse::<u16>().map_err(|_| ConfigError::InvalidPort(raw))?,
            Err(_) => DEFAULT_PORT,
        };

        let uploads_dir = std::env::var("UPLOADS_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from(DEFAULT_UPLOADS_DIR));

        Ok(Self {
            database_url,
            jwt_secret,
            port,
            uploads_dir,
        })
    }
}
