//! Process configuration from environment variables.

use std::env;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("ACCESS_TOKEN_SECRET must be set when APP_ENV=production")]
    MissingTokenSecret,
}

/// Runtime configuration for the API process.
#[derive(Debug, Clone)]
pub struct ApiConfig {
    /// Listen port (`PORT`, default 5000).
    pub port: u16,

    /// Access-token signing secret (`ACCESS_TOKEN_SECRET`).
    pub token_secret: String,

    /// Production deployments set `Secure` + `SameSite=None` on the token
    /// cookie (`APP_ENV=production`); anything else uses `SameSite=Strict`.
    pub production: bool,

    /// Origin allowed to call the API with credentials (`FRONTEND_ORIGIN`).
    pub frontend_origin: String,

    /// Use the persistent Postgres-backed store (`USE_PERSISTENT_STORE`);
    /// defaults to the in-memory store for dev/test.
    pub use_persistent_store: bool,

    /// Store connection URL assembled from `DB_USER`/`DB_PASS` (plus
    /// `DB_HOST`/`DB_NAME`); `None` when credentials are absent.
    pub database_url: Option<String>,
}

impl ApiConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        let port = env::var("PORT")
            .ok()
            .and_then(|v| v.parse::<u16>().ok())
            .unwrap_or(5000);

        let production = env::var("APP_ENV").is_ok_and(|v| v == "production");

        // The dev fallback is fine locally but never in production.
        let token_secret = match env::var("ACCESS_TOKEN_SECRET") {
            Ok(secret) => secret,
            Err(_) if production => return Err(ConfigError::MissingTokenSecret),
            Err(_) => {
                tracing::warn!("ACCESS_TOKEN_SECRET not set; using insecure dev default");
                "dev-secret".to_string()
            }
        };

        let frontend_origin =
            env::var("FRONTEND_ORIGIN").unwrap_or_else(|_| "http://localhost:5173".to_string());

        let use_persistent_store = env::var("USE_PERSISTENT_STORE")
            .ok()
            .and_then(|v| v.parse::<bool>().ok())
            .unwrap_or(false);

        let database_url = match (env::var("DB_USER"), env::var("DB_PASS")) {
            (Ok(user), Ok(pass)) => {
                let host = env::var("DB_HOST").unwrap_or_else(|_| "localhost".to_string());
                let name = env::var("DB_NAME").unwrap_or_else(|_| "bookshelf".to_string());
                Some(format!("postgres://{user}:{pass}@{host}:5432/{name}"))
            }
            _ => None,
        };

        Ok(Self {
            port,
            token_secret,
            production,
            frontend_origin,
            use_persistent_store,
            database_url,
        })
    }
}
