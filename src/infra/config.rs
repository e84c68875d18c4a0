//! Centralized configuration (environment variables + defaults).

use std::env;
use thiserror::Error;

pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_HOST: &str = "0.0.0.0";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Missing environment variable '{0}'")]
    Missing(&'static str),

    #[error("Invalid PORT value '{value}': {source}")]
    InvalidPort {
        value: String,
        source: std::num::ParseIntError,
    },
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub database_url: String,
}

impl AppConfig {
    /// Loads `.env` (if present) and reads the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenv::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds the config from an arbitrary key lookup. Empty values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let host = get("HOST").unwrap_or_else(|| DEFAULT_HOST.to_string());
        let port = match get("PORT") {
            Some(value) => value
                .trim()
                .parse::<u16>()
                .map_err(|source| ConfigError::InvalidPort { value, source })?,
            None => DEFAULT_PORT,
        };
        // MONGODB_URI is accepted so existing deployments keep their variable name.
        let database_url = get("DATABASE_URL")
            .or_else(|| get("MONGODB_URI"))
            .ok_or(ConfigError::Missing("DATABASE_URL"))?;

        Ok(Self {
            host,
            port,
            database_url,
        })
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
