use std::env;
use thiserror::Error;

/// Collection holding status check documents when `STATUS_COLLECTION` is unset.
pub const DEFAULT_COLLECTION: &str = "status_checks";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{0} environment variable not set")]
    Missing(&'static str),

    #[error("{name} has an invalid value: {value}")]
    Invalid { name: &'static str, value: String },
}

/// # Service Configuration
///
/// Runtime settings read from the process environment. A `.env` file in the
/// working directory is loaded first when present.
///
/// ## Variables
/// - `MONGO_URL` (required): MongoDB connection string
/// - `DB_NAME` (required): database holding the status collection
/// - `STATUS_COLLECTION`: collection name, defaults to `status_checks`
/// - `HOST` / `PORT`: bind address, defaults to `127.0.0.1:8080`
/// - `RUST_LOG`: tracing filter directive, defaults to `info`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub mongo_url: String,
    pub db_name: String,
    pub collection: String,
    pub host: String,
    pub port: u16,
    pub log_filter: String,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenv::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds the configuration from an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let required = |name: &'static str| {
            lookup(name)
                .filter(|value| !value.trim().is_empty())
                .ok_or(ConfigError::Missing(name))
        };

        let port = match lookup("PORT") {
            Some(raw) => raw.trim().parse::<u16>().map_err(|_| ConfigError::Invalid {
                name: "PORT",
                value: raw,
            })?,
            None => 8080,
        };

        Ok(Self {
            mongo_url: required("MONGO_URL")?,
            db_name: required("DB_NAME")?,
            collection: lookup("STATUS_COLLECTION").unwrap_or_else(|| DEFAULT_COLLECTION.to_string()),
            host: lookup("HOST").unwrap_or_else(|| "127.0.0.1".to_string()),
            port,
            log_filter: lookup("RUST_LOG").unwrap_or_else(|| "info".to_string()),
        })
    }
}
