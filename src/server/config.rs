use std::time::Duration;

use crate::server::error::config::ConfigError;

/// Runtime configuration read from the environment.
pub struct Config {
    pub database_url: String,
    pub listen_addr: String,
    pub service_name: String,
    pub error_log_url: Option<String>,
    pub db_acquire_timeout: Duration,
}

impl Config {
    const DEFAULT_LISTEN_ADDR: &'static str = "0.0.0.0:8080";
    const DEFAULT_SERVICE_NAME: &'static str = "tenant-and-contract";
    const DEFAULT_DB_ACQUIRE_TIMEOUT_SECS: u64 = 30;

    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the configuration from an arbitrary variable lookup.
    ///
    /// Blank values are treated as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());

        let database_url =
            var("DATABASE_URL").ok_or_else(|| ConfigError::MissingEnvVar("DATABASE_URL".into()))?;

        let db_acquire_timeout_secs = match var("DB_ACQUIRE_TIMEOUT_SECS") {
            Some(value) => value
                .trim()
                .parse::<u64>()
                .map_err(|e| ConfigError::InvalidEnvValue {
                    var: "DB_ACQUIRE_TIMEOUT_SECS".to_string(),
                    reason: e.to_string(),
                })?,
            None => Self::DEFAULT_DB_ACQUIRE_TIMEOUT_SECS,
        };

        Ok(Self {
            database_url,
            listen_addr: var("LISTEN_ADDR").unwrap_or_else(|| Self::DEFAULT_LISTEN_ADDR.into()),
            service_name: var("SERVICE_NAME").unwrap_or_else(|| Self::DEFAULT_SERVICE_NAME.into()),
            error_log_url: var("ERROR_LOG_URL"),
            db_acquire_timeout: Duration::from_secs(db_acquire_timeout_secs),
        })
    }
}
