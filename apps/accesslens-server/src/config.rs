//! Application configuration loaded from environment variables.
//!
//! Fail-fast: required variables must be present and valid or the
//! process exits with a clear message before serving anything.

use std::env;
use thiserror::Error;

/// Application environment mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppEnvironment {
    Development,
    Production,
}

impl AppEnvironment {
    /// Parse from the `APP_ENV` value. Defaults to `Development` when
    /// unset or unrecognized.
    #[must_use]
    pub fn from_env_str(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "production" | "prod" => Self::Production,
            _ => Self::Development,
        }
    }
}

impl std::fmt::Display for AppEnvironment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Development => write!(f, "development"),
            Self::Production => write!(f, "production"),
        }
    }
}

/// Server configuration.
#[derive(Debug, Clone)]
pub struct Config {
    /// Bind host.
    pub host: String,
    /// Bind port.
    pub port: u16,
    /// Base URL of the access-inventory store.
    pub store_url: String,
    /// Store request timeout in seconds.
    pub store_timeout_secs: u64,
    /// Log filter directive.
    pub rust_log: String,
    /// Environment mode.
    pub app_env: AppEnvironment,
}

/// Configuration loading errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// A required variable is absent.
    #[error("missing required environment variable: {0}")]
    Missing(&'static str),

    /// A variable is present but unparseable.
    #[error("invalid value for {name}: {value}")]
    Invalid { name: &'static str, value: String },
}

impl Config {
    /// Load configuration from the environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        let store_url = env::var("STORE_URL").map_err(|_| ConfigError::Missing("STORE_URL"))?;

        let port = match env::var("PORT") {
            Ok(value) => value.parse().map_err(|_| ConfigError::Invalid {
                name: "PORT",
                value,
            })?,
            Err(_) => 8000,
        };

        let store_timeout_secs = match env::var("STORE_TIMEOUT_SECS") {
            Ok(value) => value.parse().map_err(|_| ConfigError::Invalid {
                name: "STORE_TIMEOUT_SECS",
                value,
            })?,
            Err(_) => 10,
        };

        Ok(Self {
            host: env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
            port,
            store_url,
            store_timeout_secs,
            rust_log: env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
            app_env: AppEnvironment::from_env_str(
                &env::var("APP_ENV").unwrap_or_default(),
            ),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn app_env_parses_known_values() {
        assert_eq!(
            AppEnvironment::from_env_str("production"),
            AppEnvironment::Production
        );
        assert_eq!(
            AppEnvironment::from_env_str("prod"),
            AppEnvironment::Production
        );
        assert_eq!(
            AppEnvironment::from_env_str("anything-else"),
            AppEnvironment::Development
        );
    }
}
