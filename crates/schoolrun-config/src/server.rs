//! Server and deployment configuration.
//!
//! # Environment Variables
//!
//! - `HOST`: bind address (default: `0.0.0.0`)
//! - `PORT`: bind port (default: `8000`)
//! - `APP_ENV`: `production` hides internal error detail from clients;
//!   any other value (default: `development`) exposes it
//! - `LOG_DIR`: directory for rolling log files (default: `storage/logs`)
//! - `LOG_LEVEL`: default log level when `RUST_LOG` is unset (default: `info`)

use std::{env, str::FromStr};

use crate::error::ConfigError;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Environment {
    Development,
    Production,
}

impl FromStr for Environment {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "production" | "prod" => Ok(Environment::Production),
            "development" | "dev" | "local" | "test" | "testing" => Ok(Environment::Development),
            _ => Err(()),
        }
    }
}

#[derive(Clone, Debug)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub environment: Environment,
    pub log_dir: String,
    pub log_level: String,
}

impl ServerConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_source(|key| env::var(key).ok())
    }

    pub fn from_source<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let port = match lookup("PORT") {
            None => 8000,
            Some(raw) => raw.trim().parse().map_err(|_| ConfigError::Invalid {
                name: "PORT",
                value: raw,
            })?,
        };

        let environment = match lookup("APP_ENV") {
            None => Environment::Development,
            Some(raw) => raw.parse().map_err(|_| ConfigError::Invalid {
                name: "APP_ENV",
                value: raw,
            })?,
        };

        Ok(Self {
            host: lookup("HOST").unwrap_or_else(|| "0.0.0.0".to_string()),
            port,
            environment,
            log_dir: lookup("LOG_DIR").unwrap_or_else(|| "storage/logs".to_string()),
            log_level: lookup("LOG_LEVEL").unwrap_or_else(|| "info".to_string()),
        })
    }

    /// Whether 5xx responses may carry the underlying error message.
    pub fn expose_internal_errors(&self) -> bool {
        self.environment != Environment::Production
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
