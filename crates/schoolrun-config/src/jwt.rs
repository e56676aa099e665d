//! Token signing configuration.
//!
//! # Environment Variables
//!
//! - `JWT_SECRET`: HMAC signing secret (required, must be non-empty)
//! - `JWT_TTL_SECONDS`: token lifetime in seconds (default: 86400, 24 hours;
//!   at most ten years)
//!
//! There is no fallback secret. A deployment without `JWT_SECRET` refuses to
//! start instead of signing tokens with a guessable key.

use std::{env, fmt};

use crate::error::ConfigError;

/// Default token lifetime: 24 hours.
pub const DEFAULT_TOKEN_TTL_SECONDS: i64 = 60 * 60 * 24;

/// Longest accepted token lifetime: ten years.
pub const MAX_TOKEN_TTL_SECONDS: i64 = 60 * 60 * 24 * 365 * 10;

#[derive(Clone)]
pub struct JwtConfig {
    pub secret: String,
    pub ttl_seconds: i64,
}

impl JwtConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_source(|key| env::var(key).ok())
    }

    pub fn from_source<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let secret = lookup("JWT_SECRET")
            .filter(|s| !s.trim().is_empty())
            .ok_or(ConfigError::Missing("JWT_SECRET"))?;

        let ttl_seconds = match lookup("JWT_TTL_SECONDS") {
            None => DEFAULT_TOKEN_TTL_SECONDS,
            Some(raw) => match raw.trim().parse::<i64>() {
                Ok(ttl) if (1..=MAX_TOKEN_TTL_SECONDS).contains(&ttl) => ttl,
                _ => {
                    return Err(ConfigError::Invalid {
                        name: "JWT_TTL_SECONDS",
                        value: raw,
                    });
                }
            },
        };

        Ok(Self {
            secret,
            ttl_seconds,
        })
    }
}

impl fmt::Debug for JwtConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("JwtConfig")
            .field("secret", &"<redacted>")
            .field("ttl_seconds", &self.ttl_seconds)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn source(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_missing_secret_fails() {
        let result = JwtConfig::from_source(source(&[]));
        assert_eq!(result.unwrap_err(), ConfigError::Missing("JWT_SECRET"));
    }

    #[test]
    fn test_blank_secret_fails() {
        let result = JwtConfig::from_source(source(&[("JWT_SECRET", "   ")]));
        assert!(matches!(result, Err(ConfigError::Missing("JWT_SECRET"))));
    }

    #[test]
    fn test_defaults_to_24_hours() {
        let config = JwtConfig::from_source(source(&[("JWT_SECRET", "s3cret")])).unwrap();
        assert_eq!(config.secret, "s3cret");
        assert_eq!(config.ttl_seconds, 86_400);
    }

    #[test]
    fn test_ttl_override() {
        let config = JwtConfig::from_source(source(&[
            ("JWT_SECRET", "s3cret"),
            ("JWT_TTL_SECONDS", "600"),
        ]))
        .unwrap();
        assert_eq!(config.ttl_seconds, 600);
    }

    #[test]
    fn test_invalid_ttl_rejected() {
        for bad in ["0", "-5", "soon"] {
            let result = JwtConfig::from_source(source(&[
                ("JWT_SECRET", "s3cret"),
                ("JWT_TTL_SECONDS", bad),
            ]));
            assert!(matches!(
                result,
                Err(ConfigError::Invalid {
                    name: "JWT_TTL_SECONDS",
                    ..
                })
            ));
        }
    }

    #[test]
    fn test_ttl_upper_bound() {
        let at_max = MAX_TOKEN_TTL_SECONDS.to_string();
        let config = JwtConfig::from_source(source(&[
            ("JWT_SECRET", "s3cret"),
            ("JWT_TTL_SECONDS", at_max.as_str()),
        ]))
        .unwrap();
        assert_eq!(config.ttl_seconds, MAX_TOKEN_TTL_SECONDS);

        let over_max = (MAX_TOKEN_TTL_SECONDS + 1).to_string();
        let i64_max = i64::MAX.to_string();
        for bad in [over_max.as_str(), i64_max.as_str()] {
            let result = JwtConfig::from_source(source(&[
                ("JWT_SECRET", "s3cret"),
                ("JWT_TTL_SECONDS", bad),
            ]));
            assert_eq!(
                result.err(),
                Some(ConfigError::Invalid {
                    name: "JWT_TTL_SECONDS",
                    value: bad.to_string(),
                })
            );
        }
    }

    #[test]
    fn test_debug_redacts_secret() {
        let config = JwtConfig::from_source(source(&[("JWT_SECRET", "hunter2")])).unwrap();
        let debug = format!("{:?}", config);
        assert!(!debug.contains("hunter2"));
    }
}
