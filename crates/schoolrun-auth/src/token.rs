//! Token issuing and verification.
//!
//! [`TokenService::issue`] stamps `iat`/`exp` onto the caller's claims and
//! signs `base64url(header) + "." + base64url(claims)` with HMAC-SHA256.
//! [`TokenService::verify`] accepts a token only if it has exactly three
//! segments, its signature matches (compared in constant time by
//! `jsonwebtoken`), and its `exp` lies strictly in the future.
//!
//! Every verification failure produces the same `401 Invalid Token` error so
//! callers cannot tell a malformed token from an expired or forged one.

use std::fmt;
use std::sync::Arc;

use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, encode};
use tracing::debug;

use schoolrun_config::JwtConfig;
use schoolrun_core::AppError;

use crate::claims::{Claims, EXPIRES_AT_CLAIM, ISSUED_AT_CLAIM};
use crate::clock::{Clock, SystemClock};

pub const INVALID_TOKEN_MESSAGE: &str = "Invalid Token";

#[derive(Clone)]
pub struct TokenService {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    validation: Validation,
    ttl_seconds: i64,
    clock: Arc<dyn Clock>,
}

impl TokenService {
    pub fn new(config: &JwtConfig) -> Self {
        Self::with_clock(config, Arc::new(SystemClock))
    }

    pub fn with_clock(config: &JwtConfig, clock: Arc<dyn Clock>) -> Self {
        // Expiry is checked against our own clock, with no leeway, after the
        // signature has been verified.
        let mut validation = Validation::new(Algorithm::HS256);
        validation.validate_exp = false;
        validation.validate_nbf = false;
        validation.validate_aud = false;
        validation.leeway = 0;
        validation.required_spec_claims.clear();

        Self {
            encoding_key: EncodingKey::from_secret(config.secret.as_bytes()),
            decoding_key: DecodingKey::from_secret(config.secret.as_bytes()),
            validation,
            ttl_seconds: config.ttl_seconds,
            clock,
        }
    }

    pub fn ttl_seconds(&self) -> i64 {
        self.ttl_seconds
    }

    /// Signs `claims` after stamping `iat` (now) and `exp` (now + TTL).
    ///
    /// # Errors
    ///
    /// Returns an internal error if the claims lack a string identity or role,
    /// if the expiry does not fit in an `i64`, or if encoding fails.
    pub fn issue(&self, mut claims: Claims) -> Result<String, AppError> {
        if claims.identity().is_none() || claims.role().is_none() {
            return Err(AppError::internal(anyhow::anyhow!(
                "token claims must include an identity and a role"
            )));
        }

        let now = self.clock.now();
        let expires_at = now.checked_add(self.ttl_seconds).ok_or_else(|| {
            AppError::internal(anyhow::anyhow!(
                "token expiry overflows: now {} + ttl {}",
                now,
                self.ttl_seconds
            ))
        })?;
        claims.insert(ISSUED_AT_CLAIM, now);
        claims.insert(EXPIRES_AT_CLAIM, expires_at);

        encode(&Header::new(Algorithm::HS256), &claims, &self.encoding_key)
            .map_err(|e| AppError::internal(anyhow::anyhow!("Failed to create token: {}", e)))
    }

    /// Verifies `token` and returns its claims.
    ///
    /// # Errors
    ///
    /// Returns `401 Invalid Token` for any structural, signature or expiry
    /// failure.
    pub fn verify(&self, token: &str) -> Result<Claims, AppError> {
        if token.split('.').count() != 3 {
            debug!("Token rejected: wrong segment count");
            return Err(invalid_token());
        }

        let claims = decode::<Claims>(token, &self.decoding_key, &self.validation)
            .map(|data| data.claims)
            .map_err(|e| {
                debug!(reason = %e, "Token rejected");
                invalid_token()
            })?;

        match claims.expires_at() {
            Some(exp) if exp > self.clock.now() => Ok(claims),
            _ => {
                debug!("Token rejected: expired or missing exp");
                Err(invalid_token())
            }
        }
    }
}

fn invalid_token() -> AppError {
    AppError::unauthorized(INVALID_TOKEN_MESSAGE)
}

impl fmt::Debug for TokenService {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TokenService")
            .field("ttl_seconds", &self.ttl_seconds)
            .field("clock", &self.clock)
            .finish_non_exhaustive()
    }
}
