use std::sync::Arc;

use axum::http::header;
use tracing::warn;

use schoolrun_auth::TokenService;
use schoolrun_core::AppError;

use crate::context::RequestContext;
use crate::middleware::Middleware;

/// Requires a valid bearer token and stores its claims as the `user`
/// attribute.
///
/// A missing or malformed `Authorization` header yields `401 Unauthorized`;
/// a token that fails verification yields `401 Invalid Token`.
#[derive(Debug, Clone)]
pub struct AuthMiddleware {
    tokens: Arc<TokenService>,
}

impl AuthMiddleware {
    pub fn new(tokens: Arc<TokenService>) -> Self {
        Self { tokens }
    }
}

impl Middleware for AuthMiddleware {
    fn name(&self) -> &str {
        "auth"
    }

    fn handle(&self, ctx: &mut RequestContext) -> Result<(), AppError> {
        let token = match ctx
            .header(header::AUTHORIZATION.as_str())
            .and_then(bearer_token)
        {
            Some(token) => token.to_string(),
            None => {
                warn!(path = %ctx.path(), "Unauthorized access attempt: Missing or invalid header");
                return Err(AppError::unauthorized("Unauthorized"));
            }
        };

        let claims = self.tokens.verify(&token).inspect_err(|_| {
            warn!(path = %ctx.path(), "Unauthorized access attempt: Invalid token");
        })?;

        ctx.set_user(claims);
        Ok(())
    }
}

/// Extracts the token from a `Bearer <token>` header value.
///
/// The scheme is case-insensitive and must be followed by at least one
/// whitespace character and a non-empty token.
pub fn bearer_token(value: &str) -> Option<&str> {
    const SCHEME: &str = "bearer";

    let value = value.trim_start();
    let scheme = value.get(..SCHEME.len())?;
    if !scheme.eq_ignore_ascii_case(SCHEME) {
        return None;
    }

    let rest = &value[SCHEME.len()..];
    if !rest.starts_with(char::is_whitespace) {
        return None;
    }

    let token = rest.trim();
    (!token.is_empty()).then_some(token)
}
