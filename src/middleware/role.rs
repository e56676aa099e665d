//! Role-based authorization.
//!
//! [`RequireRole`] is registered after [`AuthMiddleware`](super::auth::AuthMiddleware)
//! and rejects authenticated users whose role claim is not in its allowed
//! set. The helper functions perform the same check inside handlers.

use schoolrun_auth::Claims;
use schoolrun_core::AppError;
use schoolrun_models::UserRole;

use crate::context::RequestContext;
use crate::middleware::Middleware;

#[derive(Debug, Clone)]
pub struct RequireRole {
    allowed: Vec<UserRole>,
}

impl RequireRole {
    pub fn new(allowed: impl IntoIterator<Item = UserRole>) -> Self {
        Self {
            allowed: allowed.into_iter().collect(),
        }
    }

    pub fn admin() -> Self {
        Self::new([UserRole::Admin])
    }

    pub fn driver() -> Self {
        Self::new([UserRole::Driver])
    }

    pub fn student() -> Self {
        Self::new([UserRole::Student])
    }

    pub fn parent() -> Self {
        Self::new([UserRole::Parent])
    }
}

impl Middleware for RequireRole {
    fn name(&self) -> &str {
        "require_role"
    }

    fn handle(&self, ctx: &mut RequestContext) -> Result<(), AppError> {
        let claims = ctx
            .user()
            .ok_or_else(|| AppError::unauthorized("Unauthorized"))?;
        check_any_role(&claims, &self.allowed)
    }
}

/// Parses the role claim.
pub fn role_of(claims: &Claims) -> Result<UserRole, AppError> {
    claims
        .role()
        .and_then(|role| role.parse().ok())
        .ok_or_else(|| AppError::forbidden("Forbidden"))
}

pub fn check_role(claims: &Claims, required: UserRole) -> Result<(), AppError> {
    check_any_role(claims, &[required])
}

pub fn check_any_role(claims: &Claims, allowed: &[UserRole]) -> Result<(), AppError> {
    let role = role_of(claims)?;
    if allowed.contains(&role) {
        Ok(())
    } else {
        tracing::debug!(role = %role, ?allowed, "Role not permitted");
        Err(AppError::forbidden("Forbidden"))
    }
}
