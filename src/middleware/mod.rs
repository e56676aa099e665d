//! Middleware run before a route's handler.
//!
//! Each route carries an ordered list of [`Middleware`]. The dispatcher runs
//! them in registration order; the first one returning `Err` short-circuits
//! the request: no later middleware runs, the handler is never invoked, and
//! the error becomes the response.
//!
//! # Modules
//!
//! - [`auth`]: bearer-token authentication, sets the `user` attribute
//! - [`role`]: role guards for authenticated routes
//!
//! # Authentication Flow
//!
//! 1. Client sends request with `Authorization: Bearer <token>` header
//! 2. [`auth::AuthMiddleware`] verifies the token and stores its claims
//! 3. [`role::RequireRole`] checks the claimed role
//! 4. Handler executes if all checks pass
//!
//! # Example
//!
//! ```ignore
//! let admin_only = guarded(&tokens, RequireRole::admin());
//! builder.get("/api/admin/users", list_users, &admin_only);
//! ```

use std::sync::Arc;

use schoolrun_auth::TokenService;
use schoolrun_core::AppError;

use crate::context::RequestContext;

pub mod auth;
pub mod role;

use self::auth::AuthMiddleware;
use self::role::RequireRole;

pub trait Middleware: Send + Sync + 'static {
    /// Name used in logs.
    fn name(&self) -> &str {
        std::any::type_name::<Self>()
    }

    /// Inspects or annotates the request; `Err` ends the request.
    fn handle(&self, ctx: &mut RequestContext) -> Result<(), AppError>;
}

impl<F> Middleware for F
where
    F: Fn(&mut RequestContext) -> Result<(), AppError> + Send + Sync + 'static,
{
    fn name(&self) -> &str {
        "inline"
    }

    fn handle(&self, ctx: &mut RequestContext) -> Result<(), AppError> {
        self(ctx)
    }
}

/// Runs `chain` in order, stopping at the first short-circuit.
pub fn run_chain(chain: &[Arc<dyn Middleware>], ctx: &mut RequestContext) -> Result<(), AppError> {
    for middleware in chain {
        if let Err(err) = middleware.handle(ctx) {
            tracing::debug!(
                middleware = middleware.name(),
                status = %err.status.as_u16(),
                "Middleware short-circuited request"
            );
            return Err(err);
        }
    }
    Ok(())
}

/// Authentication followed by `guard`, the chain used by every protected
/// route.
pub fn guarded(tokens: &Arc<TokenService>, guard: RequireRole) -> Vec<Arc<dyn Middleware>> {
    vec![
        Arc::new(AuthMiddleware::new(tokens.clone())),
        Arc::new(guard),
    ]
}
