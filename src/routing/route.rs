use std::fmt;
use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;

use axum::http::Method;

use schoolrun_core::{ApiResponse, AppError};

use crate::context::RequestContext;
use crate::middleware::Middleware;
use crate::routing::pattern::{PathParams, PathPattern};

pub type HandlerFuture = Pin<Box<dyn Future<Output = Result<ApiResponse, AppError>> + Send>>;

/// Business logic bound to a route.
///
/// Receives the shared state, the request context (with middleware
/// attributes applied) and the captured path parameters, and produces the
/// request's single response. Any async function or closure with the
/// signature `(S, RequestContext, PathParams) -> Result<ApiResponse, AppError>`
/// is a handler.
pub trait Handler<S>: Send + Sync + 'static {
    fn call(&self, state: S, ctx: RequestContext, params: PathParams) -> HandlerFuture;
}

impl<S, F, Fut> Handler<S> for F
where
    F: Fn(S, RequestContext, PathParams) -> Fut + Send + Sync + 'static,
    Fut: Future<Output = Result<ApiResponse, AppError>> + Send + 'static,
{
    fn call(&self, state: S, ctx: RequestContext, params: PathParams) -> HandlerFuture {
        Box::pin(self(state, ctx, params))
    }
}

/// A registered route. Immutable once the table is built.
pub struct Route<S> {
    pub(crate) method: Method,
    pub(crate) pattern: PathPattern,
    pub(crate) handler: Arc<dyn Handler<S>>,
    pub(crate) middleware: Vec<Arc<dyn Middleware>>,
}

impl<S> Route<S> {
    pub fn method(&self) -> &Method {
        &self.method
    }

    pub fn pattern(&self) -> &PathPattern {
        &self.pattern
    }

    pub fn middleware(&self) -> &[Arc<dyn Middleware>] {
        &self.middleware
    }

    pub fn handler(&self) -> &Arc<dyn Handler<S>> {
        &self.handler
    }
}

impl<S> fmt::Debug for Route<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Route")
            .field("method", &self.method)
            .field("pattern", &self.pattern.as_str())
            .field(
                "middleware",
                &self.middleware.iter().map(|m| m.name()).collect::<Vec<_>>(),
            )
            .finish()
    }
}
