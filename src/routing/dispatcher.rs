use std::sync::Arc;

use axum::http::StatusCode;
use schoolrun_core::ApiResponse;
use tracing::debug;

use crate::context::RequestContext;
use crate::middleware::run_chain;
use crate::routing::table::RouteTable;

/// Message sent when no route matches.
pub const NOT_FOUND_MESSAGE: &str = "Not Found";

/// Resolves requests against a [`RouteTable`] and produces their response.
///
/// The dispatcher owns nothing mutable: the table is shared through an
/// `Arc` and the state is cloned into each handler call, so a single
/// dispatcher serves concurrent requests.
pub struct Dispatcher<S> {
    table: Arc<RouteTable<S>>,
    state: S,
    expose_internal: bool,
}

impl<S> Dispatcher<S>
where
    S: Clone + Send + Sync + 'static,
{
    pub fn new(table: RouteTable<S>, state: S) -> Self {
        Self {
            table: Arc::new(table),
            state,
            expose_internal: false,
        }
    }

    /// Echo internal error messages in 5xx responses.
    pub fn expose_internal_errors(mut self, expose: bool) -> Self {
        self.expose_internal = expose;
        self
    }

    /// Runs one request to completion.
    ///
    /// 1. The first route whose method and pattern match is selected;
    ///    otherwise the response is `404 {"error": "Not Found"}`.
    /// 2. The route's middleware runs in order. The first failure becomes
    ///    the response and the handler is skipped.
    /// 3. The handler runs with the context and captured parameters. An
    ///    error it returns is rendered as the error envelope.
    pub async fn dispatch(&self, mut ctx: RequestContext) -> ApiResponse {
        let Some((route, params)) = self.table.resolve(ctx.method(), ctx.path()) else {
            debug!(method = %ctx.method(), path = %ctx.path(), "No route matched");
            return ApiResponse::error(NOT_FOUND_MESSAGE, StatusCode::NOT_FOUND);
        };

        if let Err(err) = run_chain(route.middleware(), &mut ctx) {
            return ApiResponse::from_error(err, self.expose_internal);
        }

        match route.handler().call(self.state.clone(), ctx, params).await {
            Ok(response) => response,
            Err(err) => ApiResponse::from_error(err, self.expose_internal),
        }
    }
}
