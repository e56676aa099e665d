use std::sync::Arc;

use axum::http::Method;

use crate::middleware::Middleware;
use crate::routing::pattern::{PathParams, PathPattern, PatternError};
use crate::routing::route::{Handler, Route};

/// Collects routes in registration order.
///
/// Registration methods chain; the first invalid pattern is remembered and
/// reported by [`build`](Self::build), so a route table either builds whole
/// or not at all.
pub struct RouteTableBuilder<S> {
    routes: Vec<Route<S>>,
    error: Option<PatternError>,
}

impl<S> Default for RouteTableBuilder<S> {
    fn default() -> Self {
        Self {
            routes: Vec::new(),
            error: None,
        }
    }
}

impl<S: 'static> RouteTableBuilder<S> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn route<H>(
        mut self,
        method: Method,
        path: &str,
        handler: H,
        middleware: &[Arc<dyn Middleware>],
    ) -> Self
    where
        H: Handler<S>,
    {
        if self.error.is_some() {
            return self;
        }

        match PathPattern::parse(path) {
            Ok(pattern) => self.routes.push(Route {
                method,
                pattern,
                handler: Arc::new(handler),
                middleware: middleware.to_vec(),
            }),
            Err(err) => self.error = Some(err),
        }
        self
    }

    pub fn get<H: Handler<S>>(self, path: &str, handler: H, middleware: &[Arc<dyn Middleware>]) -> Self {
        self.route(Method::GET, path, handler, middleware)
    }

    pub fn post<H: Handler<S>>(self, path: &str, handler: H, middleware: &[Arc<dyn Middleware>]) -> Self {
        self.route(Method::POST, path, handler, middleware)
    }

    pub fn patch<H: Handler<S>>(self, path: &str, handler: H, middleware: &[Arc<dyn Middleware>]) -> Self {
        self.route(Method::PATCH, path, handler, middleware)
    }

    pub fn delete<H: Handler<S>>(self, path: &str, handler: H, middleware: &[Arc<dyn Middleware>]) -> Self {
        self.route(Method::DELETE, path, handler, middleware)
    }

    pub fn build(self) -> Result<RouteTable<S>, PatternError> {
        match self.error {
            Some(err) => Err(err),
            None => Ok(RouteTable {
                routes: self.routes,
            }),
        }
    }
}

/// Ordered, immutable list of routes.
pub struct RouteTable<S> {
    routes: Vec<Route<S>>,
}

impl<S> RouteTable<S> {
    /// Finds the first route, in registration order, whose method equals
    /// `method` and whose pattern matches the whole of `path`.
    pub fn resolve(&self, method: &Method, path: &str) -> Option<(&Route<S>, PathParams)> {
        self.routes
            .iter()
            .filter(|route| route.method == *method)
            .find_map(|route| route.pattern.matches(path).map(|params| (route, params)))
    }

    pub fn len(&self) -> usize {
        self.routes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Route<S>> {
        self.routes.iter()
    }
}
