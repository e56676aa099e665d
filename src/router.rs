use std::any::Any;
use std::sync::Arc;
use std::time::Duration;

use axum::body::Body;
use axum::extract::{Request, State};
use axum::http::{HeaderName, HeaderValue, Method, StatusCode, header};
use axum::response::{IntoResponse, Response};
use axum::{Router, middleware};
use schoolrun_auth::TokenService;
use schoolrun_config::CorsConfig;
use schoolrun_core::ApiResponse;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::cors::{AllowOrigin, CorsLayer};
use tracing::{error, warn};

use crate::context::RequestContext;
use crate::logging::logging_middleware;
use crate::modules::auth::router::init_auth_routes;
use crate::modules::drivers::router::init_drivers_routes;
use crate::modules::users::router::init_users_routes;
use crate::routing::{Dispatcher, PatternError, RouteTable, RouteTableBuilder};
use crate::state::AppState;

/// Upper bound on a buffered request body.
pub const MAX_BODY_BYTES: usize = 1024 * 1024;

/// Every route the API serves, in match order.
pub fn build_route_table(tokens: &Arc<TokenService>) -> Result<RouteTable<AppState>, PatternError> {
    let builder = init_auth_routes(RouteTableBuilder::new());
    let builder = init_users_routes(builder, tokens);
    let builder = init_drivers_routes(builder, tokens);
    builder.build()
}

/// Wraps a dispatcher in the HTTP transport.
///
/// All requests fall through to the dispatcher. Preflight `OPTIONS` requests
/// are answered with 200 before routing. A panic in the dispatcher becomes a
/// 500 error envelope that still carries the CORS headers.
pub fn init_router<S>(dispatcher: Arc<Dispatcher<S>>, cors_config: &CorsConfig) -> Router
where
    S: Clone + Send + Sync + 'static,
{
    Router::new()
        .fallback(dispatch_request::<S>)
        .with_state(dispatcher)
        .layer(CatchPanicLayer::custom(panic_response))
        .layer(cors_layer(cors_config))
        .layer(middleware::from_fn(logging_middleware))
}

async fn dispatch_request<S>(State(dispatcher): State<Arc<Dispatcher<S>>>, req: Request) -> Response
where
    S: Clone + Send + Sync + 'static,
{
    if req.method() == Method::OPTIONS {
        return StatusCode::OK.into_response();
    }

    let (parts, body) = req.into_parts();
    let bytes = match axum::body::to_bytes(body, MAX_BODY_BYTES).await {
        Ok(bytes) => bytes,
        Err(err) => {
            warn!(error = %err, "Failed to read request body");
            return ApiResponse::bad_request("Invalid request body").into_response();
        }
    };

    let ctx = RequestContext::from_parts(parts, bytes);
    dispatcher.dispatch(ctx).await.into_response()
}

fn cors_layer(config: &CorsConfig) -> CorsLayer {
    let origins = if config.allows_any_origin() {
        AllowOrigin::any()
    } else {
        AllowOrigin::list(
            config
                .allowed_origins
                .iter()
                .filter_map(|origin| origin.parse::<HeaderValue>().ok()),
        )
    };

    CorsLayer::new()
        .allow_origin(origins)
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::PATCH,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([
            header::CONTENT_TYPE,
            header::AUTHORIZATION,
            HeaderName::from_static("x-requested-with"),
        ])
        .max_age(Duration::from_secs(3600))
}

fn panic_response(panic: Box<dyn Any + Send + 'static>) -> Response<Body> {
    let detail = panic
        .downcast_ref::<String>()
        .map(String::as_str)
        .or_else(|| panic.downcast_ref::<&str>().copied())
        .unwrap_or("unknown panic");
    error!(panic = %detail, "Handler panicked");

    ApiResponse::error("Internal Server Error", StatusCode::INTERNAL_SERVER_ERROR).into_response()
}
