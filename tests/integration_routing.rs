mod common;

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use axum::body::Body;
use axum::http::{Request, StatusCode, header};
use http_body_util::BodyExt;
use serde_json::{Value, json};
use tower::ServiceExt;

use schoolrun::context::RequestContext;
use schoolrun::middleware::Middleware;
use schoolrun::middleware::auth::AuthMiddleware;
use schoolrun::router::init_router;
use schoolrun::routing::{Dispatcher, PathParams, RouteTableBuilder};
use schoolrun_auth::TokenService;
use schoolrun_config::{CorsConfig, JwtConfig};
use schoolrun_core::{ApiResponse, AppError};

use common::setup_test_app;

#[derive(Clone, Default)]
struct Hits(Arc<AtomicUsize>);

async fn counted(hits: Hits, _ctx: RequestContext, _params: PathParams) -> Result<ApiResponse, AppError> {
    hits.0.fetch_add(1, Ordering::SeqCst);
    ApiResponse::ok(json!({ "ok": true }))
}

async fn explode(_hits: Hits, _ctx: RequestContext, _params: PathParams) -> Result<ApiResponse, AppError> {
    panic!("handler blew up");
}

fn guarded_app(hits: &Hits) -> axum::Router {
    let tokens = Arc::new(TokenService::new(&JwtConfig {
        secret: "routing-secret".to_string(),
        ttl_seconds: 60,
    }));
    let auth: Arc<dyn Middleware> = Arc::new(AuthMiddleware::new(tokens));

    let table = RouteTableBuilder::<Hits>::new()
        .get("/protected", counted, &[auth])
        .get("/panic", explode, &[])
        .build()
        .unwrap();
    let dispatcher = Dispatcher::new(table, hits.clone());
    init_router(Arc::new(dispatcher), &CorsConfig::from_source(|_| None))
}

async fn body_json(response: axum::response::Response) -> Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

#[tokio::test]
async fn test_unregistered_path_is_not_found() {
    let app = setup_test_app();

    let (status, body) = app.send("GET", "/api/admin/nothing", None, None).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, json!({ "error": "Not Found" }));
}

#[tokio::test]
async fn test_wrong_method_is_not_found() {
    let app = setup_test_app();

    let (status, body) = app.send("PUT", "/login", None, None).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "Not Found");
}

#[tokio::test]
async fn test_trailing_slash_is_not_found() {
    let app = setup_test_app();

    let (status, _) = app.send("GET", "/api/admin/users/", None, None).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_options_is_ok() {
    let app = setup_test_app();

    let (status, _) = app.send("OPTIONS", "/api/admin/users", None, None).await;

    assert_eq!(status, StatusCode::OK);
}

#[tokio::test]
async fn test_cors_preflight_allows_any_origin() {
    let app = setup_test_app();

    let request = Request::builder()
        .method("OPTIONS")
        .uri("/login")
        .header(header::ORIGIN, "https://app.example.com")
        .header(header::ACCESS_CONTROL_REQUEST_METHOD, "POST")
        .body(Body::empty())
        .unwrap();
    let response = app.router.clone().oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response.headers().get(header::ACCESS_CONTROL_ALLOW_ORIGIN).unwrap(),
        "*"
    );
}

#[tokio::test]
async fn test_wrong_scheme_skips_handler() {
    let hits = Hits::default();
    let app = guarded_app(&hits);

    let request = Request::builder()
        .uri("/protected")
        .header(header::AUTHORIZATION, "Token abc")
        .body(Body::empty())
        .unwrap();
    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    assert_eq!(body_json(response).await, json!({ "error": "Unauthorized" }));
    assert_eq!(hits.0.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn test_invalid_token_skips_handler() {
    let hits = Hits::default();
    let app = guarded_app(&hits);

    let request = Request::builder()
        .uri("/protected")
        .header(header::AUTHORIZATION, "Bearer a.b.c")
        .body(Body::empty())
        .unwrap();
    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    assert_eq!(body_json(response).await, json!({ "error": "Invalid Token" }));
    assert_eq!(hits.0.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn test_panicking_handler_yields_error_envelope() {
    let hits = Hits::default();
    let app = guarded_app(&hits);

    let request = Request::builder().uri("/panic").body(Body::empty()).unwrap();
    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(
        body_json(response).await,
        json!({ "error": "Internal Server Error" })
    );
}

#[tokio::test]
async fn test_panic_response_carries_cors_headers() {
    let hits = Hits::default();
    let app = guarded_app(&hits);

    let request = Request::builder()
        .uri("/panic")
        .header(header::ORIGIN, "https://app.example.com")
        .body(Body::empty())
        .unwrap();
    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(
        response.headers().get(header::ACCESS_CONTROL_ALLOW_ORIGIN).unwrap(),
        "*"
    );
}
