#![allow(dead_code)]

use std::sync::Arc;

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode, header};
use http_body_util::BodyExt;
use serde_json::Value;
use tower::ServiceExt;
use uuid::Uuid;

use schoolrun::router::{build_route_table, init_router};
use schoolrun::routing::Dispatcher;
use schoolrun::state::AppState;
use schoolrun::store::MemoryUserStore;
use schoolrun_auth::{Claims, FixedClock, TokenService};
use schoolrun_config::{CorsConfig, JwtConfig};
use schoolrun_core::hash_password;
use schoolrun_models::{NewUser, UserRole};

pub const TEST_SECRET: &str = "integration-test-secret";
pub const NOW: i64 = 1_700_000_000;
pub const TTL: i64 = 86_400;
pub const PASSWORD: &str = "testpass123";

pub struct TestApp {
    pub router: Router,
    pub state: AppState,
    pub clock: FixedClock,
}

pub fn setup_test_app() -> TestApp {
    let clock = FixedClock::new(NOW);
    let tokens = Arc::new(TokenService::with_clock(
        &JwtConfig {
            secret: TEST_SECRET.to_string(),
            ttl_seconds: TTL,
        },
        Arc::new(clock.clone()),
    ));
    let state = AppState::new(Arc::new(MemoryUserStore::new()), tokens.clone());

    let table = build_route_table(&tokens).unwrap();
    let dispatcher = Dispatcher::new(table, state.clone());
    let router = init_router(Arc::new(dispatcher), &CorsConfig::from_source(|_| None));

    TestApp {
        router,
        state,
        clock,
    }
}

impl TestApp {
    /// Sends one request and returns the status and decoded JSON body
    /// (`Value::Null` for an empty body).
    pub async fn send(
        &self,
        method: &str,
        uri: &str,
        token: Option<&str>,
        body: Option<Value>,
    ) -> (StatusCode, Value) {
        let mut builder = Request::builder().method(method).uri(uri);
        if let Some(token) = token {
            builder = builder.header(header::AUTHORIZATION, format!("Bearer {token}"));
        }
        let request = match body {
            Some(json) => builder
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(serde_json::to_string(&json).unwrap()))
                .unwrap(),
            None => builder.body(Body::empty()).unwrap(),
        };

        self.send_request(request).await
    }

    pub async fn send_request(&self, request: Request<Body>) -> (StatusCode, Value) {
        let response = self.router.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let body = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap()
        };
        (status, body)
    }

    /// Inserts an account directly and returns its id and a token for it.
    pub async fn seed_user(&self, role: UserRole, email: &str) -> (Uuid, String) {
        let user = self
            .state
            .store
            .insert(NewUser {
                role,
                name: "Test User".to_string(),
                email: email.to_string(),
                password_hash: hash_password(PASSWORD).unwrap(),
            })
            .await
            .unwrap();

        let token = self
            .state
            .tokens
            .issue(Claims::new(user.uuid.to_string(), role.as_str()))
            .unwrap();
        (user.uuid, token)
    }
}

pub fn generate_unique_email() -> String {
    format!("test-{}@example.com", Uuid::new_v4())
}
