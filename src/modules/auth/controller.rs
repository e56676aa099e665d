use axum::http::StatusCode;
use schoolrun_core::{ApiResponse, AppError};
use tracing::instrument;

use crate::context::RequestContext;
use crate::routing::PathParams;
use crate::state::AppState;

use super::model::{LoginRequest, RegisterRequest};
use super::service::AuthService;

/// Reports whether any account exists yet.
#[instrument(skip_all)]
pub async fn check_account(
    state: AppState,
    _ctx: RequestContext,
    _params: PathParams,
) -> Result<ApiResponse, AppError> {
    let status = AuthService::check_account(state.store.as_ref()).await?;
    ApiResponse::ok(status)
}

/// Register a new account and return a token for it
#[instrument(skip_all)]
pub async fn register(
    state: AppState,
    ctx: RequestContext,
    _params: PathParams,
) -> Result<ApiResponse, AppError> {
    let dto = RegisterRequest::from_context(&ctx);
    let response = AuthService::register(state.store.as_ref(), &state.tokens, dto).await?;
    ApiResponse::json(response, StatusCode::CREATED)
}

/// Login and receive a token
#[instrument(skip_all)]
pub async fn login(
    state: AppState,
    ctx: RequestContext,
    _params: PathParams,
) -> Result<ApiResponse, AppError> {
    let dto = LoginRequest::from_context(&ctx);
    let response = AuthService::login(state.store.as_ref(), &state.tokens, dto).await?;
    ApiResponse::ok(response)
}
