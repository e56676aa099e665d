use schoolrun_core::{ApiResponse, AppError};
use schoolrun_models::UserRole;
use serde_json::json;
use tracing::instrument;

use crate::context::RequestContext;
use crate::routing::PathParams;
use crate::state::AppState;

use super::service::UserService;

/// Current user's profile. Shared by every role's `/profile` route.
#[instrument(skip_all, fields(path = %ctx.path()))]
pub async fn get_profile(
    state: AppState,
    ctx: RequestContext,
    _params: PathParams,
) -> Result<ApiResponse, AppError> {
    let claims = ctx
        .user()
        .ok_or_else(|| AppError::unauthorized("Unauthorized"))?;
    let profile = UserService::profile(state.store.as_ref(), &claims).await?;
    ApiResponse::ok(profile)
}

/// List accounts, optionally filtered with `?role=`
#[instrument(skip_all)]
pub async fn list_users(
    state: AppState,
    ctx: RequestContext,
    _params: PathParams,
) -> Result<ApiResponse, AppError> {
    let role = match ctx.query("role") {
        None | Some("") => None,
        Some(raw) => Some(
            raw.parse::<UserRole>()
                .map_err(|_| AppError::bad_request("Invalid role filter"))?,
        ),
    };

    let users = UserService::list_users(state.store.as_ref(), role).await?;
    ApiResponse::ok(users)
}

#[instrument(skip_all)]
pub async fn delete_user(
    state: AppState,
    _ctx: RequestContext,
    params: PathParams,
) -> Result<ApiResponse, AppError> {
    UserService::delete_user(state.store.as_ref(), params.required(0)?).await?;
    ApiResponse::ok(json!({ "message": "User deleted" }))
}
