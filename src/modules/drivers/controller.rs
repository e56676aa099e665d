use schoolrun_core::{ApiResponse, AppError};
use serde_json::json;
use tracing::instrument;

use crate::context::RequestContext;
use crate::modules::users::service::{identity_of, parse_uuid};
use crate::routing::PathParams;
use crate::state::AppState;

use super::service::DriverService;

/// Record the calling driver's position from `{"lat": .., "lng": ..}`.
#[instrument(skip_all)]
pub async fn update_location(
    state: AppState,
    ctx: RequestContext,
    _params: PathParams,
) -> Result<ApiResponse, AppError> {
    let claims = ctx
        .user()
        .ok_or_else(|| AppError::unauthorized("Unauthorized"))?;
    let driver = identity_of(&claims)?;

    let (Some(lat), Some(lng)) = (ctx.body_field::<f64>("lat"), ctx.body_field::<f64>("lng")) else {
        return Err(AppError::bad_request("Missing lat/lng"));
    };

    let location = DriverService::update_location(state.store.as_ref(), driver, lat, lng).await?;
    ApiResponse::ok(json!({
        "message": "Location updated",
        "location": location,
    }))
}

#[instrument(skip_all)]
pub async fn get_driver_location(
    state: AppState,
    _ctx: RequestContext,
    params: PathParams,
) -> Result<ApiResponse, AppError> {
    let driver = parse_uuid(params.required(0)?)?;
    let location = DriverService::location(state.store.as_ref(), driver).await?;
    ApiResponse::ok(location)
}
