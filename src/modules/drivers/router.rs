use schoolrun_auth::TokenService;
use std::sync::Arc;

use crate::middleware::guarded;
use crate::middleware::role::RequireRole;
use crate::routing::RouteTableBuilder;
use crate::state::AppState;

use super::controller::{get_driver_location, update_location};

pub fn init_drivers_routes(
    builder: RouteTableBuilder<AppState>,
    tokens: &Arc<TokenService>,
) -> RouteTableBuilder<AppState> {
    builder
        .post(
            "/api/driver/location",
            update_location,
            &guarded(tokens, RequireRole::driver()),
        )
        .get(
            "/api/admin/drivers/:uuid/location",
            get_driver_location,
            &guarded(tokens, RequireRole::admin()),
        )
}
