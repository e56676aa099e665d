use schoolrun_auth::TokenService;
use std::sync::Arc;

use crate::middleware::guarded;
use crate::middleware::role::RequireRole;
use crate::routing::RouteTableBuilder;
use crate::state::AppState;

use super::controller::{delete_user, get_profile, list_users};

pub fn init_users_routes(
    builder: RouteTableBuilder<AppState>,
    tokens: &Arc<TokenService>,
) -> RouteTableBuilder<AppState> {
    let admin = guarded(tokens, RequireRole::admin());

    builder
        .get("/api/admin/profile", get_profile, &admin)
        .get("/api/driver/profile", get_profile, &guarded(tokens, RequireRole::driver()))
        .get("/api/student/profile", get_profile, &guarded(tokens, RequireRole::student()))
        .get("/api/parent/profile", get_profile, &guarded(tokens, RequireRole::parent()))
        .get("/api/admin/users", list_users, &admin)
        .delete("/api/admin/users/:uuid", delete_user, &admin)
}
