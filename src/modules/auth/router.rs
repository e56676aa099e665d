use crate::routing::RouteTableBuilder;
use crate::state::AppState;

use super::controller::{check_account, login, register};

/// Public routes: no middleware.
pub fn init_auth_routes(builder: RouteTableBuilder<AppState>) -> RouteTableBuilder<AppState> {
    builder
        .get("/", check_account, &[])
        .post("/register", register, &[])
        .post("/login", login, &[])
}
