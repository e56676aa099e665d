use std::fmt;

use crate::context::RequestContext;

/// Body of `POST /register`. Absent or non-string fields read as empty.
#[derive(Clone)]
pub struct RegisterRequest {
    pub role: String,
    pub name: String,
    pub email: String,
    pub password: String,
}

impl RegisterRequest {
    pub fn from_context(ctx: &RequestContext) -> Self {
        Self {
            role: string_field(ctx, "role"),
            name: string_field(ctx, "name"),
            email: string_field(ctx, "email"),
            password: string_field(ctx, "password"),
        }
    }
}

impl fmt::Debug for RegisterRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RegisterRequest")
            .field("role", &self.role)
            .field("name", &self.name)
            .field("email", &self.email)
            .finish_non_exhaustive()
    }
}

/// Body of `POST /login`.
#[derive(Clone)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

impl LoginRequest {
    pub fn from_context(ctx: &RequestContext) -> Self {
        Self {
            email: string_field(ctx, "email"),
            password: string_field(ctx, "password"),
        }
    }
}

impl fmt::Debug for LoginRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LoginRequest")
            .field("email", &self.email)
            .finish_non_exhaustive()
    }
}

fn string_field(ctx: &RequestContext, key: &str) -> String {
    ctx.body_field::<String>(key).unwrap_or_default()
}
