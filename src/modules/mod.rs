//! Feature modules.
//!
//! Each module follows the same layout:
//!
//! - `controller.rs`: route handlers
//! - `service.rs`: business logic over the [`UserStore`](crate::store::UserStore)
//! - `router.rs`: registration of the module's routes and their middleware
//! - `model.rs`: request DTOs, where the module has any

pub mod auth;
pub mod drivers;
pub mod users;
