//! # Schoolrun Models
//!
//! Domain types shared between the HTTP layer and the persistence
//! collaborator:
//!
//! - [`roles`]: the four account roles
//! - [`users`]: user records, public profiles and response payloads
//! - [`ids`]: lossless conversion of identifiers between text and binary form

pub mod ids;
pub mod roles;
pub mod users;

// Re-export commonly used types at crate root
pub use ids::IdError;
pub use roles::UserRole;
pub use users::{AccountStatus, AuthResponse, DriverLocation, NewUser, User, UserProfile};
