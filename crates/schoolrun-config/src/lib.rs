//! # Schoolrun Config
//!
//! Configuration structures loaded from environment variables:
//!
//! - [`jwt`]: token signing secret and lifetime
//! - [`server`]: bind address, deployment environment and log settings
//! - [`cors`]: allowed cross-origin callers
//!
//! Every loader has a `from_env` constructor and a `from_source` constructor
//! taking a lookup closure, so tests never touch the process environment.
//!
//! # Example
//!
//! ```ignore
//! use schoolrun_config::{CorsConfig, JwtConfig, ServerConfig};
//!
//! let jwt_config = JwtConfig::from_env()?; // fails when JWT_SECRET is unset
//! let server_config = ServerConfig::from_env()?;
//! let cors_config = CorsConfig::from_env();
//! ```

pub mod cors;
pub mod error;
pub mod jwt;
pub mod server;

// Re-export commonly used types at crate root
pub use cors::CorsConfig;
pub use error::ConfigError;
pub use jwt::JwtConfig;
pub use server::{Environment, ServerConfig};
