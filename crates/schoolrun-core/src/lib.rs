//! # Schoolrun Core
//!
//! Core types shared by every schoolrun crate:
//!
//! - [`errors`]: the [`AppError`] type carrying an HTTP status and a cause
//! - [`response`]: the [`ApiResponse`] writer producing the JSON wire envelope
//! - [`password`]: bcrypt password hashing and verification
//!
//! # Example
//!
//! ```ignore
//! use schoolrun_core::{ApiResponse, AppError};
//!
//! fn lookup(found: bool) -> Result<ApiResponse, AppError> {
//!     if !found {
//!         return Err(AppError::not_found("User not found"));
//!     }
//!     ApiResponse::ok(serde_json::json!({ "ok": true }))
//! }
//! ```

pub mod errors;
pub mod password;
pub mod response;

// Re-export commonly used types at crate root
pub use errors::AppError;
pub use password::{hash_password, verify_password};
pub use response::ApiResponse;
