//! # Schoolrun API
//!
//! The request-dispatch and authentication core of a school-transport REST
//! API serving four kinds of account: admins, drivers, students and parents.
//!
//! ## Architecture
//!
//! ```text
//! src/
//! ├── context.rs       # Per-request context (method, path, headers, body, attributes)
//! ├── middleware/      # Middleware chain, bearer auth, role guards
//! ├── routing/         # Path patterns, route table, dispatcher
//! ├── modules/         # Feature modules
//! │   ├── auth/        # Account check, register, login
//! │   ├── users/       # Profiles, admin user management
//! │   └── drivers/     # Driver location reporting
//! ├── store/           # UserStore collaborator and in-memory backend
//! ├── router.rs        # Route table assembly and HTTP transport
//! ├── logging.rs       # Request logging and subscriber setup
//! └── state.rs         # Shared application state
//! ```
//!
//! ## Request Lifecycle
//!
//! 1. The transport buffers the body and builds a [`RequestContext`](context::RequestContext).
//! 2. The [`Dispatcher`](routing::Dispatcher) finds the first route whose
//!    method and path pattern match, or answers `404 {"error": "Not Found"}`.
//! 3. The route's middleware runs in order; the first failure becomes the
//!    response.
//! 4. The handler returns exactly one [`ApiResponse`](schoolrun_core::ApiResponse).
//!
//! ## Authentication
//!
//! Protected routes require `Authorization: Bearer <token>`. Tokens are
//! HS256-signed, carry `uuid` and `role` claims, and expire 24 hours after
//! issue by default.
//!
//! ## Environment Variables
//!
//! ```bash
//! JWT_SECRET=your-secure-secret-key   # required
//! JWT_TTL_SECONDS=86400
//! HOST=0.0.0.0
//! PORT=8000
//! APP_ENV=production
//! ALLOWED_ORIGINS=*
//! ```

pub mod context;
pub mod logging;
pub mod middleware;
pub mod modules;
pub mod router;
pub mod routing;
pub mod state;
pub mod store;

// Re-export workspace crates for convenience
pub use schoolrun_auth;
pub use schoolrun_config;
pub use schoolrun_core;
pub use schoolrun_models;
