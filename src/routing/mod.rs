//! Request routing.
//!
//! Routes are registered once at startup through [`RouteTableBuilder`] and
//! frozen into a [`RouteTable`]. The [`Dispatcher`] resolves each request by
//! linear scan in registration order, runs the route's middleware chain and
//! then its handler.
//!
//! ```ignore
//! let table = RouteTableBuilder::new()
//!     .get("/api/admin/drivers/:uuid/location", get_driver_location, &admin_only)
//!     .build()?;
//! let dispatcher = Dispatcher::new(table, state);
//! let response = dispatcher.dispatch(ctx).await;
//! ```

pub mod dispatcher;
pub mod pattern;
pub mod route;
pub mod table;

pub use dispatcher::{Dispatcher, NOT_FOUND_MESSAGE};
pub use pattern::{PathParams, PathPattern, PatternError};
pub use route::{Handler, HandlerFuture, Route};
pub use table::{RouteTable, RouteTableBuilder};
