//! User persistence collaborator.
//!
//! Handlers reach accounts and driver locations only through the
//! [`UserStore`] trait held in [`AppState`](crate::state::AppState), so the
//! backend can be swapped without touching business logic.
//!
//! # Example
//!
//! ```ignore
//! use schoolrun::store::{MemoryUserStore, UserStore};
//!
//! let store = MemoryUserStore::new();
//! let user = store.insert(new_user).await?;
//! let found = store.find_by_email(&user.email).await?;
//! ```

use std::future::Future;
use std::pin::Pin;

use uuid::Uuid;

use schoolrun_core::AppError;
use schoolrun_models::{DriverLocation, NewUser, User, UserRole};

pub mod memory;

pub use memory::MemoryUserStore;

/// Message returned when registering an email that is already taken.
pub const DUPLICATE_EMAIL_MESSAGE: &str = "Email already exists";

pub type StoreFuture<'a, T> = Pin<Box<dyn Future<Output = Result<T, AppError>> + Send + 'a>>;

/// Storage backend for accounts and driver locations.
pub trait UserStore: Send + Sync {
    /// Number of registered accounts.
    fn count_users(&self) -> StoreFuture<'_, usize>;

    fn find_by_email<'a>(&'a self, email: &'a str) -> StoreFuture<'a, Option<User>>;

    fn find_by_uuid(&self, uuid: Uuid) -> StoreFuture<'_, Option<User>>;

    /// Creates an account.
    ///
    /// # Errors
    ///
    /// Returns `400 Email already exists` if the email is taken. The check
    /// and the insert are atomic.
    fn insert(&self, user: NewUser) -> StoreFuture<'_, User>;

    /// Accounts in creation order, optionally restricted to one role.
    fn list_users(&self, role: Option<UserRole>) -> StoreFuture<'_, Vec<User>>;

    /// Removes an account and any location it reported. Returns `false` if
    /// no account had that identifier.
    fn delete(&self, uuid: Uuid) -> StoreFuture<'_, bool>;

    fn update_driver_location(
        &self,
        uuid: Uuid,
        lat: f64,
        lng: f64,
    ) -> StoreFuture<'_, DriverLocation>;

    fn driver_location(&self, uuid: Uuid) -> StoreFuture<'_, Option<DriverLocation>>;
}
