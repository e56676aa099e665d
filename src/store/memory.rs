use std::collections::HashMap;

use chrono::Utc;
use tokio::sync::RwLock;
use uuid::Uuid;

use schoolrun_core::AppError;
use schoolrun_models::{DriverLocation, NewUser, User, UserRole};

use super::{DUPLICATE_EMAIL_MESSAGE, StoreFuture, UserStore};

#[derive(Debug, Default)]
struct Inner {
    users: Vec<User>,
    locations: HashMap<Uuid, DriverLocation>,
}

/// Process-local [`UserStore`]. Contents are lost on restart.
#[derive(Debug, Default)]
pub struct MemoryUserStore {
    inner: RwLock<Inner>,
}

impl MemoryUserStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl UserStore for MemoryUserStore {
    fn count_users(&self) -> StoreFuture<'_, usize> {
        Box::pin(async move { Ok(self.inner.read().await.users.len()) })
    }

    fn find_by_email<'a>(&'a self, email: &'a str) -> StoreFuture<'a, Option<User>> {
        Box::pin(async move {
            let inner = self.inner.read().await;
            Ok(inner.users.iter().find(|u| u.email == email).cloned())
        })
    }

    fn find_by_uuid(&self, uuid: Uuid) -> StoreFuture<'_, Option<User>> {
        Box::pin(async move {
            let inner = self.inner.read().await;
            Ok(inner.users.iter().find(|u| u.uuid == uuid).cloned())
        })
    }

    fn insert(&self, user: NewUser) -> StoreFuture<'_, User> {
        Box::pin(async move {
            let mut inner = self.inner.write().await;
            if inner.users.iter().any(|u| u.email == user.email) {
                return Err(AppError::bad_request(DUPLICATE_EMAIL_MESSAGE));
            }

            let created = User {
                uuid: Uuid::new_v4(),
                role: user.role,
                name: user.name,
                email: user.email,
                password_hash: user.password_hash,
                created_at: Utc::now(),
            };
            inner.users.push(created.clone());
            Ok(created)
        })
    }

    fn list_users(&self, role: Option<UserRole>) -> StoreFuture<'_, Vec<User>> {
        Box::pin(async move {
            let inner = self.inner.read().await;
            Ok(inner
                .users
                .iter()
                .filter(|u| role.is_none_or(|r| u.role == r))
                .cloned()
                .collect())
        })
    }

    fn delete(&self, uuid: Uuid) -> StoreFuture<'_, bool> {
        Box::pin(async move {
            let mut inner = self.inner.write().await;
            let before = inner.users.len();
            inner.users.retain(|u| u.uuid != uuid);
            inner.locations.remove(&uuid);
            Ok(inner.users.len() != before)
        })
    }

    fn update_driver_location(
        &self,
        uuid: Uuid,
        lat: f64,
        lng: f64,
    ) -> StoreFuture<'_, DriverLocation> {
        Box::pin(async move {
            let location = DriverLocation {
                uuid,
                lat,
                lng,
                updated_at: Utc::now(),
            };
            self.inner
                .write()
                .await
                .locations
                .insert(uuid, location.clone());
            Ok(location)
        })
    }

    fn driver_location(&self, uuid: Uuid) -> StoreFuture<'_, Option<DriverLocation>> {
        Box::pin(async move { Ok(self.inner.read().await.locations.get(&uuid).cloned()) })
    }
}
