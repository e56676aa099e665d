use schoolrun_auth::Claims;
use schoolrun_core::AppError;
use schoolrun_models::{UserProfile, UserRole, ids};
use tracing::info;
use uuid::Uuid;

use crate::store::UserStore;

pub struct UserService;

impl UserService {
    /// Profile of the account named by the token's identity claim.
    pub async fn profile(store: &dyn UserStore, claims: &Claims) -> Result<UserProfile, AppError> {
        let uuid = identity_of(claims)?;
        store
            .find_by_uuid(uuid)
            .await?
            .map(|user| user.profile())
            .ok_or_else(|| AppError::not_found("User not found"))
    }

    pub async fn list_users(
        store: &dyn UserStore,
        role: Option<UserRole>,
    ) -> Result<Vec<UserProfile>, AppError> {
        let users = store.list_users(role).await?;
        Ok(users.iter().map(|user| user.profile()).collect())
    }

    pub async fn delete_user(store: &dyn UserStore, uuid: &str) -> Result<(), AppError> {
        let uuid = parse_uuid(uuid)?;
        if !store.delete(uuid).await? {
            return Err(AppError::not_found("User not found"));
        }
        info!(%uuid, "User deleted");
        Ok(())
    }
}

/// Parses a path identifier; anything but canonical UUID text is a client
/// error.
pub fn parse_uuid(text: &str) -> Result<Uuid, AppError> {
    ids::parse(text).map_err(|_| AppError::bad_request("Invalid UUID"))
}

/// The account identifier carried by verified claims.
pub fn identity_of(claims: &Claims) -> Result<Uuid, AppError> {
    claims
        .identity()
        .and_then(|id| ids::parse(id).ok())
        .ok_or_else(|| AppError::unauthorized("Invalid Token"))
}
