use schoolrun_core::AppError;
use schoolrun_models::{DriverLocation, UserRole};
use tracing::debug;
use uuid::Uuid;

use crate::store::UserStore;

pub struct DriverService;

impl DriverService {
    pub async fn update_location(
        store: &dyn UserStore,
        driver: Uuid,
        lat: f64,
        lng: f64,
    ) -> Result<DriverLocation, AppError> {
        // The token may outlive the account it names.
        match store.find_by_uuid(driver).await? {
            Some(user) if user.role == UserRole::Driver => {}
            _ => return Err(AppError::not_found("User not found")),
        }

        let location = store.update_driver_location(driver, lat, lng).await?;
        debug!(%driver, "Driver location updated");
        Ok(location)
    }

    /// Last reported location of a driver account.
    pub async fn location(store: &dyn UserStore, driver: Uuid) -> Result<DriverLocation, AppError> {
        let not_found = || AppError::not_found("Driver location not found");

        match store.find_by_uuid(driver).await? {
            Some(user) if user.role == UserRole::Driver => {}
            _ => return Err(not_found()),
        }

        store.driver_location(driver).await?.ok_or_else(not_found)
    }
}
