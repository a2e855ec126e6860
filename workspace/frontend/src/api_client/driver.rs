use ::common::{endpoints, ApiError, Driver};
use crate::api_client;

/// Get every driver, available or not
pub async fn get_drivers() -> Result<Vec<Driver>, ApiError> {
    log::trace!("Fetching all drivers");
    let result = api_client::get_json::<Vec<Driver>>(&endpoints::all_drivers()).await;
    match &result {
        Ok(drivers) => log::info!("Fetched {} drivers", drivers.len()),
        Err(e) => log::error!("Failed to fetch drivers: {}", e),
    }
    result
}
