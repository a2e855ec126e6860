use ::common::{endpoints, ApiError, CollectionRecord};
use crate::api_client;

/// Recent pickups of the user's bins
pub async fn get_recycling_activity(user_id: &str) -> Result<Vec<CollectionRecord>, ApiError> {
    log::trace!("Fetching recycling activity for user {}", user_id);
    let result = api_client::get_json::<Vec<CollectionRecord>>(&endpoints::collector_activity(user_id)).await;
    match &result {
        Ok(records) => log::info!("Fetched {} collection records for user {}", records.len(), user_id),
        Err(e) => log::error!("Failed to fetch recycling activity for user {}: {}", user_id, e),
    }
    result
}

/// Collections recorded against one schedule
pub async fn get_waste_details(schedule_id: &str) -> Result<Vec<CollectionRecord>, ApiError> {
    log::trace!("Fetching waste details for schedule {}", schedule_id);
    let result = api_client::get_json::<Vec<CollectionRecord>>(&endpoints::waste_details(schedule_id)).await;
    match &result {
        Ok(records) => log::info!("Fetched {} waste records for schedule {}", records.len(), schedule_id),
        Err(e) => log::error!("Failed to fetch waste details for schedule {}: {}", schedule_id, e),
    }
    result
}
