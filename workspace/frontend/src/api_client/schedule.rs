use ::common::{endpoints, ApiError, Schedule};
use crate::api_client;

/// Get all schedules
pub async fn get_schedules() -> Result<Vec<Schedule>, ApiError> {
    log::trace!("Fetching all schedules");
    let result = api_client::get_json::<Vec<Schedule>>(&endpoints::all_schedules()).await;
    match &result {
        Ok(schedules) => log::info!("Fetched {} schedules", schedules.len()),
        Err(e) => log::error!("Failed to fetch schedules: {}", e),
    }
    result
}

/// Get one schedule by its ID
pub async fn get_schedule(schedule_id: &str) -> Result<Schedule, ApiError> {
    log::trace!("Fetching schedule with ID: {}", schedule_id);
    let result = api_client::get_json::<Schedule>(&endpoints::schedule(schedule_id)).await;
    match &result {
        Ok(schedule) => log::info!("Fetched schedule {} (driver {})", schedule.schedule_id, schedule.driver_id),
        Err(e) => log::error!("Failed to fetch schedule {}: {}", schedule_id, e),
    }
    result
}

pub async fn add_schedule(schedule: &Schedule) -> Result<String, ApiError> {
    log::debug!("Creating schedule: {}", schedule.schedule_id);
    let result = api_client::post_json_text(&endpoints::add_schedule(), schedule).await;
    match &result {
        Ok(message) => log::info!("Created schedule {}: {}", schedule.schedule_id, message),
        Err(e) => log::error!("Failed to create schedule {}: {}", schedule.schedule_id, e),
    }
    result
}

pub async fn update_schedule(schedule_id: &str, schedule: &Schedule) -> Result<String, ApiError> {
    log::debug!("Updating schedule ID {}", schedule_id);
    let result = api_client::put_json_text(&endpoints::update_schedule(schedule_id), schedule).await;
    match &result {
        Ok(_) => log::info!("Updated schedule {}", schedule_id),
        Err(e) => log::error!("Failed to update schedule {}: {}", schedule_id, e),
    }
    result
}

pub async fn delete_schedule(schedule_id: &str) -> Result<String, ApiError> {
    log::debug!("Deleting schedule ID {}", schedule_id);
    let result = api_client::delete_text(&endpoints::delete_schedule(schedule_id)).await;
    match &result {
        Ok(_) => log::info!("Deleted schedule {}", schedule_id),
        Err(e) => log::error!("Failed to delete schedule {}: {}", schedule_id, e),
    }
    result
}
