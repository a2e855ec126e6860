use ::common::{endpoints, ApiError};
use crate::api_client;

/// Account status text, e.g. `Active`
pub async fn get_account_status(user_id: &str) -> Result<String, ApiError> {
    log::trace!("Fetching account status for user {}", user_id);
    let result = api_client::get_text(&endpoints::account_status(user_id)).await;
    match &result {
        Ok(status) => log::info!("User {} status: {}", user_id, status),
        Err(e) => log::error!("Failed to fetch account status for user {}: {}", user_id, e),
    }
    result
}
