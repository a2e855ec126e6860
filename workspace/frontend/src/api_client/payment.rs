use ::common::{endpoints, ApiError, Payment};
use crate::api_client;

/// Next payment date as the backend's raw text
pub async fn get_next_payment(user_id: &str) -> Result<String, ApiError> {
    log::trace!("Fetching next payment date for user {}", user_id);
    let result = api_client::get_text(&endpoints::next_payment(user_id)).await;
    if let Err(e) = &result {
        log::error!("Failed to fetch next payment date for user {}: {}", user_id, e);
    }
    result
}

/// Payment history, newest first
pub async fn get_payment_history(user_id: &str) -> Result<Vec<Payment>, ApiError> {
    log::trace!("Fetching payment history for user {}", user_id);
    let result = api_client::get_json::<Vec<Payment>>(&endpoints::payment_history(user_id)).await;
    match &result {
        Ok(payments) => log::info!("Fetched {} payments for user {}", payments.len(), user_id),
        Err(e) => log::error!("Failed to fetch payment history for user {}: {}", user_id, e),
    }
    result
}
