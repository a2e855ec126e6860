use ::common::{endpoints, ApiError, Bin, BinCheck, BinStatus, MonthlyCollections, MonthlyTotal, NewBinRequest};
use crate::api_client;

/// Bins registered to a user
pub async fn get_bins(user_id: &str) -> Result<Vec<Bin>, ApiError> {
    log::trace!("Fetching bins for user {}", user_id);
    let result = api_client::get_json::<Vec<Bin>>(&endpoints::bins_for_user(user_id)).await;
    match &result {
        Ok(bins) => log::info!("Fetched {} bins for user {}", bins.len(), user_id),
        Err(e) => log::error!("Failed to fetch bins for user {}: {}", user_id, e),
    }
    result
}

pub async fn get_monthly_collections(bin_id: &str) -> Result<MonthlyCollections, ApiError> {
    log::trace!("Fetching monthly collections for bin {}", bin_id);
    let result = api_client::get_json::<MonthlyCollections>(&endpoints::monthly_collections(bin_id)).await;
    if let Err(e) = &result {
        log::error!("Failed to fetch monthly collections for bin {}: {}", bin_id, e);
    }
    result
}

/// Monthly counts plus the `Total` used as the fill level
pub async fn get_monthly_total(bin_id: &str) -> Result<MonthlyTotal, ApiError> {
    log::trace!("Fetching monthly total for bin {}", bin_id);
    let result = api_client::get_json::<MonthlyTotal>(&endpoints::monthly_total(bin_id)).await;
    match &result {
        Ok(total) => log::info!("Bin {} total: {}", bin_id, total.total),
        Err(e) => log::error!("Failed to fetch monthly total for bin {}: {}", bin_id, e),
    }
    result
}

pub async fn update_bin_status(bin_id: &str, status: BinStatus) -> Result<String, ApiError> {
    log::debug!("Setting bin {} status to {}", bin_id, status.as_str());
    let result = api_client::put_text(&endpoints::bin_status(bin_id, status)).await;
    match &result {
        Ok(message) => log::info!("Bin {} status updated: {}", bin_id, message),
        Err(e) => log::error!("Failed to update bin {} status: {}", bin_id, e),
    }
    result
}

pub async fn register_bin(request: &NewBinRequest) -> Result<String, ApiError> {
    log::debug!("Registering {} bin ({}) for user {}", request.bin_type, request.capacity, request.user_id);
    let result = api_client::post_json_text(&endpoints::add_bin(), request).await;
    match &result {
        Ok(_) => log::info!("Registered bin for user {}", request.user_id),
        Err(e) => log::error!("Failed to register bin for user {}: {}", request.user_id, e),
    }
    result
}

pub async fn has_bin(user_id: &str) -> Result<bool, ApiError> {
    log::trace!("Checking bin registration for user {}", user_id);
    let result = api_client::get_json::<BinCheck>(&endpoints::bin_check(user_id))
        .await
        .map(|check| check.has_bin);
    if let Err(e) = &result {
        log::error!("Failed to check bin for user {}: {}", user_id, e);
    }
    result
}
