//! Backend paths, relative to the configured origin.
//!
//! Path segments and query values are percent-encoded; the fixed parts are
//! byte-exact copies of what the backend routes on (including its mixed
//! casing such as `Bin` and `Payment`).

use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};

use crate::model::BinStatus;

/// Unreserved characters stay readable in ids like `SB-001`.
const COMPONENT: &AsciiSet = &NON_ALPHANUMERIC.remove(b'-').remove(b'_').remove(b'.').remove(b'~');

fn encode(value: &str) -> String {
    utf8_percent_encode(value, COMPONENT).to_string()
}

fn with_query(path: &str, key: &str, value: &str) -> String {
    format!("{path}?{key}={}", encode(value))
}

// ===================== Schedules =====================

pub fn all_schedules() -> String {
    "/api/waste/schedule/getSchedules".to_string()
}

pub fn schedule(schedule_id: &str) -> String {
    with_query("/api/waste/schedule/getSchedule", "scheduleId", schedule_id)
}

pub fn add_schedule() -> String {
    "/api/waste/schedule/add".to_string()
}

pub fn update_schedule(schedule_id: &str) -> String {
    format!("/api/waste/schedule/update/{}", encode(schedule_id))
}

pub fn delete_schedule(schedule_id: &str) -> String {
    format!("/api/waste/schedule/delete/{}", encode(schedule_id))
}

// ===================== Drivers =====================

pub fn all_drivers() -> String {
    "/api/waste/drivers/all".to_string()
}

// ===================== Bins =====================

pub fn bins_for_user(user_id: &str) -> String {
    with_query("/api/waste/Bin/getbindetails", "userid", user_id)
}

pub fn monthly_collections(bin_id: &str) -> String {
    format!("/api/waste/Bin/{}/collections/monthly", encode(bin_id))
}

pub fn monthly_total(bin_id: &str) -> String {
    format!("/api/waste/Bin/{}/collections/monthly-total", encode(bin_id))
}

pub fn bin_status(bin_id: &str, status: BinStatus) -> String {
    with_query(
        &format!("/api/waste/Bin/{}/status", encode(bin_id)),
        "newStatus",
        status.as_str(),
    )
}

pub fn add_bin() -> String {
    "/api/waste/Bin/addbin".to_string()
}

pub fn bin_check(user_id: &str) -> String {
    with_query("/api/waste/bins/check", "userId", user_id)
}

// ===================== Payments & account =====================

pub fn next_payment(user_id: &str) -> String {
    with_query("/api/waste/Payment/nextPayment", "userid", user_id)
}

pub fn payment_history(user_id: &str) -> String {
    with_query("/api/waste/Payment/getdetails", "userid", user_id)
}

pub fn account_status(user_id: &str) -> String {
    with_query("/api/waste/users/status", "userId", user_id)
}

// ===================== Collections =====================

pub fn collector_activity(user_id: &str) -> String {
    with_query("/api/waste/collector/getcollecterdetails", "userid", user_id)
}

/// Lives outside `/api` on the backend.
pub fn waste_details(schedule_id: &str) -> String {
    with_query("/waste/getWasteDetails", "scheduleId", schedule_id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_schedule_paths_are_exact() {
        assert_eq!(all_schedules(), "/api/waste/schedule/getSchedules");
        assert_eq!(schedule("S001"), "/api/waste/schedule/getSchedule?scheduleId=S001");
        assert_eq!(add_schedule(), "/api/waste/schedule/add");
        assert_eq!(update_schedule("S001"), "/api/waste/schedule/update/S001");
        assert_eq!(delete_schedule("S001"), "/api/waste/schedule/delete/S001");
    }

    #[test]
    fn test_bin_paths_are_exact() {
        assert_eq!(bins_for_user("USER2"), "/api/waste/Bin/getbindetails?userid=USER2");
        assert_eq!(monthly_collections("B7"), "/api/waste/Bin/B7/collections/monthly");
        assert_eq!(monthly_total("B7"), "/api/waste/Bin/B7/collections/monthly-total");
        assert_eq!(
            bin_status("B7", BinStatus::Scheduled),
            "/api/waste/Bin/B7/status?newStatus=Scheduled"
        );
        assert_eq!(bin_check("USER2"), "/api/waste/bins/check?userId=USER2");
    }

    #[test]
    fn test_user_paths_keep_backend_query_casing() {
        assert_eq!(next_payment("U1"), "/api/waste/Payment/nextPayment?userid=U1");
        assert_eq!(payment_history("U1"), "/api/waste/Payment/getdetails?userid=U1");
        assert_eq!(account_status("U1"), "/api/waste/users/status?userId=U1");
        assert_eq!(
            collector_activity("U1"),
            "/api/waste/collector/getcollecterdetails?userid=U1"
        );
        assert_eq!(waste_details("S9"), "/waste/getWasteDetails?scheduleId=S9");
    }

    #[test]
    fn test_values_are_percent_encoded() {
        assert_eq!(schedule("S 1&x"), "/api/waste/schedule/getSchedule?scheduleId=S%201%26x");
        assert_eq!(delete_schedule("a/b"), "/api/waste/schedule/delete/a%2Fb");
        assert_eq!(all_drivers(), "/api/waste/drivers/all");
        assert_eq!(bins_for_user("SB-001"), "/api/waste/Bin/getbindetails?userid=SB-001");
    }
}
