//! Backend-owned records mirrored transiently by the console.
//!
//! Field names follow the backend's JSON exactly (camelCase, with the bin id
//! spelled `binid`). Optional fields default when absent so an older or newer
//! backend never breaks deserialization.

use std::collections::BTreeMap;

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Deserializer, Serialize};

// ===================== Schedules =====================

/// A collection run: driver, time, route and the bins to empty.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Schedule {
    pub schedule_id: String,
    #[serde(default)]
    pub smart_bins: Vec<String>,
    #[serde(default)]
    pub driver_id: String,
    /// `HH:MM`
    #[serde(default)]
    pub time: String,
    #[serde(default)]
    pub route: String,
}

// ===================== Drivers =====================

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Driver {
    pub driver_id: String,
    #[serde(default)]
    pub driver_name: String,
    #[serde(default)]
    pub available: bool,
}

impl Driver {
    pub fn availability_label(&self) -> &'static str {
        if self.available { "Available" } else { "Not Available" }
    }
}

// ===================== Bins =====================

/// Bin as returned by `GET /api/waste/Bin/getbindetails`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Bin {
    pub binid: String,
    #[serde(default)]
    pub user_id: Option<String>,
    #[serde(default)]
    pub bin_type: Option<String>,
    #[serde(default)]
    pub capacity: Option<String>,
    #[serde(default)]
    pub location: Option<String>,
}

/// Collection status of a bin. The backend owns transitions; the console only
/// requests `Scheduled`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BinStatus {
    Full,
    Available,
    Scheduled,
}

impl BinStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            BinStatus::Full => "Full",
            BinStatus::Available => "Available",
            BinStatus::Scheduled => "Scheduled",
        }
    }
}

/// Row of the full-bins table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FullBin {
    pub bin_id: String,
    pub location: String,
    pub status: BinStatus,
    pub last_collected: String,
}

impl FullBin {
    /// Bins currently reported full. There is no backend endpoint for this
    /// list yet, so the roster is fixed.
    pub fn roster() -> Vec<FullBin> {
        [
            ("SB001", "Malabe", "2024-10-10 10:30 am"),
            ("SB002", "Kaduwela", "2024-10-09 09:45 am"),
            ("SB003", "Nugegoda", "2024-10-08 11:15 am"),
            ("SB004", "Colombo 7", "2024-10-11 08:00 am"),
            ("SB005", "Dehiwala", "2024-10-09 07:30 am"),
            ("SB006", "Moratuwa", "2024-10-10 09:00 am"),
            ("SB007", "Pettah", "2024-10-11 12:45 pm"),
            ("SB008", "Kollupitiya", "2024-10-09 03:30 pm"),
            ("SB009", "Battaramulla", "2024-10-08 06:15 am"),
            ("SB010", "Kelaniya", "2024-10-10 02:00 pm"),
        ]
        .into_iter()
        .map(|(bin_id, location, last_collected)| FullBin {
            bin_id: bin_id.to_string(),
            location: location.to_string(),
            status: BinStatus::Full,
            last_collected: last_collected.to_string(),
        })
        .collect()
    }
}

/// Body of `POST /api/waste/Bin/addbin`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewBinRequest {
    pub user_id: String,
    pub bin_type: String,
    pub capacity: String,
}

/// Response of `GET /api/waste/bins/check`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BinCheck {
    #[serde(default)]
    pub has_bin: bool,
}

/// Collection counts keyed by English month name.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MonthlyCollections(pub BTreeMap<String, u64>);

/// Monthly counts plus the `Total` the fill level is read from.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MonthlyTotal {
    #[serde(rename = "Total", default)]
    pub total: f64,
    #[serde(flatten)]
    pub months: BTreeMap<String, u64>,
}

// ===================== Payments & collections =====================

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Payment {
    #[serde(default)]
    pub payment_id: String,
    #[serde(default)]
    pub payment_amount: f64,
    #[serde(default, deserialize_with = "date_text")]
    pub payment_date: Option<String>,
    #[serde(default, deserialize_with = "date_text")]
    pub next_payment_date: Option<String>,
}

/// A single pickup of a bin by a driver.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CollectionRecord {
    #[serde(default)]
    pub id: Option<i64>,
    #[serde(default)]
    pub userid: Option<String>,
    #[serde(default)]
    pub collector_id: Option<String>,
    #[serde(default)]
    pub bin_id: String,
    #[serde(default)]
    pub bin_type: Option<String>,
    #[serde(default)]
    pub driver_name: Option<String>,
    #[serde(default, deserialize_with = "date_text")]
    pub collection_date: Option<String>,
}

/// Dates arrive either as ISO text or as epoch milliseconds depending on the
/// backend's Jackson settings; both are normalised to text.
fn date_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Text(String),
        Millis(i64),
    }

    Ok(match Option::<Raw>::deserialize(deserializer)? {
        None => None,
        Some(Raw::Text(text)) => Some(text),
        Some(Raw::Millis(ms)) => DateTime::<Utc>::from_timestamp_millis(ms).map(|dt| dt.to_rfc3339()),
    })
}

/// Calendar day (UTC) of a backend date, formatted `YYYY-MM-DD`.
pub fn iso_day(raw: &str) -> Option<String> {
    let raw = raw.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.with_timezone(&Utc).date_naive().to_string());
    }
    if let Ok(dt) = DateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f%z") {
        return Some(dt.with_timezone(&Utc).date_naive().to_string());
    }
    raw.get(..10)
        .and_then(|prefix| NaiveDate::parse_from_str(prefix, "%Y-%m-%d").ok())
        .map(|date| date.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_schedule_uses_backend_field_names() {
        let schedule = Schedule {
            schedule_id: "S00003".to_string(),
            smart_bins: vec!["SB001".to_string(), "SB002".to_string()],
            driver_id: "D001".to_string(),
            time: "10:30".to_string(),
            route: "City Center".to_string(),
        };

        let json = serde_json::to_value(&schedule).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "scheduleId": "S00003",
                "smartBins": ["SB001", "SB002"],
                "driverId": "D001",
                "time": "10:30",
                "route": "City Center"
            })
        );
    }

    #[test]
    fn test_bin_reads_lowercase_binid() {
        let bin: Bin = serde_json::from_str(
            r#"{"binid":"B1","userId":"USER2","binType":"general","capacity":"340L","location":"Malabe"}"#,
        )
        .unwrap();
        assert_eq!(bin.binid, "B1");
        assert_eq!(bin.bin_type.as_deref(), Some("general"));
        assert_eq!(bin.location.as_deref(), Some("Malabe"));
    }

    #[test]
    fn test_monthly_total_splits_total_from_months() {
        let total: MonthlyTotal =
            serde_json::from_str(r#"{"September":3,"October":2,"Total":5}"#).unwrap();
        assert_eq!(total.total, 5.0);
        assert_eq!(total.months.get("September"), Some(&3));
        assert!(!total.months.contains_key("Total"));
    }

    #[test]
    fn test_payment_date_accepts_millis_and_text() {
        let from_text: Payment = serde_json::from_str(
            r#"{"paymentId":"P1","paymentAmount":1200.5,"paymentDate":"2024-10-12T00:00:00.000+00:00"}"#,
        )
        .unwrap();
        assert_eq!(from_text.payment_date.as_deref().and_then(iso_day).as_deref(), Some("2024-10-12"));

        let from_millis: Payment =
            serde_json::from_str(r#"{"paymentId":"P2","paymentAmount":10,"paymentDate":1728691200000}"#).unwrap();
        assert_eq!(from_millis.payment_date.as_deref().and_then(iso_day).as_deref(), Some("2024-10-12"));
    }

    #[test]
    fn test_iso_day_rejects_garbage() {
        assert_eq!(iso_day("not a date"), None);
        assert_eq!(iso_day(""), None);
        assert_eq!(iso_day("2024-05-25"), Some("2024-05-25".to_string()));
    }

    #[test]
    fn test_full_bin_roster_is_all_full() {
        let roster = FullBin::roster();
        assert_eq!(roster.len(), 10);
        assert!(roster.iter().all(|bin| bin.status == BinStatus::Full));
        assert_eq!(roster[0].bin_id, "SB001");
    }
}
