//! Chart series and aggregates derived from fetched records.

use serde::Serialize;

use crate::model::{MonthlyCollections, MonthlyTotal, Payment, iso_day};

const MONTHS: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartPoint {
    pub x: String,
    pub y: f64,
}

/// One line of the payment history list.
#[derive(Debug, Clone, PartialEq)]
pub struct PaymentRow {
    pub id: String,
    pub date: String,
    pub amount: f64,
    pub status: &'static str,
}

/// Rows in backend order (newest first). Unparseable dates show as empty.
pub fn payment_rows(payments: &[Payment]) -> Vec<PaymentRow> {
    payments
        .iter()
        .map(|payment| PaymentRow {
            id: payment.payment_id.clone(),
            date: payment.payment_date.as_deref().and_then(iso_day).unwrap_or_default(),
            amount: payment.payment_amount,
            status: "Paid",
        })
        .collect()
}

/// `{date, amount}` points, reversed into ascending date order for the chart.
pub fn payment_series(payments: &[Payment]) -> Vec<ChartPoint> {
    payment_rows(payments)
        .into_iter()
        .rev()
        .map(|row| ChartPoint {
            x: row.date,
            y: row.amount,
        })
        .collect()
}

/// Calendar-ordered bars. Keys that are not month names are ignored.
pub fn monthly_series(collections: &MonthlyCollections) -> Vec<ChartPoint> {
    MONTHS
        .iter()
        .filter_map(|month| {
            collections.0.get(*month).map(|count| ChartPoint {
                x: month.to_string(),
                y: *count as f64,
            })
        })
        .collect()
}

/// Fill level as reported by the backend's `Total`, and the same value
/// clamped to `0..=100` for a progress bar width.
pub fn fill_level(total: &MonthlyTotal) -> (f64, f64) {
    let raw = total.total;
    let width = if raw.is_finite() { raw.clamp(0.0, 100.0) } else { 0.0 };
    (raw, width)
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WasteReportRow {
    pub year: u16,
    pub general: f64,
    pub recyclable: f64,
    pub organic: f64,
}

/// Yearly household waste breakdown shown in the analysis report.
pub fn waste_report_series() -> Vec<WasteReportRow> {
    [
        (2006, 2500.0, 100.0, 0.0),
        (2008, 2000.0, 500.0, 50.0),
        (2010, 4000.0, 1000.0, 200.0),
        (2012, 10000.0, 5000.0, 1000.0),
        (2014, 4000.0, 7000.0, 2000.0),
        (2016, 3000.0, 8000.0, 3000.0),
        (2018, 2000.0, 9000.0, 4000.0),
    ]
    .into_iter()
    .map(|(year, general, recyclable, organic)| WasteReportRow {
        year,
        general,
        recyclable,
        organic,
    })
    .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeMap;

    fn payment(id: &str, date: &str, amount: f64) -> Payment {
        Payment {
            payment_id: id.to_string(),
            payment_amount: amount,
            payment_date: Some(date.to_string()),
            next_payment_date: None,
        }
    }

    #[test]
    fn test_payment_series_is_ascending() {
        let payments = vec![
            payment("P3", "2024-10-01T00:00:00.000+00:00", 4000.0),
            payment("P2", "2024-09-01T00:00:00.000+00:00", 3500.0),
            payment("P1", "2024-08-01T00:00:00.000+00:00", 3000.0),
        ];

        let series = payment_series(&payments);
        let dates: Vec<_> = series.iter().map(|p| p.x.as_str()).collect();
        assert_eq!(dates, vec!["2024-08-01", "2024-09-01", "2024-10-01"]);
        assert_eq!(series[0].y, 3000.0);

        let rows = payment_rows(&payments);
        assert_eq!(rows[0].id, "P3");
        assert!(rows.iter().all(|r| r.status == "Paid"));
    }

    #[test]
    fn test_payment_rows_tolerate_bad_dates() {
        let rows = payment_rows(&[payment("P1", "whenever", 10.0)]);
        assert_eq!(rows[0].date, "");
    }

    #[test]
    fn test_monthly_series_calendar_order() {
        let mut counts = BTreeMap::new();
        counts.insert("October".to_string(), 2);
        counts.insert("August".to_string(), 5);
        counts.insert("Total".to_string(), 7);

        let series = monthly_series(&MonthlyCollections(counts));
        let months: Vec<_> = series.iter().map(|p| p.x.as_str()).collect();
        assert_eq!(months, vec!["August", "October"]);
        assert_eq!(series[0].y, 5.0);
    }

    #[test]
    fn test_fill_level_extracts_total() {
        let total = MonthlyTotal {
            total: 42.0,
            months: BTreeMap::new(),
        };
        assert_eq!(fill_level(&total), (42.0, 42.0));

        let over = MonthlyTotal {
            total: 180.0,
            months: BTreeMap::new(),
        };
        assert_eq!(fill_level(&over), (180.0, 100.0));
    }

    #[test]
    fn test_waste_report_years() {
        let report = waste_report_series();
        assert_eq!(report.len(), 7);
        assert_eq!(report.first().map(|r| r.year), Some(2006));
        assert_eq!(report.last().map(|r| r.recyclable), Some(9000.0));
    }
}
