//! Values shown on the payment dashboard cards and payment modal.

use crate::error::ApiError;
use crate::model::iso_day;

/// Next payment card: a date, `N/A` when the backend has none, `Error` when
/// the request failed.
pub fn format_next_payment(result: &Result<String, ApiError>) -> String {
    match result {
        Ok(text) => iso_day(unquote(text)).unwrap_or_else(|| "N/A".to_string()),
        Err(_) => "Error".to_string(),
    }
}

pub fn format_account_status(result: &Result<String, ApiError>) -> String {
    match result {
        Ok(text) => {
            let text = unquote(text);
            if text.is_empty() { "N/A".to_string() } else { text.to_string() }
        }
        Err(_) => "Error".to_string(),
    }
}

/// Text endpoints sometimes come back JSON-quoted.
fn unquote(text: &str) -> &str {
    let text = text.trim();
    text.strip_prefix('"')
        .and_then(|t| t.strip_suffix('"'))
        .unwrap_or(text)
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PaymentPlan {
    pub name: &'static str,
    pub amount: f64,
}

pub const PAYMENT_PLANS: [PaymentPlan; 3] = [
    PaymentPlan { name: "General Waste", amount: 2800.0 },
    PaymentPlan { name: "Recyclables", amount: 2000.0 },
    PaymentPlan { name: "Organic", amount: 3000.0 },
];

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PaymentBreakdown {
    pub monthly: f64,
    pub tax: f64,
    pub other: f64,
    pub total: f64,
}

pub const MONTHLY_BREAKDOWN: PaymentBreakdown = PaymentBreakdown {
    monthly: 2800.0,
    tax: 1000.0,
    other: 80.0,
    total: 4000.0,
};

/// `4000.0` -> `$4,000`; cents are shown only when present.
pub fn format_money(amount: f64) -> String {
    let negative = amount < 0.0;
    let cents = (amount.abs() * 100.0).round() as u64;
    let (whole, frac) = (cents / 100, cents % 100);

    let digits = whole.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    let sign = if negative { "-" } else { "" };
    if frac == 0 {
        format!("{sign}${grouped}")
    } else {
        format!("{sign}${grouped}.{frac:02}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_next_payment_formats() {
        assert_eq!(format_next_payment(&Ok("2024-11-05".to_string())), "2024-11-05");
        assert_eq!(format_next_payment(&Ok("\"2024-11-05T00:00:00Z\"".to_string())), "2024-11-05");
        assert_eq!(format_next_payment(&Ok(String::new())), "N/A");
        assert_eq!(format_next_payment(&Ok("soon".to_string())), "N/A");
        assert_eq!(
            format_next_payment(&Err(ApiError::Network("offline".to_string()))),
            "Error"
        );
    }

    #[test]
    fn test_account_status_formats() {
        assert_eq!(format_account_status(&Ok("Active".to_string())), "Active");
        assert_eq!(format_account_status(&Ok("  ".to_string())), "N/A");
        assert_eq!(
            format_account_status(&Err(ApiError::Status { status: 500, body: String::new() })),
            "Error"
        );
    }

    #[test]
    fn test_money_formatting() {
        assert_eq!(format_money(4000.0), "$4,000");
        assert_eq!(format_money(80.0), "$80");
        assert_eq!(format_money(1234567.5), "$1,234,567.50");
        assert_eq!(format_money(-12.0), "-$12");
    }

    #[test]
    fn test_breakdown_components() {
        assert_eq!(PAYMENT_PLANS.len(), 3);
        assert_eq!(PAYMENT_PLANS[0].amount, MONTHLY_BREAKDOWN.monthly);
        assert_eq!(MONTHLY_BREAKDOWN.total, 4000.0);
    }
}
