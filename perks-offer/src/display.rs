use chrono::{DateTime, Utc};

/// Human-readable discount label for a card or badge.
///
/// `fixed` keeps the currency symbol baked into the source data; the value
/// is display-only and carries no conversion semantics.
pub fn format_discount(percent: u32, discount_type: &str) -> String {
    match discount_type {
        "fixed" => format!("₹{percent} OFF"),
        "bogo" => "Buy 1 Get 1".to_string(),
        "delivery" => "Free Delivery".to_string(),
        _ => format!("{percent}% OFF"),
    }
}

/// Long-form expiry date, e.g. "August 31, 2027".
pub fn format_expiry_date(expiry: DateTime<Utc>) -> String {
    expiry.format("%B %-d, %Y").to_string()
}
