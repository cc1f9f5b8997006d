//! Display formatting for dates and prices

use chrono::{DateTime, NaiveDate, NaiveDateTime};

/// Shown for an open-ended date (e.g. a price with no end date)
pub const FOREVER: &str = "forever";

/// Format a server timestamp as `dd/MM/yyyy HH:mm`
///
/// Accepts RFC 3339, naive ISO date-times and plain dates. Absent values
/// render as [`FOREVER`]; unparseable ones are shown verbatim.
pub fn format_date(raw: Option<&str>) -> String {
    let Some(raw) = raw.map(str::trim).filter(|s| !s.is_empty()) else {
        return FOREVER.to_string();
    };

    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return dt.format("%d/%m/%Y %H:%M").to_string();
    }
    for pattern in ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f", "%Y-%m-%dT%H:%M"] {
        if let Ok(dt) = NaiveDateTime::parse_from_str(raw, pattern) {
            return dt.format("%d/%m/%Y %H:%M").to_string();
        }
    }
    if let Ok(date) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        return date.format("%d/%m/%Y 00:00").to_string();
    }
    raw.to_string()
}

/// Format an amount in Vietnamese dong: `1.250.000 ₫`
pub fn format_vnd(amount: f64) -> String {
    let rounded = amount.round();
    let negative = rounded < 0.0;
    let digits = format!("{:.0}", rounded.abs());

    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(ch);
    }

    if negative {
        format!("-{} ₫", grouped)
    } else {
        format!("{} ₫", grouped)
    }
}

/// Format an optional price, blank when absent
pub fn format_price(amount: Option<f64>) -> String {
    amount.map(format_vnd).unwrap_or_default()
}
