//! Display Formatting
//!
//! Pure helpers for rendering prices, percentages, and dates.

use chrono::NaiveDateTime;

/// Backend timestamp layout ("2023-10-24 15:30:00").
const BACKEND_DATE_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Sign-prefixed percentage: `+20%`, `+0.5%`, `-3.2%`.
///
/// Zero counts as positive.
pub fn signed_pct(value: f64) -> String {
    format!("{}{}%", sign(value), value)
}

/// Sign-prefixed percentage with two fixed decimals: `+0.42%`, `-1.30%`.
pub fn signed_pct_fixed(value: f64) -> String {
    format!("{}{:.2}%", sign(value), value)
}

/// Styling class for a performance value.
pub fn perf_class(value: f64) -> &'static str {
    if value >= 0.0 {
        "roi-positive"
    } else {
        "roi-negative"
    }
}

/// Dollar price with two decimals: `$12.50`.
pub fn price(value: f64) -> String {
    format!("${:.2}", value)
}

/// Short date badge ("Oct 24, 2023") from a backend timestamp.
///
/// Unparseable input is shown as-is rather than hiding the badge.
pub fn short_date(raw: &str) -> String {
    match NaiveDateTime::parse_from_str(raw, BACKEND_DATE_FORMAT) {
        Ok(dt) => dt.format("%b %-d, %Y").to_string(),
        Err(_) => raw.to_string(),
    }
}

fn sign(value: f64) -> &'static str {
    if value >= 0.0 {
        "+"
    } else {
        ""
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_signed_pct() {
        assert_eq!(signed_pct(20.0), "+20%");
        assert_eq!(signed_pct(20.5), "+20.5%");
        assert_eq!(signed_pct(0.0), "+0%");
        assert_eq!(signed_pct(-3.25), "-3.25%");
    }

    #[test]
    fn test_signed_pct_fixed() {
        assert_eq!(signed_pct_fixed(0.42), "+0.42%");
        assert_eq!(signed_pct_fixed(0.0), "+0.00%");
        assert_eq!(signed_pct_fixed(-1.3), "-1.30%");
    }

    #[test]
    fn test_perf_class_boundary() {
        assert_eq!(perf_class(20.0), "roi-positive");
        assert_eq!(perf_class(0.0), "roi-positive");
        assert_eq!(perf_class(-0.01), "roi-negative");
    }

    #[test]
    fn test_price() {
        assert_eq!(price(10.0), "$10.00");
        assert_eq!(price(12.5), "$12.50");
        assert_eq!(price(1234.567), "$1234.57");
    }

    #[test]
    fn test_short_date() {
        assert_eq!(short_date("2023-10-24 15:30:00"), "Oct 24, 2023");
        assert_eq!(short_date("2024-03-05 00:00:00"), "Mar 5, 2024");
    }

    #[test]
    fn test_short_date_passes_through_garbage() {
        assert_eq!(short_date("yesterday"), "yesterday");
    }
}
