//! Frontend Models
//!
//! Data structures matching backend payloads.

use serde::{Deserialize, Serialize};

/// Tracked stock as reported by the backend.
///
/// `daily_change` and `added_date` are optional: older backend variants do
/// not send them, and the board's field policy decides whether to show them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Stock {
    pub id: u32,
    pub ticker: String,
    pub strategy: String,
    pub entry_price: f64,
    pub current_price: f64,
    pub roi: f64,
    #[serde(default)]
    pub daily_change: Option<f64>,
    #[serde(default)]
    pub added_date: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_full_payload() {
        let json = r#"{
            "id": 3,
            "ticker": "NVDA",
            "strategy": "2HvolHK",
            "entry_price": 100.0,
            "current_price": 112.5,
            "roi": 12.5,
            "daily_change": -0.42,
            "added_date": "2023-10-24 15:30:00"
        }"#;
        let stock: Stock = serde_json::from_str(json).unwrap();
        assert_eq!(stock.id, 3);
        assert_eq!(stock.ticker, "NVDA");
        assert_eq!(stock.daily_change, Some(-0.42));
        assert_eq!(stock.added_date.as_deref(), Some("2023-10-24 15:30:00"));
    }

    #[test]
    fn test_deserialize_minimal_payload() {
        // Simpler backend variant: no daily change, no added date
        let json = r#"{
            "id": 1,
            "ticker": "ABC",
            "strategy": "Short",
            "entry_price": 10,
            "current_price": 12,
            "roi": 20
        }"#;
        let stock: Stock = serde_json::from_str(json).unwrap();
        assert_eq!(stock.roi, 20.0);
        assert_eq!(stock.daily_change, None);
        assert_eq!(stock.added_date, None);
    }
}
