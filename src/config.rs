//! Board Configuration
//!
//! The strategy buckets and the optional-field display policy are data, not
//! code: the same controller drives the full trading board and the simpler
//! three-bucket layout. Host pages can override the compiled-in default
//! through the `WATCHBOARD_CONFIG` JS global (a JSON string).

use serde::{Deserialize, Serialize};
use wasm_bindgen::JsValue;

/// One strategy category, rendered as a board column.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StrategyBucket {
    pub key: String,
    /// Column heading; falls back to the key when absent.
    #[serde(default)]
    pub label: Option<String>,
}

impl StrategyBucket {
    pub fn new(key: &str) -> Self {
        Self {
            key: key.to_string(),
            label: None,
        }
    }

    pub fn label(&self) -> &str {
        self.label.as_deref().unwrap_or(&self.key)
    }
}

/// Which optional stock fields the board displays.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldPolicy {
    #[serde(default = "default_true")]
    pub daily_change: bool,
    #[serde(default = "default_true")]
    pub added_date: bool,
}

fn default_true() -> bool {
    true
}

impl Default for FieldPolicy {
    fn default() -> Self {
        Self {
            daily_change: true,
            added_date: true,
        }
    }
}

/// Full board configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BoardConfig {
    #[serde(default = "default_api_base")]
    pub api_base: String,
    #[serde(default = "default_strategies")]
    pub strategies: Vec<StrategyBucket>,
    #[serde(default)]
    pub fields: FieldPolicy,
}

fn default_api_base() -> String {
    "/api".to_string()
}

fn default_strategies() -> Vec<StrategyBucket> {
    [
        "1SQ_INSB_52W",
        "2HvolHK",
        "2_3XvolSq",
        "2SQ_Bull_HK",
        "2HK_RVOL_SQ",
    ]
    .iter()
    .map(|key| StrategyBucket::new(key))
    .collect()
}

impl Default for BoardConfig {
    /// Full five-bucket trading board with all optional fields shown.
    fn default() -> Self {
        Self {
            api_base: default_api_base(),
            strategies: default_strategies(),
            fields: FieldPolicy::default(),
        }
    }
}

impl BoardConfig {
    /// Three-bucket board without the daily-change / added-date displays.
    pub fn simple() -> Self {
        Self {
            api_base: default_api_base(),
            strategies: ["Short", "Long", "Investment"]
                .iter()
                .map(|key| StrategyBucket::new(key))
                .collect(),
            fields: FieldPolicy {
                daily_change: false,
                added_date: false,
            },
        }
    }

    pub fn recognizes(&self, key: &str) -> bool {
        self.strategies.iter().any(|bucket| bucket.key == key)
    }

    pub fn parse(raw: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(raw)
    }

    /// Load the board configuration from the `WATCHBOARD_CONFIG` JS global,
    /// falling back to the compiled-in default board.
    pub fn load() -> Self {
        match read_global("WATCHBOARD_CONFIG") {
            Some(raw) => match Self::parse(&raw) {
                Ok(config) => config,
                Err(e) => {
                    web_sys::console::error_1(
                        &format!("[CONFIG] Invalid WATCHBOARD_CONFIG, using default: {}", e)
                            .into(),
                    );
                    Self::default()
                }
            },
            None => Self::default(),
        }
    }
}

fn read_global(key: &str) -> Option<String> {
    js_sys::Reflect::get(&js_sys::global(), &JsValue::from_str(key))
        .ok()
        .and_then(|v| v.as_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_board() {
        let config = BoardConfig::default();
        assert_eq!(config.api_base, "/api");
        assert_eq!(config.strategies.len(), 5);
        assert!(config.fields.daily_change);
        assert!(config.fields.added_date);
        assert!(config.recognizes("2HvolHK"));
        assert!(!config.recognizes("Short"));
    }

    #[test]
    fn test_simple_board() {
        let config = BoardConfig::simple();
        assert_eq!(config.strategies.len(), 3);
        assert!(config.recognizes("Investment"));
        assert!(!config.fields.daily_change);
        assert!(!config.fields.added_date);
    }

    #[test]
    fn test_bucket_label_falls_back_to_key() {
        let bucket = StrategyBucket::new("2HvolHK");
        assert_eq!(bucket.label(), "2HvolHK");

        let named = StrategyBucket {
            key: "Short".to_string(),
            label: Some("Short setups".to_string()),
        };
        assert_eq!(named.label(), "Short setups");
    }

    #[test]
    fn test_parse_full_config() {
        let raw = r#"{
            "api_base": "https://watch.example.com/api",
            "strategies": [
                {"key": "Short", "label": "Short setups"},
                {"key": "Long"}
            ],
            "fields": {"daily_change": false, "added_date": true}
        }"#;
        let config = BoardConfig::parse(raw).unwrap();
        assert_eq!(config.api_base, "https://watch.example.com/api");
        assert_eq!(config.strategies.len(), 2);
        assert_eq!(config.strategies[0].label(), "Short setups");
        assert_eq!(config.strategies[1].label(), "Long");
        assert!(!config.fields.daily_change);
        assert!(config.fields.added_date);
    }

    #[test]
    fn test_parse_partial_config_fills_defaults() {
        let config = BoardConfig::parse(r#"{"api_base": "/watch/api"}"#).unwrap();
        assert_eq!(config.api_base, "/watch/api");
        assert_eq!(config.strategies.len(), 5);
        assert!(config.fields.daily_change);
    }

    #[test]
    fn test_parse_rejects_malformed_json() {
        assert!(BoardConfig::parse("not json").is_err());
    }
}
