//! Page Configuration
//!
//! Settings and the initial item list are embedded by the server as JSON:
//!
//! ```html
//! <script type="application/json" id="bill-split-data">
//!   { "config": { "endpoint": "/upload" },
//!     "items": [{ "index": 1, "name": "Nachani Ladoo", "price": "210.00" }] }
//! </script>
//! ```

use serde::Deserialize;

use crate::console;
use crate::error::ConfigError;
use crate::models::ItemDraft;
use crate::split::{DEFAULT_PERSON_COUNT, MAX_PERSON_COUNT};

/// Id of the element holding the page data
pub const PAGE_DATA_ID: &str = "bill-split-data";

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Path receiving the multipart upload
    pub endpoint: String,
    pub default_person_count: u32,
    pub max_person_count: u32,
    pub currency_symbol: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            endpoint: "/upload".to_string(),
            default_person_count: DEFAULT_PERSON_COUNT,
            max_person_count: MAX_PERSON_COUNT,
            currency_symbol: "$".to_string(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct PageData {
    pub config: AppConfig,
    pub items: Vec<ItemDraft>,
}

/// Parse the embedded JSON; blank text means defaults
pub fn parse_page_data(text: &str) -> Result<PageData, ConfigError> {
    if text.trim().is_empty() {
        return Ok(PageData::default());
    }
    Ok(serde_json::from_str(text)?)
}

fn read_page_data_text() -> Result<String, ConfigError> {
    web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.get_element_by_id(PAGE_DATA_ID))
        .and_then(|el| el.text_content())
        .ok_or_else(|| ConfigError::Missing(PAGE_DATA_ID.to_string()))
}

/// Load page data from the document, falling back to defaults
pub fn load_page_data() -> PageData {
    match read_page_data_text().and_then(|text| parse_page_data(&text)) {
        Ok(data) => {
            console::log(
                "CONFIG",
                &format!("Loaded {} items, endpoint {}", data.items.len(), data.config.endpoint),
            );
            data
        }
        Err(e) => {
            console::warn("CONFIG", &format!("{}, using defaults", e));
            PageData::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_uses_defaults() {
        let data = parse_page_data("  \n").unwrap();
        assert_eq!(data.config, AppConfig::default());
        assert!(data.items.is_empty());
    }

    #[test]
    fn test_partial_config() {
        let data = parse_page_data(r#"{ "config": { "currency_symbol": "Rs " } }"#).unwrap();
        assert_eq!(data.config.currency_symbol, "Rs ");
        assert_eq!(data.config.endpoint, "/upload");
        assert_eq!(data.config.default_person_count, DEFAULT_PERSON_COUNT);
    }

    #[test]
    fn test_items_accept_numeric_and_text_prices() {
        let data = parse_page_data(
            r#"{ "items": [
                { "index": 1, "name": "Nachani Ladoo", "price": "210.00" },
                { "index": 2, "name": "Chakli Sticks", "price": 80, "active": false },
                { "name": "Mystery" }
            ] }"#,
        )
        .unwrap();

        assert_eq!(data.items.len(), 3);
        assert_eq!(data.items[0].price, "210.00");
        assert!(data.items[0].active);
        assert_eq!(data.items[1].price, "80");
        assert!(!data.items[1].active);
        assert_eq!(data.items[2].index, None);
        assert_eq!(data.items[2].price, "");
    }

    #[test]
    fn test_invalid_json_is_an_error() {
        assert!(matches!(parse_page_data("{ items: "), Err(ConfigError::Json(_))));
    }
}
