//! Receipt Response Parsing
//!
//! Turns the upload endpoint's JSON reply into item drafts. Accepts either
//! structured `{"items": [{"name", "price"}]}` or extracted text with one
//! `- Item Name — Price` line per item.

use serde_json::Value;

use crate::models::ItemDraft;
use crate::money::parse_price;

/// Name/price separators, tried in order
const SEPARATORS: &[&str] = &["—", "–", " - ", ":"];

/// Lines containing one of these words are bill summary rows, not items
const SUMMARY_WORDS: &[&str] = &["total", "tax", "gst"];

/// Extract item drafts from a response body; empty when none are found
pub fn items_from_response(body: &Value) -> Vec<ItemDraft> {
    match body {
        Value::String(text) => items_from_text(text),
        Value::Object(map) => {
            if let Some(Value::Array(items)) = map.get("items") {
                return items
                    .iter()
                    .filter_map(|v| serde_json::from_value::<ItemDraft>(v.clone()).ok())
                    .filter(|d| !d.name.trim().is_empty() && parse_price(&d.price).is_some())
                    .collect();
            }
            ["text", "result"]
                .iter()
                .find_map(|key| map.get(*key).and_then(Value::as_str))
                .map(items_from_text)
                .unwrap_or_default()
        }
        _ => Vec::new(),
    }
}

/// Parse `- Item Name — Price` lines, skipping anything without a price
pub fn items_from_text(text: &str) -> Vec<ItemDraft> {
    text.lines().filter_map(parse_line).collect()
}

fn parse_line(line: &str) -> Option<ItemDraft> {
    let line = line
        .trim()
        .trim_start_matches(|c: char| c == '-' || c == '*' || c == '•')
        .trim();

    let (name, price) = SEPARATORS.iter().find_map(|sep| line.rsplit_once(sep))?;
    let name = name.trim();
    let price = price.trim();

    if name.is_empty() || parse_price(price).is_none() {
        return None;
    }
    let lower = name.to_lowercase();
    let mut words = lower.split(|c: char| !c.is_alphanumeric());
    if words.any(|word| SUMMARY_WORDS.contains(&word)) {
        return None;
    }
    Some(ItemDraft::new(name, price))
}
