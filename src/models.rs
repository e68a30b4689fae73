//! Frontend Models
//!
//! Bill entities and the records exchanged with the upload endpoint.

use serde::{Deserialize, Deserializer, Serialize};

use crate::money::{self, Cents};

/// Priced line on the bill
#[derive(Debug, Clone, PartialEq)]
pub struct Item {
    /// Ordinal index carried by every control of this item
    pub index: u32,
    pub name: String,
    /// Raw text of the price field
    pub price_text: String,
    /// Typed price, zero when `price_text` does not parse
    pub price: Cents,
    /// Whether the item participates in splitting
    pub active: bool,
}

impl Item {
    pub fn from_draft(index: u32, draft: ItemDraft) -> Self {
        Self {
            index,
            name: draft.name,
            price: money::price_or_zero(&draft.price),
            price_text: draft.price,
            active: draft.active,
        }
    }
}

/// Participant in the split, index in `1..=person_count`
#[derive(Debug, Clone, PartialEq)]
pub struct Person {
    pub index: u32,
    pub name: String,
    pub phone: String,
    pub total: Cents,
}

impl Person {
    pub fn new(index: u32) -> Self {
        Self {
            index,
            name: String::new(),
            phone: String::new(),
            total: Cents::ZERO,
        }
    }

    /// Display label, `Person <index>` when no name was typed
    pub fn label(&self) -> String {
        let name = self.name.trim();
        if name.is_empty() {
            format!("Person {}", self.index)
        } else {
            name.to_string()
        }
    }
}

/// One person-selection checkbox of an item.
///
/// Tagged with the item's price so totals never re-query the item.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AssignmentControl {
    pub person: u32,
    pub item: u32,
    pub price: Cents,
    pub checked: bool,
}

/// Item as supplied by page data or a parsed receipt
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ItemDraft {
    #[serde(default)]
    pub index: Option<u32>,
    #[serde(default)]
    pub name: String,
    #[serde(default, deserialize_with = "price_as_text")]
    pub price: String,
    #[serde(default = "default_true")]
    pub active: bool,
}

impl ItemDraft {
    pub fn new(name: impl Into<String>, price: impl Into<String>) -> Self {
        Self {
            index: None,
            name: name.into(),
            price: price.into(),
            active: true,
        }
    }
}

fn default_true() -> bool {
    true
}

/// Accept `"10.00"`, `10` or `10.5` for a price field
fn price_as_text<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(match value {
        serde_json::Value::String(s) => s,
        serde_json::Value::Number(n) => n.to_string(),
        _ => String::new(),
    })
}

/// Per-person record sent with the receipt upload
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PersonRecord {
    pub name: String,
    pub phone: String,
}
