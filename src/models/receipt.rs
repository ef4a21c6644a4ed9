//! Receipt entry models
//!
//! Data captured by the two-step entry wizard: the visit details from step
//! one, the purchased items from step two, and the assembled record handed
//! to the submission sink. All of it is transient, in-memory state.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::price::Price;

/// Data captured by step one of the wizard
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StepOneData {
    /// Purchase date as entered (no format enforcement)
    #[serde(default)]
    pub date: String,

    /// Store or location as entered
    #[serde(default)]
    pub location: String,
}

impl StepOneData {
    /// Create step-one data from its two fields
    pub fn new(date: impl Into<String>, location: impl Into<String>) -> Self {
        Self {
            date: date.into(),
            location: location.into(),
        }
    }

    /// Fill empty fields from a recognized overlay
    ///
    /// Manual entry always wins: only fields the user left blank take the
    /// parsed value.
    pub fn merge_defaults(&mut self, parsed: &ParsedData) {
        if self.date.trim().is_empty() {
            if let Some(date) = &parsed.date {
                self.date = date.clone();
            }
        }
        if self.location.trim().is_empty() {
            if let Some(location) = &parsed.location {
                self.location = location.clone();
            }
        }
    }
}

/// One purchased item on the receipt
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemRecord {
    /// Item name as entered (may be empty)
    #[serde(default)]
    pub name: String,

    /// Number of units purchased (the item editor only produces values >= 1)
    pub quantity: u32,

    /// Unit price
    pub price: Price,
}

impl ItemRecord {
    /// Create an item record
    pub fn new(name: impl Into<String>, quantity: u32, price: Price) -> Self {
        Self {
            name: name.into(),
            quantity,
            price,
        }
    }

    /// Total for this line (unit price times quantity)
    pub fn line_total(&self) -> Price {
        Price::from_cents(self.price.cents() * self.quantity as u64)
    }
}

impl fmt::Display for ItemRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} x{} {}", self.name, self.quantity, self.price)
    }
}

/// Data captured by step two of the wizard
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StepTwoData {
    /// Purchased items in the order they were added
    #[serde(default)]
    pub items: Vec<ItemRecord>,
}

impl StepTwoData {
    /// Create step-two data from an item list
    pub fn new(items: Vec<ItemRecord>) -> Self {
        Self { items }
    }

    /// Sum of all line totals
    pub fn total(&self) -> Price {
        self.items.iter().map(|i| i.line_total()).sum()
    }
}

/// Partial field values recovered from a recognized receipt image
///
/// Every field is optional; an empty overlay is the normal outcome when
/// extraction finds nothing. Overlay values act as defaults for the manual
/// fields and are never written back over user input.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParsedData {
    /// Recognized purchase date, if any
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,

    /// Recognized store or location, if any
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,

    /// Recognized item lines, if any (shown as suggestions, never auto-added)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub items: Option<Vec<ItemRecord>>,
}

impl ParsedData {
    /// Check whether recognition recovered any field at all
    pub fn is_empty(&self) -> bool {
        self.date.is_none() && self.location.is_none() && self.items.is_none()
    }
}

/// The assembled receipt handed to the submission sink
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReceiptRecord {
    /// Step-one data as last captured
    pub step_one: StepOneData,

    /// Step-two data as last captured
    pub step_two: StepTwoData,
}

impl ReceiptRecord {
    /// Assemble a record from both steps
    pub fn new(step_one: StepOneData, step_two: StepTwoData) -> Self {
        Self { step_one, step_two }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_step_one_defaults_to_empty() {
        let data = StepOneData::default();
        assert_eq!(data.date, "");
        assert_eq!(data.location, "");
    }

    #[test]
    fn test_merge_defaults_fills_only_blank_fields() {
        let mut data = StepOneData::new("2024-01-05", "");
        let parsed = ParsedData {
            date: Some("2024-02-09".to_string()),
            location: Some("Market St".to_string()),
            items: None,
        };

        data.merge_defaults(&parsed);

        assert_eq!(data.date, "2024-01-05");
        assert_eq!(data.location, "Market St");
    }

    #[test]
    fn test_merge_defaults_with_empty_overlay() {
        let mut data = StepOneData::new("2024-01-05", "Market St");
        data.merge_defaults(&ParsedData::default());

        assert_eq!(data, StepOneData::new("2024-01-05", "Market St"));
    }

    #[test]
    fn test_item_line_total() {
        let item = ItemRecord::new("Eggs", 2, Price::from_cents(400));
        assert_eq!(item.line_total(), Price::from_cents(800));
    }

    #[test]
    fn test_item_display() {
        let item = ItemRecord::new("Milk", 1, Price::from_cents(350));
        assert_eq!(format!("{}", item), "Milk x1 $3.50");
    }

    #[test]
    fn test_step_two_total() {
        let data = StepTwoData::new(vec![
            ItemRecord::new("Milk", 1, Price::from_cents(350)),
            ItemRecord::new("Eggs", 2, Price::from_cents(400)),
        ]);
        assert_eq!(data.total(), Price::from_cents(1150));
    }

    #[test]
    fn test_parsed_data_is_empty() {
        assert!(ParsedData::default().is_empty());

        let parsed = ParsedData {
            location: Some("Market St".to_string()),
            ..Default::default()
        };
        assert!(!parsed.is_empty());
    }

    #[test]
    fn test_record_serialization() {
        let record = ReceiptRecord::new(
            StepOneData::new("2024-01-05", "Market St"),
            StepTwoData::new(vec![ItemRecord::new("Milk", 1, Price::from_cents(350))]),
        );

        let json = serde_json::to_string(&record).unwrap();
        let deserialized: ReceiptRecord = serde_json::from_str(&json).unwrap();
        assert_eq!(record, deserialized);
    }
}
