//! Inventory Item Entity
//!
//! The single resource managed by the UI, plus the raw form draft it is
//! edited through.

use std::fmt;
use std::str::FromStr;

use serde::de::{self, Deserializer};
use serde::{Deserialize, Serialize};

use super::entity::{DomainError, DomainResult, Entity};

/// Server-assigned item identifier
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ItemId(String);

impl ItemId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ItemId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

/// Item category
///
/// Accepted case-insensitively on the wire, always sent lowercase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", try_from = "String")]
pub enum Category {
    Electronics,
    Furniture,
    Groceries,
    Clothing,
}

impl Category {
    pub const ALL: [Category; 4] = [
        Category::Electronics,
        Category::Furniture,
        Category::Groceries,
        Category::Clothing,
    ];

    /// Wire value, also used as the `<option>` value
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Electronics => "electronics",
            Category::Furniture => "furniture",
            Category::Groceries => "groceries",
            Category::Clothing => "clothing",
        }
    }

    /// Human-readable label shown in the table
    pub fn label(&self) -> &'static str {
        match self {
            Category::Electronics => "Electronics",
            Category::Furniture => "Furniture",
            Category::Groceries => "Groceries",
            Category::Clothing => "Clothing",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Category {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Category::ALL
            .into_iter()
            .find(|c| c.as_str().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| DomainError::invalid("category", format!("unknown category '{}'", wanted)))
    }
}

impl TryFrom<String> for Category {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

/// An inventory record as returned by the backend
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InventoryItem {
    #[serde(rename = "_id", alias = "id")]
    pub id: ItemId,
    pub item_name: String,
    #[serde(deserialize_with = "lenient_number")]
    pub quantity: u32,
    #[serde(deserialize_with = "lenient_number")]
    pub price: f64,
    pub category: Category,
}

impl InventoryItem {
    pub fn new(id: impl Into<String>, fields: ItemFields) -> Self {
        Self {
            id: ItemId::new(id),
            item_name: fields.item_name,
            quantity: fields.quantity,
            price: fields.price,
            category: fields.category,
        }
    }

    /// The editable part of the item
    pub fn fields(&self) -> ItemFields {
        ItemFields {
            item_name: self.item_name.clone(),
            quantity: self.quantity,
            price: self.price,
            category: self.category,
        }
    }
}

impl Entity for InventoryItem {
    type Id = ItemId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}

/// Request body for add/update: an item without its id
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ItemFields {
    pub item_name: String,
    pub quantity: u32,
    pub price: f64,
    pub category: Category,
}

/// Form contents exactly as typed
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ItemDraft {
    pub item_name: String,
    pub quantity: String,
    pub price: String,
    /// Selected `<option>` value, empty when nothing is selected
    pub category: String,
}

impl ItemDraft {
    pub fn from_item(item: &InventoryItem) -> Self {
        Self {
            item_name: item.item_name.clone(),
            quantity: item.quantity.to_string(),
            price: item.price.to_string(),
            category: item.category.as_str().to_string(),
        }
    }

    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    /// Apply the input constraints: every field required, numbers at least 0
    pub fn validate(&self) -> DomainResult<ItemFields> {
        let item_name = self.item_name.trim();
        if item_name.is_empty() {
            return Err(DomainError::invalid("itemName", "is required"));
        }

        let quantity = parse_non_negative("quantity", &self.quantity)?;
        if quantity.fract() != 0.0 || quantity > f64::from(u32::MAX) {
            return Err(DomainError::invalid("quantity", "must be a whole number"));
        }
        let quantity = quantity as u32;
        let price = parse_non_negative("price", &self.price)?;

        if self.category.trim().is_empty() {
            return Err(DomainError::invalid("category", "is required"));
        }
        let category = self.category.parse()?;

        Ok(ItemFields {
            item_name: item_name.to_string(),
            quantity,
            price,
            category,
        })
    }
}

/// Parse a number input's value; accepts anything the browser may submit
/// (`1e2`, `-0`), rejects negatives
fn parse_non_negative(field: &'static str, raw: &str) -> DomainResult<f64> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Err(DomainError::invalid(field, "is required"));
    }
    let value: f64 = raw.parse().map_err(|_| DomainError::invalid(field, "must be a number"))?;
    if !value.is_finite() {
        return Err(DomainError::invalid(field, "must be a number"));
    }
    if value < 0.0 {
        return Err(DomainError::invalid(field, "must be 0 or greater"));
    }
    // -0 becomes 0
    Ok(value.abs())
}

/// Accept `10` as well as `"10"`; the backend echoes form values back as sent
fn lenient_number<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: FromStr + Deserialize<'de>,
    T::Err: fmt::Display,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw<T> {
        Number(T),
        Text(String),
    }

    match Raw::<T>::deserialize(deserializer)? {
        Raw::Number(n) => Ok(n),
        Raw::Text(s) => s.trim().parse().map_err(de::Error::custom),
    }
}

/// The four rows the app can start from before the first fetch
pub fn sample_items() -> Vec<InventoryItem> {
    let row = |id: &str, name: &str, quantity, price, category| {
        InventoryItem::new(id, ItemFields { item_name: name.to_string(), quantity, price, category })
    };
    vec![
        row("1", "Laptop", 10, 50000.0, Category::Electronics),
        row("2", "Chair", 20, 1500.0, Category::Furniture),
        row("3", "Rice", 50, 40.0, Category::Groceries),
        row("4", "T-shirt", 30, 300.0, Category::Clothing),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draft(name: &str, quantity: &str, price: &str, category: &str) -> ItemDraft {
        ItemDraft {
            item_name: name.to_string(),
            quantity: quantity.to_string(),
            price: price.to_string(),
            category: category.to_string(),
        }
    }

    #[test]
    fn test_item_from_backend_json() {
        let json = r#"{"_id":"64f0","itemName":"Chair","quantity":20,"price":1500,"category":"Furniture","__v":0}"#;
        let item: InventoryItem = serde_json::from_str(json).unwrap();
        assert_eq!(item.id.as_str(), "64f0");
        assert_eq!(item.item_name, "Chair");
        assert_eq!(item.quantity, 20);
        assert_eq!(item.category, Category::Furniture);
    }

    #[test]
    fn test_item_accepts_plain_id_and_string_numbers() {
        let json = r#"{"id":"7","itemName":"Rice","quantity":"50","price":"40.5","category":"groceries"}"#;
        let item: InventoryItem = serde_json::from_str(json).unwrap();
        assert_eq!(item.id, ItemId::from("7"));
        assert_eq!(item.quantity, 50);
        assert_eq!(item.price, 40.5);
    }

    #[test]
    fn test_unknown_category_is_rejected() {
        let json = r#"{"_id":"1","itemName":"Toy","quantity":1,"price":1,"category":"toys"}"#;
        assert!(serde_json::from_str::<InventoryItem>(json).is_err());
    }

    #[test]
    fn test_fields_serialize_camel_case_lowercase_category() {
        let fields = sample_items()[0].fields();
        let value = serde_json::to_value(&fields).unwrap();
        assert_eq!(value["itemName"], "Laptop");
        assert_eq!(value["category"], "electronics");
        assert!(value.get("_id").is_none());
    }

    #[test]
    fn test_validate_accepts_complete_draft() {
        let fields = draft("  Desk ", "3", "120.5", "furniture").validate().unwrap();
        assert_eq!(fields.item_name, "Desk");
        assert_eq!(fields.quantity, 3);
        assert_eq!(fields.price, 120.5);
        assert_eq!(fields.category, Category::Furniture);
    }

    #[test]
    fn test_validate_requires_every_field() {
        assert_eq!(draft("", "1", "1", "clothing").validate().unwrap_err().field(), Some("itemName"));
        assert_eq!(draft("Hat", "", "1", "clothing").validate().unwrap_err().field(), Some("quantity"));
        assert_eq!(draft("Hat", "1", " ", "clothing").validate().unwrap_err().field(), Some("price"));
        assert_eq!(draft("Hat", "1", "1", "").validate().unwrap_err().field(), Some("category"));
    }

    #[test]
    fn test_validate_enforces_minimum_zero() {
        let err = draft("Hat", "-2", "1", "clothing").validate().unwrap_err();
        assert_eq!(err, DomainError::invalid("quantity", "must be 0 or greater"));
        let err = draft("Hat", "1", "-0.5", "clothing").validate().unwrap_err();
        assert_eq!(err, DomainError::invalid("price", "must be 0 or greater"));
        assert!(draft("Hat", "0", "0", "clothing").validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_fractional_quantity() {
        let err = draft("Hat", "1.5", "1", "clothing").validate().unwrap_err();
        assert_eq!(err, DomainError::invalid("quantity", "must be a whole number"));
        let err = draft("Hat", "abc", "1", "clothing").validate().unwrap_err();
        assert_eq!(err, DomainError::invalid("quantity", "must be a number"));
    }

    #[test]
    fn test_validate_accepts_number_input_spellings() {
        let fields = draft("Hat", "1e2", "-0", "clothing").validate().unwrap();
        assert_eq!(fields.quantity, 100);
        assert_eq!(fields.price, 0.0);
        assert!(fields.price.is_sign_positive());
        assert_eq!(draft("Hat", "-0", "2.5e1", "clothing").validate().unwrap().quantity, 0);
        assert_eq!(draft("Hat", "5000000000", "1", "clothing").validate().unwrap_err().field(), Some("quantity"));
    }

    #[test]
    fn test_draft_round_trips_item_values() {
        let item = sample_items().remove(2);
        let draft = ItemDraft::from_item(&item);
        assert_eq!(draft.price, "40");
        assert_eq!(draft.validate().unwrap(), item.fields());
    }
}
