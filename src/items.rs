//! Items

use std::fmt::{Display, Formatter, Result as FmtResult};

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Repository-assigned item identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ItemId(u64);

impl ItemId {
    /// Wraps a raw identifier.
    pub const fn new(id: u64) -> Self {
        Self(id)
    }

    /// Returns the raw identifier.
    #[must_use]
    pub const fn get(self) -> u64 {
        self.0
    }
}

impl Display for ItemId {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        Display::fmt(&self.0, f)
    }
}

impl From<u64> for ItemId {
    fn from(value: u64) -> Self {
        Self(value)
    }
}

/// A stored catalog entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Item {
    /// Assigned on creation, never changes.
    pub id: ItemId,

    /// Display name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// Free-text description.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Base price. `None` means no price has been set, which is not the same as zero.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub original_price: Option<Decimal>,

    /// Effective price after discounts, rewritten by the discount sync.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub discount_price: Option<Decimal>,

    /// External product code matched by item-level discount rules.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub articul: Option<i64>,

    /// Free-text category matched by category discount rules.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,

    /// Set once an item-level discount rule has targeted the item.
    #[serde(default, skip_serializing_if = "is_false")]
    pub product_of_day: bool,
}

impl Item {
    /// Builds a stored item from its creation data and assigned identifier.
    pub fn from_new(id: ItemId, item: NewItem) -> Self {
        let NewItem {
            name,
            description,
            original_price,
            discount_price,
            articul,
            category,
            product_of_day,
        } = item;

        Self {
            id,
            name,
            description,
            original_price,
            discount_price,
            articul,
            category,
            product_of_day,
        }
    }

    /// Applies a partial update, leaving `None` fields untouched.
    pub fn apply(&mut self, update: &ItemUpdate) {
        if let Some(discount_price) = update.discount_price {
            self.discount_price = Some(discount_price);
        }

        if let Some(product_of_day) = update.product_of_day {
            self.product_of_day = product_of_day;
        }
    }
}

/// Item creation data, before an identifier is assigned.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NewItem {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub original_price: Option<Decimal>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub discount_price: Option<Decimal>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub articul: Option<i64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,

    #[serde(default, skip_serializing_if = "is_false")]
    pub product_of_day: bool,
}

impl NewItem {
    /// Returns `true` when any field required for creation is missing.
    pub fn is_empty(&self) -> bool {
        !self.missing_fields().is_empty()
    }

    /// Checks the creation policy: every descriptive field must be present.
    ///
    /// # Errors
    ///
    /// Returns [`ItemValidationError::MissingFields`] naming each absent field.
    pub fn validate(&self) -> Result<(), ItemValidationError> {
        let missing = self.missing_fields();

        if missing.is_empty() {
            Ok(())
        } else {
            Err(ItemValidationError::MissingFields(missing))
        }
    }

    fn missing_fields(&self) -> Vec<&'static str> {
        let checks = [
            ("name", has_text(self.name.as_deref())),
            ("description", has_text(self.description.as_deref())),
            ("original_price", self.original_price.is_some()),
            ("discount_price", self.discount_price.is_some()),
            ("articul", self.articul.is_some_and(|articul| articul != 0)),
            ("category", has_text(self.category.as_deref())),
        ];

        checks
            .into_iter()
            .filter_map(|(field, present)| (!present).then_some(field))
            .collect()
    }
}

/// Partial item mutation.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ItemUpdate {
    /// New discount price, if it changes.
    pub discount_price: Option<Decimal>,

    /// New product-of-the-day flag, if it changes.
    pub product_of_day: Option<bool>,
}

/// Errors raised by the item creation policy.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ItemValidationError {
    /// One or more required fields are absent or empty.
    #[error("item is missing required fields: {}", .0.join(", "))]
    MissingFields(Vec<&'static str>),
}

fn has_text(value: Option<&str>) -> bool {
    value.is_some_and(|text| !text.is_empty())
}

#[expect(
    clippy::trivially_copy_pass_by_ref,
    reason = "serde skip_serializing_if passes fields by reference"
)]
fn is_false(value: &bool) -> bool {
    !*value
}

#[cfg(test)]
mod tests {
    use rust_decimal_macros::dec;
    use testresult::TestResult;

    use super::*;

    fn complete_item() -> NewItem {
        NewItem {
            name: Some("Kettle".to_string()),
            description: Some("1.7l, steel".to_string()),
            original_price: Some(dec!(49.90)),
            discount_price: Some(dec!(49.90)),
            articul: Some(100_001),
            category: Some("kitchen".to_string()),
            product_of_day: false,
        }
    }

    #[test]
    fn complete_item_is_valid() {
        let item = complete_item();

        assert!(!item.is_empty(), "complete item should not be empty");
        assert_eq!(item.validate(), Ok(()));
    }

    #[test]
    fn default_item_reports_every_missing_field() {
        let result = NewItem::default().validate();

        assert_eq!(
            result,
            Err(ItemValidationError::MissingFields(vec![
                "name",
                "description",
                "original_price",
                "discount_price",
                "articul",
                "category",
            ]))
        );
    }

    #[test]
    fn empty_strings_and_zero_articul_count_as_missing() {
        let item = NewItem {
            name: Some(String::new()),
            articul: Some(0),
            ..complete_item()
        };

        assert_eq!(
            item.validate(),
            Err(ItemValidationError::MissingFields(vec!["name", "articul"]))
        );
    }

    #[test]
    fn zero_price_is_present() {
        let item = NewItem {
            original_price: Some(Decimal::ZERO),
            discount_price: Some(Decimal::ZERO),
            ..complete_item()
        };

        assert!(!item.is_empty(), "a zero price is still a set price");
    }

    #[test]
    fn apply_leaves_unset_fields_untouched() {
        let mut item = Item::from_new(ItemId::new(7), complete_item());

        item.apply(&ItemUpdate {
            discount_price: Some(dec!(39.92)),
            product_of_day: None,
        });

        assert_eq!(item.discount_price, Some(dec!(39.92)));
        assert!(!item.product_of_day, "product_of_day should be untouched");
        assert_eq!(item.original_price, Some(dec!(49.90)));
    }

    #[test]
    fn serializes_without_absent_fields() -> TestResult {
        let item = Item::from_new(
            ItemId::new(3),
            NewItem {
                name: Some("Mug".to_string()),
                ..NewItem::default()
            },
        );

        let json = serde_json::to_value(&item)?;

        assert_eq!(json, serde_json::json!({ "id": 3, "name": "Mug" }));

        Ok(())
    }
}
