//! Discounts
//!
//! Aggregates discount rules over a snapshot of items and turns the
//! aggregated percentage into a discount price.

use rust_decimal::Decimal;

use crate::items::{Item, ItemId};

pub mod feed;
pub mod rules;

pub use feed::{FeedParseError, ParsedFeed, SkipReason, SkippedRow, parse_feed};
pub use rules::{DiscountRule, RuleTarget};

const FULL_PERCENT: i64 = 100;

/// Total discount collected for one item of a snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ItemDiscount {
    /// Item the total belongs to.
    pub id: ItemId,

    /// Sum of every matching rule's percentage, unclamped.
    pub percent: i64,

    /// Set when an item-level rule matched.
    pub product_of_day: bool,
}

/// Sums the matching rules for every item.
///
/// The result has one entry per item, in the same order as `items`, starting
/// from zero for each. Rules are applied in order; each rule adds its
/// percentage to every item it matches.
pub fn aggregate(items: &[Item], rules: &[DiscountRule]) -> Vec<ItemDiscount> {
    let mut totals: Vec<ItemDiscount> = items
        .iter()
        .map(|item| ItemDiscount {
            id: item.id,
            percent: 0,
            product_of_day: false,
        })
        .collect();

    for rule in rules {
        for (item, total) in items.iter().zip(totals.iter_mut()) {
            if rule.matches(item) {
                total.percent = total.percent.saturating_add(rule.percent);
                total.product_of_day |= rule.marks_product_of_day();
            }
        }
    }

    totals
}

/// Applies a total discount percentage to a price.
///
/// Computes `original * (100 - percent) / 100`, with `percent` clamped to
/// `0..=100` so the result never goes negative or above `original`.
pub fn discounted_price(original: Decimal, percent: i64) -> Decimal {
    let percent = percent.clamp(0, FULL_PERCENT);

    original * Decimal::from(FULL_PERCENT - percent) / Decimal::from(FULL_PERCENT)
}
