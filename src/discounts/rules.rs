//! Discount Rules

use crate::items::Item;

/// What a discount rule applies to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RuleTarget {
    /// Every item whose category equals this value.
    Category(String),

    /// Every item with this articul. Matching items become product of the day.
    Item(i64),

    /// Every item in the store.
    Store,
}

/// A single parsed rule row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiscountRule {
    /// Items the rule applies to.
    pub target: RuleTarget,

    /// Percentage points added to each matching item's total.
    pub percent: i64,
}

impl DiscountRule {
    /// Creates a new rule.
    pub fn new(target: RuleTarget, percent: i64) -> Self {
        Self { target, percent }
    }

    /// Returns `true` when the rule applies to `item`.
    pub fn matches(&self, item: &Item) -> bool {
        match &self.target {
            RuleTarget::Category(category) => item.category.as_deref() == Some(category.as_str()),
            RuleTarget::Item(articul) => item.articul == Some(*articul),
            RuleTarget::Store => true,
        }
    }

    /// Returns `true` for item-level rules, which flag their matches as product of the day.
    pub fn marks_product_of_day(&self) -> bool {
        matches!(self.target, RuleTarget::Item(_))
    }
}
