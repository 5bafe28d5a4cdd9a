//! Shopfront prelude.
//!
//! Convenience exports for common library consumers.

pub use crate::{
    discounts::{
        DiscountRule, FeedParseError, ItemDiscount, ParsedFeed, RuleTarget, SkipReason,
        SkippedRow, aggregate, discounted_price, parse_feed,
    },
    items::{Item, ItemId, ItemUpdate, ItemValidationError, NewItem},
};
