//! Shopfront
//!
//! Catalog items and the discount rules applied to them: the item model and
//! its creation policy, the discount feed format, and the arithmetic that
//! turns matching rules into discount prices.

pub mod discounts;
pub mod items;
pub mod prelude;
