//! Discount feed parsing.
//!
//! The feed is CSV with rows of the form `ruleType,target,discountPercent`.
//! Rule types are `category`, `item` (target is an articul) and `-` (whole
//! store). A row whose first column is `k` is a header and is dropped. Rows
//! that cannot be turned into a rule are reported as [`SkippedRow`]s rather
//! than failing the feed.

use std::{fmt, io};

use csv::{ReaderBuilder, StringRecord};
use thiserror::Error;

use crate::discounts::rules::{DiscountRule, RuleTarget};

const HEADER_MARKER: &str = "k";
const CATEGORY_RULE: &str = "category";
const ITEM_RULE: &str = "item";
const STORE_RULE: &str = "-";

/// The feed could not be read as CSV at all.
#[derive(Debug, Error)]
#[error("failed to read discount feed")]
pub struct FeedParseError(#[from] csv::Error);

/// Why a feed row did not produce a rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    /// Fewer than three columns.
    TooFewColumns,

    /// The discount column is not an integer.
    InvalidPercent,

    /// An `item` rule whose target is not an integer articul.
    InvalidArticul,

    /// The rule type is not one we know about.
    UnknownRuleType,
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let reason = match self {
            SkipReason::TooFewColumns => "too few columns",
            SkipReason::InvalidPercent => "discount is not an integer",
            SkipReason::InvalidArticul => "articul is not an integer",
            SkipReason::UnknownRuleType => "unknown rule type",
        };

        f.write_str(reason)
    }
}

/// A feed row that was ignored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedRow {
    /// 1-based line of the row in the feed.
    pub line: u64,

    /// Why the row was ignored.
    pub reason: SkipReason,

    /// Raw fields as read.
    pub fields: Vec<String>,
}

/// Rules read from a feed, in feed order, plus the rows that were ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParsedFeed {
    /// Rules in feed order.
    pub rules: Vec<DiscountRule>,

    /// Rows that were ignored.
    pub skipped: Vec<SkippedRow>,
}

/// Parses a discount feed.
///
/// # Errors
///
/// Returns [`FeedParseError`] when the input is not readable CSV. Individual
/// malformed rows never fail the parse; they end up in [`ParsedFeed::skipped`].
pub fn parse_feed<R: io::Read>(reader: R) -> Result<ParsedFeed, FeedParseError> {
    let mut rows = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(reader);

    let mut feed = ParsedFeed::default();

    for record in rows.records() {
        let record = record?;

        match parse_row(&record) {
            Row::Rule(rule) => feed.rules.push(rule),
            Row::Header => {}
            Row::Skipped(reason) => feed.skipped.push(SkippedRow {
                line: record.position().map_or(0, csv::Position::line),
                reason,
                fields: record.iter().map(str::to_string).collect(),
            }),
        }
    }

    Ok(feed)
}

enum Row {
    Rule(DiscountRule),
    Header,
    Skipped(SkipReason),
}

fn parse_row(record: &StringRecord) -> Row {
    let (Some(kind), Some(target), Some(percent)) = (record.get(0), record.get(1), record.get(2))
    else {
        return Row::Skipped(SkipReason::TooFewColumns);
    };

    if kind == HEADER_MARKER {
        return Row::Header;
    }

    let Ok(percent) = percent.parse::<i64>() else {
        return Row::Skipped(SkipReason::InvalidPercent);
    };

    let target = match kind {
        CATEGORY_RULE => RuleTarget::Category(target.to_string()),
        ITEM_RULE => match target.parse::<i64>() {
            Ok(articul) => RuleTarget::Item(articul),
            Err(_) => return Row::Skipped(SkipReason::InvalidArticul),
        },
        STORE_RULE => RuleTarget::Store,
        _ => return Row::Skipped(SkipReason::UnknownRuleType),
    };

    Row::Rule(DiscountRule::new(target, percent))
}
