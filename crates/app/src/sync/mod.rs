//! Discount Sync
//!
//! Once a day, at a configured UTC time, fetch the discount feed, aggregate
//! its rules over the current items and write the resulting discount prices
//! back through the items repository.

pub mod config;
pub mod errors;
mod feed;
pub mod job;
pub mod schedule;

pub use config::{SyncConfig, SyncTime};
pub use errors::*;
pub use job::{SyncJob, SyncReport};
pub use schedule::next_run;
