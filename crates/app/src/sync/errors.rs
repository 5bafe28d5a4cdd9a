//! Sync errors.

use reqwest::{StatusCode, Url};
use thiserror::Error;

use shopfront::discounts::FeedParseError;

/// Reasons a sync job cannot be built.
#[derive(Debug, Error)]
pub enum SyncJobConfigError {
    #[error("sync job name must not be empty")]
    EmptyName,

    #[error("sync job needs a logger span")]
    MissingLogger,

    #[error("sync hour must be between 0 and 23, got {0}")]
    InvalidHour(u8),

    #[error("sync minute must be between 0 and 59, got {0}")]
    InvalidMinute(u8),

    #[error("sync feed url is not set")]
    MissingUrl,

    #[error("invalid sync feed url {url}")]
    InvalidUrl {
        url: String,
        #[source]
        source: url::ParseError,
    },

    #[error("failed to build http client: {0}")]
    HttpClient(#[source] reqwest::Error),
}

/// Failures while downloading the discount feed.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("http error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("couldn't fetch {url}: {status}")]
    Status { url: Url, status: StatusCode },
}

/// Failures that abort a single sync attempt.
#[derive(Debug, Error)]
pub enum SyncError {
    #[error("failed to fetch discount feed: {0}")]
    Fetch(#[from] FetchError),

    #[error("failed to parse discount feed: {0}")]
    Parse(#[from] FeedParseError),
}

/// The next run time could not be represented.
#[derive(Debug, Error)]
#[error("failed to compute next sync time: {0}")]
pub struct ScheduleError(#[from] jiff::Error);
