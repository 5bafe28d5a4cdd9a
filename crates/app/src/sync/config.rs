//! Sync job configuration.

use std::time::Duration;

/// Hour used when no sync time is configured.
pub const DEFAULT_SYNC_HOUR: u8 = 2;

/// Minute used when no sync time is configured.
pub const DEFAULT_SYNC_MINUTE: u8 = 0;

/// Upper bound on a single feed request.
pub const DEFAULT_FETCH_TIMEOUT: Duration = Duration::from_secs(30);

/// Sync job settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SyncConfig {
    /// UTC hour of the daily run, `0..=23`.
    pub hour: u8,

    /// Minute of the daily run, `0..=59`.
    pub minute: u8,

    /// Location of the discount feed.
    pub url: String,

    /// Timeout for fetching the feed.
    pub timeout: Duration,
}

impl Default for SyncConfig {
    fn default() -> Self {
        Self {
            hour: DEFAULT_SYNC_HOUR,
            minute: DEFAULT_SYNC_MINUTE,
            url: String::new(),
            timeout: DEFAULT_FETCH_TIMEOUT,
        }
    }
}

/// A validated UTC time of day.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SyncTime {
    hour: i8,
    minute: i8,
}

impl SyncTime {
    /// Returns `None` when `hour` or `minute` is out of range.
    pub fn new(hour: u8, minute: u8) -> Option<Self> {
        if hour > 23 || minute > 59 {
            return None;
        }

        Some(Self {
            hour: i8::try_from(hour).ok()?,
            minute: i8::try_from(minute).ok()?,
        })
    }

    pub(crate) fn hour(self) -> i8 {
        self.hour
    }

    pub(crate) fn minute(self) -> i8 {
        self.minute
    }
}
