//! Sync Config

use std::time::Duration;

use clap::Args;

use shopfront_app::sync::{
    SyncConfig,
    config::{DEFAULT_FETCH_TIMEOUT, DEFAULT_SYNC_HOUR, DEFAULT_SYNC_MINUTE},
};

/// Discount sync settings.
#[derive(Debug, Args)]
pub struct SyncSettings {
    /// Discount feed URL
    #[arg(long, env = "SYNC_URL")]
    pub sync_url: String,

    /// UTC hour of the daily sync
    #[arg(
        long,
        env = "SYNC_HOUR",
        default_value_t = DEFAULT_SYNC_HOUR,
        value_parser = clap::value_parser!(u8).range(0..=23)
    )]
    pub sync_hour: u8,

    /// Minute of the daily sync
    #[arg(
        long,
        env = "SYNC_MINUTE",
        default_value_t = DEFAULT_SYNC_MINUTE,
        value_parser = clap::value_parser!(u8).range(0..=59)
    )]
    pub sync_minute: u8,

    /// Feed request timeout in seconds
    #[arg(long, env = "SYNC_TIMEOUT_SECONDS", default_value_t = DEFAULT_FETCH_TIMEOUT.as_secs())]
    pub sync_timeout_seconds: u64,

    /// Name used for the sync job in logs
    #[arg(long, env = "SYNC_JOB_NAME", default_value = "discounts")]
    pub sync_job_name: String,
}

impl SyncSettings {
    #[must_use]
    pub fn to_sync_config(&self) -> SyncConfig {
        SyncConfig {
            hour: self.sync_hour,
            minute: self.sync_minute,
            url: self.sync_url.clone(),
            timeout: Duration::from_secs(self.sync_timeout_seconds),
        }
    }
}
