//! Application configuration module

use clap::{Parser, Subcommand};

use crate::config::{logging::LoggingConfig, storage::StorageConfig, sync::SyncSettings};

pub(crate) mod logging;
pub(crate) mod storage;
pub(crate) mod sync;

/// Shopfront configuration
#[derive(Debug, Parser)]
#[command(name = "shopfront", about = "Shopfront catalog and discount sync", long_about = None)]
pub struct AppConfig {
    /// Logging output settings.
    #[command(flatten)]
    pub logging: LoggingConfig,

    /// Item storage settings.
    #[command(flatten)]
    pub storage: StorageConfig,

    /// Discount sync settings.
    #[command(flatten)]
    pub sync: SyncSettings,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Subcommand)]
pub enum Command {
    /// Run the daily discount sync until interrupted.
    Run,

    /// Run a single discount sync now and exit.
    Sync,
}

impl AppConfig {
    /// Load configuration from environment and CLI arguments
    ///
    /// # Errors
    ///
    /// Returns an error if configuration cannot be parsed
    pub fn load() -> Result<Self, clap::Error> {
        // Load .env file if present (ignore if missing)
        _ = dotenvy::dotenv();

        Self::try_parse()
    }
}
