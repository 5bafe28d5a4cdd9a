//! Storage Config

use clap::Args;

use shopfront_app::context::StorageDriver;

/// Item storage settings.
#[derive(Debug, Args)]
pub struct StorageConfig {
    /// Storage driver
    #[arg(
        long = "storage-driver",
        env = "STORAGE_DRIVER",
        value_enum,
        default_value_t = StorageDriver::Internal
    )]
    pub driver: StorageDriver,
}
