//! App Context

use std::sync::Arc;

use clap::ValueEnum;
use tracing::Span;

use crate::{
    items::{InMemoryItemsRepository, ItemsRepository},
    sync::{SyncConfig, SyncJob, SyncJobConfigError},
};

/// Where items are stored.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum StorageDriver {
    /// Process memory; nothing survives a restart.
    #[default]
    Internal,
}

/// Shared services for the running process.
#[derive(Clone)]
pub struct AppContext {
    /// Item storage selected by the configured driver.
    pub items: Arc<dyn ItemsRepository>,
}

impl AppContext {
    /// Build application context for the given storage driver.
    #[must_use]
    pub fn new(driver: StorageDriver) -> Self {
        let items: Arc<dyn ItemsRepository> = match driver {
            StorageDriver::Internal => Arc::new(InMemoryItemsRepository::new()),
        };

        Self { items }
    }

    /// Build a discount sync job writing into this context's items.
    ///
    /// # Errors
    ///
    /// Returns an error when the job settings are invalid.
    pub fn sync_job(
        &self,
        name: &str,
        logger: &Span,
        config: SyncConfig,
    ) -> Result<SyncJob, SyncJobConfigError> {
        SyncJob::new(name, Arc::clone(&self.items), Some(logger), config)
    }
}
