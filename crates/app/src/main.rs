//! Shopfront discount sync service

use std::process;

use tracing::{error, info, info_span};

use shopfront_app::{
    context::AppContext,
    sync::{SyncJob, SyncReport},
};

use crate::config::{AppConfig, Command};

mod config;
mod observability;
mod shutdown;

/// Shopfront entry point
#[tokio::main]
pub async fn main() {
    let config = AppConfig::load().unwrap_or_else(|e| {
        #[expect(
            clippy::print_stderr,
            reason = "logging not initialized yet, must use eprintln for config errors"
        )]
        {
            eprintln!("Configuration error: {e}");
        }

        process::exit(1);
    });

    if let Err(error) = observability::init_subscriber(&config.logging) {
        #[expect(
            clippy::print_stderr,
            reason = "logging failed to initialize, must use eprintln"
        )]
        {
            eprintln!("{error}");
        }

        process::exit(1);
    }

    let app = AppContext::new(config.storage.driver);
    let logger = info_span!("shopfront");

    let job = match app.sync_job(
        &config.sync.sync_job_name,
        &logger,
        config.sync.to_sync_config(),
    ) {
        Ok(job) => job,
        Err(init_error) => {
            error!("failed to create sync job: {init_error}");

            process::exit(1);
        }
    };

    match config.command {
        Command::Run => run(&job).await,
        Command::Sync => sync(&job).await,
    }
}

async fn run(job: &SyncJob) {
    tokio::select! {
        result = job.start() => {
            let Err(schedule_error) = result;

            error!("sync job stopped: {schedule_error}");

            process::exit(1);
        }
        result = shutdown::listen() => {
            if let Err(signal_error) = result {
                error!("failed to listen for shutdown signal: {signal_error}");

                process::exit(1);
            }

            info!(job = job.name(), "sync job stopped");
        }
    }
}

async fn sync(job: &SyncJob) {
    match job.sync_once().await {
        Ok(SyncReport {
            rules,
            skipped_rows,
            updated,
            unpriced,
            missing,
        }) => {
            info!(
                rules,
                skipped_rows, updated, unpriced, missing, "manual sync finished"
            );
        }
        Err(sync_error) => {
            error!("manual sync failed: {sync_error}");

            process::exit(1);
        }
    }
}
