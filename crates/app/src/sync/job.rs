//! Discount sync job.

use std::{convert::Infallible, fmt, sync::Arc};

use jiff::{Timestamp, tz::TimeZone};
use reqwest::Url;
use tracing::{Instrument, Span, debug, error, info, info_span, warn};

use shopfront::{
    discounts::{SkipReason, SkippedRow, aggregate, discounted_price, parse_feed},
    items::ItemUpdate,
};

use crate::{
    items::{ItemsError, ItemsRepository},
    sync::{
        SyncConfig, SyncTime,
        errors::{ScheduleError, SyncError, SyncJobConfigError},
        feed::FeedClient,
        schedule::{run_after, wait_until},
    },
};

/// Outcome of one successful sync attempt.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SyncReport {
    /// Rules read from the feed.
    pub rules: usize,

    /// Feed rows that were ignored.
    pub skipped_rows: usize,

    /// Items whose discount price was rewritten.
    pub updated: usize,

    /// Items left alone because they have no original price.
    pub unpriced: usize,

    /// Items that disappeared between the snapshot and the write.
    pub missing: usize,
}

/// Scheduled discount synchronisation.
#[derive(Clone)]
pub struct SyncJob {
    name: String,
    time: SyncTime,
    feed: FeedClient,
    repository: Arc<dyn ItemsRepository>,
    span: Span,
}

impl fmt::Debug for SyncJob {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SyncJob")
            .field("name", &self.name)
            .field("time", &self.time)
            .field("url", self.feed.url())
            .finish_non_exhaustive()
    }
}

impl SyncJob {
    /// Build a job that writes into `repository` and logs under `logger`.
    ///
    /// # Errors
    ///
    /// Returns an error when the name is empty, no `logger` is given, the
    /// time of day is out of range, or the feed url is missing or malformed.
    /// A `logger` disabled by the level filter is still a logger.
    pub fn new(
        name: impl Into<String>,
        repository: Arc<dyn ItemsRepository>,
        logger: Option<&Span>,
        config: SyncConfig,
    ) -> Result<Self, SyncJobConfigError> {
        let name = name.into();

        if name.trim().is_empty() {
            return Err(SyncJobConfigError::EmptyName);
        }

        let Some(logger) = logger else {
            return Err(SyncJobConfigError::MissingLogger);
        };

        let time = validate_time(config.hour, config.minute)?;
        let url = validate_url(&config.url)?;

        let feed = FeedClient::new(url, config.timeout).map_err(SyncJobConfigError::HttpClient)?;
        let span = info_span!(parent: logger, "sync_job", job = %name);

        Ok(Self {
            name,
            time,
            feed,
            repository,
            span,
        })
    }

    /// Name the job logs under.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Run the daily schedule.
    ///
    /// Sleeps until the configured time, launches one attempt as its own
    /// task and immediately schedules the next day. A failed attempt is
    /// logged and never stops the loop.
    ///
    /// # Errors
    ///
    /// Only returns if the next run time cannot be computed.
    pub async fn start(&self) -> Result<Infallible, ScheduleError> {
        self.schedule(Timestamp::now)
            .instrument(self.span.clone())
            .await
    }

    /// Perform exactly one fetch, parse and apply pass.
    ///
    /// # Errors
    ///
    /// Returns an error when the feed cannot be fetched or read. Items are
    /// left untouched in that case.
    pub async fn sync_once(&self) -> Result<SyncReport, SyncError> {
        self.sync().instrument(self.span.clone()).await
    }

    async fn schedule(
        &self,
        clock: impl Fn() -> Timestamp,
    ) -> Result<Infallible, ScheduleError> {
        info!("started sync job");

        let mut last = None;

        loop {
            let now = clock();
            let next = run_after(now, last, self.time)?;

            info!(next = %next.to_zoned(TimeZone::UTC), "next sync scheduled");

            tokio::time::sleep(wait_until(now, next)).await;

            let job = self.clone();

            tokio::spawn(
                async move {
                    if let Err(error) = job.sync().await {
                        error!("sync failed: {error}");
                    }
                }
                .instrument(self.span.clone()),
            );

            last = Some(next);
        }
    }

    async fn sync(&self) -> Result<SyncReport, SyncError> {
        info!("syncing");

        let body = self.feed.fetch().await?;
        let feed = parse_feed(body.as_slice())?;

        for row in &feed.skipped {
            log_skipped_row(row);
        }

        let items = self.repository.list_items().await;
        let totals = aggregate(&items, &feed.rules);

        let mut report = SyncReport {
            rules: feed.rules.len(),
            skipped_rows: feed.skipped.len(),
            ..SyncReport::default()
        };

        for (item, total) in items.iter().zip(totals) {
            let Some(original_price) = item.original_price else {
                debug!(id = %item.id, "item has no original price");
                report.unpriced += 1;

                continue;
            };

            let update = ItemUpdate {
                discount_price: Some(discounted_price(original_price, total.percent)),
                product_of_day: total.product_of_day.then_some(true),
            };

            match self.repository.update_item(item.id, update).await {
                Ok(_) => report.updated += 1,
                Err(ItemsError::NotFound(id)) => {
                    debug!(%id, "item deleted during sync");
                    report.missing += 1;
                }
                Err(error) => {
                    warn!(id = %item.id, "failed to update item: {error}");
                    report.missing += 1;
                }
            }
        }

        info!(
            rules = report.rules,
            skipped_rows = report.skipped_rows,
            updated = report.updated,
            "sync done"
        );

        Ok(report)
    }
}

fn validate_time(hour: u8, minute: u8) -> Result<SyncTime, SyncJobConfigError> {
    if hour > 23 {
        return Err(SyncJobConfigError::InvalidHour(hour));
    }

    SyncTime::new(hour, minute).ok_or(SyncJobConfigError::InvalidMinute(minute))
}

fn validate_url(url: &str) -> Result<Url, SyncJobConfigError> {
    if url.trim().is_empty() {
        return Err(SyncJobConfigError::MissingUrl);
    }

    Url::parse(url).map_err(|source| SyncJobConfigError::InvalidUrl {
        url: url.to_string(),
        source,
    })
}

fn log_skipped_row(row: &SkippedRow) {
    match row.reason {
        SkipReason::UnknownRuleType => {
            debug!(line = row.line, fields = ?row.fields, "ignoring discount row: {}", row.reason);
        }
        SkipReason::TooFewColumns | SkipReason::InvalidPercent | SkipReason::InvalidArticul => {
            warn!(line = row.line, fields = ?row.fields, "can't parse discount row: {}", row.reason);
        }
    }
}
