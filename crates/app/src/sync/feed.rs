//! Discount feed HTTP client.

use std::time::Duration;

use reqwest::{Client, StatusCode, Url};
use tracing::debug;

use crate::sync::errors::FetchError;

/// Downloads the raw discount feed.
#[derive(Debug, Clone)]
pub(crate) struct FeedClient {
    url: Url,
    http: Client,
}

impl FeedClient {
    /// Create a client for `url` whose requests give up after `timeout`.
    pub(crate) fn new(url: Url, timeout: Duration) -> Result<Self, reqwest::Error> {
        let http = Client::builder().timeout(timeout).build()?;

        Ok(Self { url, http })
    }

    pub(crate) fn url(&self) -> &Url {
        &self.url
    }

    /// Fetch the feed body.
    ///
    /// Anything other than `200 OK` is treated as a failure.
    pub(crate) async fn fetch(&self) -> Result<Vec<u8>, FetchError> {
        debug!(url = %self.url, "requesting discount feed");

        let response = self.http.get(self.url.clone()).send().await?;

        if response.status() != StatusCode::OK {
            return Err(FetchError::Status {
                url: self.url.clone(),
                status: response.status(),
            });
        }

        let body = response.bytes().await?;

        debug!(bytes = body.len(), "received discount feed");

        Ok(body.to_vec())
    }
}
