//! Published-sheet provider.
//!
//! Fetches a spreadsheet's "publish to web" CSV export over HTTP. One request
//! per refresh; transport failures, non-success statuses, and unparseable
//! bodies all come back as [`AcquisitionError`] without retrying.

use std::time::Duration;
use tracing::debug;

use super::csv::parse_csv;
use super::{AcquisitionError, GridProvider};
use crate::grid::RawGrid;

/// Default request timeout.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// HTTP provider for a published CSV export URL.
pub struct SheetProvider {
    client: reqwest::blocking::Client,
    url: String,
}

impl SheetProvider {
    pub fn new(url: impl Into<String>, timeout: Duration) -> Result<Self, AcquisitionError> {
        let client = reqwest::blocking::Client::builder()
            .timeout(timeout)
            .user_agent(concat!("standings/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| AcquisitionError::Network(format!("failed to build HTTP client: {e}")))?;

        Ok(Self {
            client,
            url: url.into(),
        })
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

impl GridProvider for SheetProvider {
    fn name(&self) -> &str {
        "published_sheet"
    }

    fn fetch_grid(&self) -> Result<RawGrid, AcquisitionError> {
        let resp = self
            .client
            .get(&self.url)
            .send()
            .map_err(|e| AcquisitionError::Network(e.to_string()))?;

        let status = resp.status();
        if !status.is_success() {
            return Err(AcquisitionError::HttpStatus {
                status: status.as_u16(),
            });
        }

        let text = resp
            .text()
            .map_err(|e| AcquisitionError::Network(format!("failed to read response body: {e}")))?;
        debug!(url = %self.url, bytes = text.len(), "fetched sheet export");

        parse_csv(&text)
    }
}
