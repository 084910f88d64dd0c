//! Paginated fetcher
//!
//! Two-phase protocol against the register API:
//!
//! 1. **Probe**: a `skip=0&take=1` request whose only purpose is the
//!    server-reported total (`recordsFiltered`).
//! 2. **Paging**: fixed-size `skip`/`take` requests advancing the offset
//!    by the page size until `offset < total` no longer holds, appending
//!    records in server order, with a courtesy delay between requests.
//!
//! Any non-success response aborts the whole fetch; nothing is retried and
//! partially accumulated data is discarded by the caller.

mod types;

pub use types::ApiPage;

use crate::config::{DateRange, FetchConfig};
use crate::error::{Error, Result};
use crate::http::{HttpClient, RequestConfig};
use serde_json::Value;
use tracing::{debug, info};

/// Upper bound on records pre-allocated from the server-reported total
const PREALLOC_CAP: usize = 1 << 20;

/// Paginated fetcher for the register API
#[derive(Debug)]
pub struct Fetcher {
    client: HttpClient,
    config: FetchConfig,
}

impl Fetcher {
    /// Create a new fetcher
    pub fn new(config: FetchConfig) -> Result<Self> {
        let client = HttpClient::new(&config)?;
        Ok(Self { client, config })
    }

    /// Discover the total record count for the given range
    ///
    /// Issues the probe request (`skip=0&take=1`) and reads
    /// `recordsFiltered` from the response.
    pub async fn discover_total(&self, range: &DateRange) -> Result<u64> {
        let request = self.page_request(range, 0, 1);
        let page: ApiPage = self
            .client
            .get_json(&self.config.endpoint, request)
            .await
            .map_err(|e| match e {
                Error::HttpStatus { status, .. } => Error::ProbeFailed { status },
                other => other,
            })?;

        debug!("Probe reports {} records", page.records_filtered);
        Ok(page.records_filtered)
    }

    /// Fetch all records for the given range
    ///
    /// Returns the full accumulated record sequence, in server order.
    pub async fn fetch(&self, range: &DateRange) -> Result<Vec<Value>> {
        let total = self.discover_total(range).await?;
        let page_size = u64::from(self.config.page_size);

        // The pre-allocation is capped; `total` is server-controlled.
        let capacity = usize::try_from(total).unwrap_or(usize::MAX).min(PREALLOC_CAP);
        let mut records: Vec<Value> = Vec::with_capacity(capacity);
        let mut offset = 0u64;

        while offset < total {
            info!("Downloading {offset} of {total}");

            let request = self.page_request(range, offset, self.config.page_size);
            let page: ApiPage = self
                .client
                .get_json(&self.config.endpoint, request)
                .await
                .map_err(|e| match e {
                    Error::HttpStatus { status, .. } => Error::PageFailed {
                        status,
                        fetched: records.len(),
                        total,
                    },
                    other => other,
                })?;

            records.extend(page.data);

            // The offset advances by the page size even if the server
            // returned fewer records; the stopping condition stays
            // `offset < total`.
            offset += page_size;

            if offset < total {
                tokio::time::sleep(self.config.request_delay).await;
            }
        }

        info!("Downloaded {} of {total}", records.len());
        Ok(records)
    }

    /// Build the query parameters for one request
    fn page_request(&self, range: &DateRange, skip: u64, take: u32) -> RequestConfig {
        RequestConfig::new()
            .query("skip", skip.to_string())
            .query("take", take.to_string())
            .query("order[column]", "sakId")
            .query("order[dir]", "asc")
            .query("search", "")
            .query("dateFilter[fromDate]", range.from_param())
            .query("dateFilter[toDate]", range.to_param())
    }
}
