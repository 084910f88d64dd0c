//! Fetcher configuration and date range handling
//!
//! The endpoint, page size, and courtesy delay are immutable configuration
//! values owned by the fetcher, built once up front.

use crate::error::{Error, Result};
use chrono::NaiveDate;
use std::time::Duration;

/// Production endpoint for the corona support grant register
pub const DEFAULT_ENDPOINT: &str =
    "https://www.skatteetaten.no/api/kontantstotteForNaeringRegister/process";

/// Maximum records per request, limited by Skatteetaten
pub const MAX_PAGE_SIZE: u32 = 1000;

/// Pause between page requests, for courtesy's sake
pub const DEFAULT_REQUEST_DELAY: Duration = Duration::from_millis(100);

/// Date format accepted for the range filter
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Configuration for the paginated fetcher
#[derive(Debug, Clone)]
pub struct FetchConfig {
    /// Endpoint URL for the register API
    pub endpoint: String,
    /// Records per page request
    pub page_size: u32,
    /// Delay between consecutive page requests
    pub request_delay: Duration,
    /// Request timeout
    pub timeout: Duration,
    /// User agent string
    pub user_agent: String,
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            page_size: MAX_PAGE_SIZE,
            request_delay: DEFAULT_REQUEST_DELAY,
            timeout: Duration::from_secs(30),
            user_agent: format!("kontantstotte-dl/{}", env!("CARGO_PKG_VERSION")),
        }
    }
}

impl FetchConfig {
    /// Create a new config builder
    pub fn builder() -> FetchConfigBuilder {
        FetchConfigBuilder::default()
    }
}

/// Builder for fetch config
#[derive(Default)]
pub struct FetchConfigBuilder {
    config: FetchConfig,
}

impl FetchConfigBuilder {
    /// Set the endpoint URL; fails if the URL is not parseable
    pub fn endpoint(mut self, endpoint: impl Into<String>) -> Result<Self> {
        let endpoint = endpoint.into();
        url::Url::parse(&endpoint)?;
        self.config.endpoint = endpoint;
        Ok(self)
    }

    /// Set records per page request, clamped to `1..=MAX_PAGE_SIZE`
    pub fn page_size(mut self, size: u32) -> Self {
        self.config.page_size = size.clamp(1, MAX_PAGE_SIZE);
        self
    }

    /// Set the delay between page requests
    pub fn request_delay(mut self, delay: Duration) -> Self {
        self.config.request_delay = delay;
        self
    }

    /// Set the request timeout
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.config.timeout = timeout;
        self
    }

    /// Set the user agent
    pub fn user_agent(mut self, agent: impl Into<String>) -> Self {
        self.config.user_agent = agent.into();
        self
    }

    /// Build the config
    pub fn build(self) -> FetchConfig {
        self.config
    }
}

/// Inclusive date range filter for the register query
///
/// Both bounds are optional; an empty range means "everything".
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DateRange {
    /// Start of the range, inclusive
    pub from: Option<NaiveDate>,
    /// End of the range, inclusive
    pub to: Option<NaiveDate>,
}

impl DateRange {
    /// Parse a range from raw CLI values, rejecting malformed dates
    pub fn parse(from: Option<&str>, to: Option<&str>) -> Result<Self> {
        Ok(Self {
            from: parse_date("--from-date", from)?,
            to: parse_date("--to-date", to)?,
        })
    }

    /// Wire value for `dateFilter[fromDate]`; empty when unset
    pub fn from_param(&self) -> String {
        self.from
            .map(|d| d.format(DATE_FORMAT).to_string())
            .unwrap_or_default()
    }

    /// Wire value for `dateFilter[toDate]`; empty when unset
    pub fn to_param(&self) -> String {
        self.to
            .map(|d| d.format(DATE_FORMAT).to_string())
            .unwrap_or_default()
    }
}

fn parse_date(field: &str, value: Option<&str>) -> Result<Option<NaiveDate>> {
    match value {
        None => Ok(None),
        Some(raw) => NaiveDate::parse_from_str(raw, DATE_FORMAT)
            .map(Some)
            .map_err(|_| Error::invalid_date(field, raw)),
    }
}
