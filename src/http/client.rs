//! HTTP client
//!
//! One client instance is shared for the whole run. Every request is a GET
//! with query parameters; a non-2xx status becomes `Error::HttpStatus` with
//! the response body attached.

use crate::config::FetchConfig;
use crate::error::{Error, Result};
use reqwest::{Client, Response};
use serde::de::DeserializeOwned;
use tracing::debug;

/// Configuration for a single request
#[derive(Debug, Clone, Default)]
pub struct RequestConfig {
    /// Query parameters, sent in insertion order
    pub query: Vec<(String, String)>,
}

impl RequestConfig {
    /// Create a new request config
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a query parameter
    #[must_use]
    pub fn query(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.query.push((key.into(), value.into()));
        self
    }
}

/// HTTP client for the register API
pub struct HttpClient {
    client: Client,
}

impl HttpClient {
    /// Create a new HTTP client from fetch configuration
    pub fn new(config: &FetchConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(config.timeout)
            .user_agent(&config.user_agent)
            .build()?;

        Ok(Self { client })
    }

    /// Make a GET request, mapping non-success statuses to errors
    pub async fn get(&self, url: &str, config: RequestConfig) -> Result<Response> {
        let mut req = self.client.get(url);

        if !config.query.is_empty() {
            req = req.query(&config.query);
        }

        let response = req.send().await?;
        let status = response.status();

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(Error::HttpStatus {
                status: status.as_u16(),
                body,
            });
        }

        debug!("Request succeeded: GET {url}");
        Ok(response)
    }

    /// Make a GET request and parse the JSON response
    pub async fn get_json<T: DeserializeOwned>(
        &self,
        url: &str,
        config: RequestConfig,
    ) -> Result<T> {
        let response = self.get(url, config).await?;
        let json: T = response.json().await.map_err(Error::Http)?;
        Ok(json)
    }
}

impl std::fmt::Debug for HttpClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HttpClient").finish_non_exhaustive()
    }
}
