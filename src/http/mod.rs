//! HTTP client module
//!
//! Thin wrapper over reqwest: base URL handling, query parameters, and
//! mapping of non-success responses to typed errors. Deliberately free of
//! retries and backoff; any failed request is terminal for the run.

mod client;

pub use client::{HttpClient, RequestConfig};
