//! # kontantstotte-dl
//!
//! One-shot batch downloader for Skatteetaten's corona support grant
//! register (kontantstøtte for næringslivet).
//!
//! Given an optional inclusive date range, the tool probes the register
//! API for the total record count, fetches everything in fixed-size pages
//! with a courtesy delay between requests, and writes the aggregate as a
//! single JSON file.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use kontantstotte_dl::{DateRange, FetchConfig, Fetcher, Result};
//!
//! #[tokio::main]
//! async fn main() -> Result<()> {
//!     let fetcher = Fetcher::new(FetchConfig::default())?;
//!     let range = DateRange::parse(Some("2020-08-01"), None)?;
//!     let records = fetcher.fetch(&range).await?;
//!     println!("downloaded {} records", records.len());
//!     Ok(())
//! }
//! ```
//!
//! ## Protocol
//!
//! ```text
//! Probing ──► Fetching ──► Done
//!    │            │
//!    └──────┬─────┘
//!           ▼
//!        Failed (any non-success response; nothing is written)
//! ```
//!
//! There is no retry logic anywhere. Every failure terminates the run, and
//! a partial fetch leaves no output file behind.

#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::cast_possible_truncation)]

/// Error types
pub mod error;

/// Fetcher configuration and date range handling
pub mod config;

/// HTTP client
pub mod http;

/// Paginated fetcher
pub mod fetch;

/// JSON file output
pub mod output;

/// Command-line interface
pub mod cli;

pub use config::{DateRange, FetchConfig};
pub use error::{Error, Result};
pub use fetch::Fetcher;

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Crate name
pub const NAME: &str = env!("CARGO_PKG_NAME");
