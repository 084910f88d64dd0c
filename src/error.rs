//! Error types for kontantstotte-dl
//!
//! All public APIs return `Result<T, Error>` where Error is defined here.

use thiserror::Error;

/// The main error type for kontantstotte-dl
#[derive(Error, Debug)]
pub enum Error {
    // ============================================================================
    // Input Validation Errors
    // ============================================================================
    #[error("Configuration error: {message}")]
    Config { message: String },

    #[error("{field} ({value}) does not match format '%Y-%m-%d'")]
    InvalidDate { field: String, value: String },

    #[error("{path} is not a valid output directory")]
    InvalidOutputDir { path: String },

    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    // ============================================================================
    // HTTP Errors
    // ============================================================================
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("HTTP {status}: {body}")]
    HttpStatus { status: u16, body: String },

    #[error("Probe request failed with status code {status}")]
    ProbeFailed { status: u16 },

    #[error("Got to {fetched} of {total}, then received a {status} response")]
    PageFailed {
        status: u16,
        fetched: usize,
        total: u64,
    },

    // ============================================================================
    // Output Errors
    // ============================================================================
    #[error("Failed to serialize records: {0}")]
    JsonSerialize(#[from] serde_json::Error),

    #[error("Output error: {message}")]
    Output { message: String },
}

impl Error {
    /// Create a config error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Create an invalid date error
    pub fn invalid_date(field: impl Into<String>, value: impl Into<String>) -> Self {
        Self::InvalidDate {
            field: field.into(),
            value: value.into(),
        }
    }

    /// Create an invalid output directory error
    pub fn invalid_output_dir(path: impl Into<String>) -> Self {
        Self::InvalidOutputDir { path: path.into() }
    }

    /// Create an HTTP status error
    pub fn http_status(status: u16, body: impl Into<String>) -> Self {
        Self::HttpStatus {
            status,
            body: body.into(),
        }
    }

    /// Create an output error
    pub fn output(message: impl Into<String>) -> Self {
        Self::Output {
            message: message.into(),
        }
    }
}

/// Result type alias for kontantstotte-dl
pub type Result<T> = std::result::Result<T, Error>;
