//! CLI arguments

use crate::config::DEFAULT_ENDPOINT;
use crate::output::DEFAULT_FILENAME;
use clap::Parser;
use std::path::PathBuf;

/// Download corona support grants from Skatteetaten
#[derive(Parser, Debug)]
#[command(name = "kontantstotte-dl")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Directory to which the data will be downloaded
    /// (default: 'Downloads' directory under the user's home)
    #[arg(long)]
    pub output_directory: Option<PathBuf>,

    /// Filename to which the data will be downloaded
    #[arg(long, default_value = DEFAULT_FILENAME)]
    pub output_filename: String,

    /// Start of the date range filter, inclusive (YYYY-MM-DD)
    #[arg(long)]
    pub from_date: Option<String>,

    /// End of the date range filter, inclusive (YYYY-MM-DD)
    #[arg(long)]
    pub to_date: Option<String>,

    /// Register API endpoint
    #[arg(long, default_value = DEFAULT_ENDPOINT)]
    pub endpoint: String,

    /// Delay between page requests, in milliseconds
    #[arg(long, default_value_t = 100)]
    pub request_delay_ms: u64,

    /// Verbose output
    #[arg(short, long)]
    pub verbose: bool,
}
