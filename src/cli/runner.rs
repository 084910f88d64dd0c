//! CLI runner - validates inputs, fetches, and writes the result

use crate::cli::commands::Cli;
use crate::config::{DateRange, FetchConfig};
use crate::error::{Error, Result};
use crate::fetch::Fetcher;
use crate::output::{default_output_dir, resolve_output_path, write_records};
use std::time::Duration;

/// CLI runner
pub struct Runner {
    cli: Cli,
}

impl Runner {
    /// Create a new runner
    pub fn new(cli: Cli) -> Self {
        Self { cli }
    }

    /// Run the download
    ///
    /// Output directory and date arguments are validated before the first
    /// request; the output file is only written when the full fetch
    /// succeeded.
    pub async fn run(&self) -> Result<()> {
        let directory = match &self.cli.output_directory {
            Some(dir) => dir.clone(),
            None => default_output_dir().ok_or_else(|| {
                Error::config("Could not resolve a downloads directory; use --output-directory")
            })?,
        };
        let output_path = resolve_output_path(&directory, &self.cli.output_filename)?;

        let range = DateRange::parse(self.cli.from_date.as_deref(), self.cli.to_date.as_deref())?;

        let config = FetchConfig::builder()
            .endpoint(self.cli.endpoint.clone())?
            .request_delay(Duration::from_millis(self.cli.request_delay_ms))
            .build();

        let fetcher = Fetcher::new(config)?;
        let records = fetcher.fetch(&range).await?;

        write_records(&output_path, &records)
    }
}
