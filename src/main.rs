//! kontantstotte-dl CLI
//!
//! Command-line entry point for the register downloader

use clap::Parser;
use kontantstotte_dl::cli::{Cli, Runner};

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    // Initialize logging
    let level = if cli.verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::INFO
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env().add_directive(level.into()),
        )
        .init();

    let runner = Runner::new(cli);

    if let Err(e) = runner.run().await {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
