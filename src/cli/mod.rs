//! CLI module
//!
//! Argument parsing and the runner that wires validation, fetch, and
//! output together. Validation failures (bad directory, malformed date)
//! are reported before any network call is made.

mod commands;
mod runner;

pub use commands::Cli;
pub use runner::Runner;
