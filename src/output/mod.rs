//! Output module
//!
//! Resolves the output location and writes the accumulated records as a
//! single JSON file in one shot. No streaming and no incremental flush:
//! either the complete result lands on disk or nothing does.

mod writer;

pub use writer::{default_output_dir, resolve_output_path, write_records, DEFAULT_FILENAME};

#[cfg(test)]
mod tests;
