//! One-shot JSON file writer

use crate::error::{Error, Result};
use serde_json::Value;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::info;

/// Default output filename
pub const DEFAULT_FILENAME: &str = "corona.json";

/// The user's downloads directory, falling back to `$HOME/Downloads`
pub fn default_output_dir() -> Option<PathBuf> {
    dirs::download_dir().or_else(|| dirs::home_dir().map(|home| home.join("Downloads")))
}

/// Validate the output directory and join the filename onto it
///
/// The directory must already exist; this is checked before any network
/// call is made.
pub fn resolve_output_path(directory: &Path, filename: &str) -> Result<PathBuf> {
    if !directory.is_dir() {
        return Err(Error::invalid_output_dir(directory.display().to_string()));
    }
    Ok(directory.join(filename))
}

/// Serialize the records as a JSON array and write them in one shot
pub fn write_records(path: &Path, records: &[Value]) -> Result<()> {
    let bytes = serde_json::to_vec(records)?;
    fs::write(path, bytes).map_err(|e| {
        Error::output(format!("Failed to write {}: {e}", path.display()))
    })?;

    info!("Wrote {} records to {}", records.len(), path.display());
    Ok(())
}
