//! Typed record loading.
//!
//! The ingestion collaborator hands over already-parsed records as a JSON
//! array of tournaments, each with its seasons in chronological order.

use league_core::{Result, TournamentRecord};
use std::path::Path;
use tracing::debug;

/// Parse tournament records from a JSON string.
pub fn parse_records(json: &str) -> Result<Vec<TournamentRecord>> {
    let records: Vec<TournamentRecord> = serde_json::from_str(json)?;
    Ok(records)
}

/// Load tournament records from a JSON file.
pub fn load_records(path: impl AsRef<Path>) -> Result<Vec<TournamentRecord>> {
    let path = path.as_ref();
    let json = std::fs::read_to_string(path)?;
    let records = parse_records(&json)?;
    debug!(path = %path.display(), tournaments = records.len(), "records loaded");
    Ok(records)
}
