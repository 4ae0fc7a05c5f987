//! Run artifact writers.

use std::fs;
use std::path::Path;

use clinicseed_model::Document;

use crate::errors::SeedError;
use crate::model::SeedReport;

/// Write one collection as a pretty-printed JSON array. Returns the
/// artifact size in bytes.
pub fn write_collection_json(path: &Path, docs: &[Document]) -> Result<u64, SeedError> {
    let bytes = serde_json::to_vec_pretty(docs)?;
    fs::write(path, &bytes)?;
    Ok(bytes.len() as u64)
}

pub fn write_report(path: &Path, report: &SeedReport) -> Result<(), SeedError> {
    fs::write(path, serde_json::to_vec_pretty(report)?)?;
    Ok(())
}
