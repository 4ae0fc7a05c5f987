use std::path::PathBuf;

use chrono::NaiveDate;
use serde::Serialize;

/// How many documents each generator produces. Defaults match the
/// production seeding volumes.
#[derive(Debug, Clone)]
pub struct SeedCounts {
    pub staff: usize,
    /// Draws of the visitor/patient split, not a document count: each draw
    /// may yield a visitor, a patient, or both.
    pub visitor_draws: usize,
    pub tips: usize,
    pub home_remedies: usize,
    pub facilities: usize,
    pub events: usize,
    pub appointments: usize,
    pub timetable_rounds: usize,
    pub leave_applies: usize,
}

impl Default for SeedCounts {
    fn default() -> Self {
        Self {
            staff: 300,
            visitor_draws: 10_000,
            tips: 1000,
            home_remedies: 2000,
            facilities: 100,
            events: 50,
            appointments: 5000,
            timetable_rounds: 10,
            leave_applies: 500,
        }
    }
}

/// Inputs for one seeding run.
#[derive(Debug, Clone)]
pub struct SeedOptions {
    pub seed: u64,
    /// Reference date for "today": past/future windows and the date-past
    /// validator are anchored to it.
    pub today: NaiveDate,
    pub streets_path: PathBuf,
    pub out_dir: PathBuf,
    pub counts: SeedCounts,
}

#[derive(Debug, Clone, Serialize)]
pub struct CollectionReport {
    pub name: String,
    pub documents: u64,
}

/// Summary artifact written alongside the collection dumps.
#[derive(Debug, Clone, Serialize)]
pub struct SeedReport {
    pub run_id: String,
    pub seed: u64,
    pub today: String,
    pub duration_ms: u64,
    pub bytes_written: u64,
    pub collections: Vec<CollectionReport>,
}
