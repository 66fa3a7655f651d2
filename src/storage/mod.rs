//! Persistence for analysis results
//!
//! The analyzer core is indifferent to the backing store; everything goes
//! through `AnalysisStore`. Two backends are provided: an in-memory store
//! for tests and in-process use, and a JSON history file for the CLI.

pub mod json_file;
pub mod memory;

pub use json_file::JsonFileStore;
pub use memory::MemoryStore;

use crate::error::Result;
use crate::processing::analyzer::AnalysisResult;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A stored analysis: the result plus the request context it came from.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisRecord {
    pub id: u64,
    pub filename: String,
    pub job_description: String,
    pub result: AnalysisResult,
    pub created_at: DateTime<Utc>,
}

/// Aggregate statistics over all stored records.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StoreStats {
    pub total: usize,
    pub average_score: f64,
    pub highest_score: f64,
    pub lowest_score: f64,
}

pub trait AnalysisStore {
    /// Persist a result; returns the id of the new record.
    fn store(
        &mut self,
        filename: &str,
        job_description: &str,
        result: &AnalysisResult,
    ) -> Result<u64>;

    fn get(&self, id: u64) -> Result<Option<AnalysisRecord>>;

    /// Up to `limit` records, most recent first.
    fn list(&self, limit: usize) -> Result<Vec<AnalysisRecord>>;

    /// Remove a record; true when something was deleted.
    fn delete(&mut self, id: u64) -> Result<bool>;

    fn stats(&self) -> Result<StoreStats>;
}

pub(crate) fn compute_stats<'a, I>(records: I) -> StoreStats
where
    I: Iterator<Item = &'a AnalysisRecord>,
{
    let scores: Vec<f64> = records.map(|r| r.result.overall_score).collect();

    if scores.is_empty() {
        return StoreStats {
            total: 0,
            average_score: 0.0,
            highest_score: 0.0,
            lowest_score: 0.0,
        };
    }

    let total = scores.len();
    let average = scores.iter().sum::<f64>() / total as f64;
    let highest = scores.iter().cloned().fold(f64::MIN, f64::max);
    let lowest = scores.iter().cloned().fold(f64::MAX, f64::min);

    StoreStats {
        total,
        average_score: round2(average),
        highest_score: round2(highest),
        lowest_score: round2(lowest),
    }
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
