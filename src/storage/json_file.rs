//! JSON history file store
//!
//! The whole history lives in one JSON document that is read, modified and
//! rewritten per operation. Plenty for a single-user CLI history; anything
//! multi-writer belongs behind a real database implementing `AnalysisStore`.

use crate::error::{Result, ResumeAnalyzerError};
use crate::processing::analyzer::AnalysisResult;
use crate::storage::{compute_stats, AnalysisRecord, AnalysisStore, StoreStats};
use chrono::Utc;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

pub struct JsonFileStore {
    path: PathBuf,
}

#[derive(Debug, Default, Serialize, Deserialize)]
struct HistoryFile {
    next_id: u64,
    records: Vec<AnalysisRecord>,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn load(&self) -> Result<HistoryFile> {
        if !self.path.exists() {
            return Ok(HistoryFile::default());
        }

        let content = std::fs::read_to_string(&self.path).map_err(|e| {
            ResumeAnalyzerError::Storage(format!(
                "Failed to read history file {}: {}",
                self.path.display(),
                e
            ))
        })?;

        serde_json::from_str(&content).map_err(|e| {
            ResumeAnalyzerError::Storage(format!(
                "History file {} is corrupt: {}",
                self.path.display(),
                e
            ))
        })
    }

    fn save(&self, history: &HistoryFile) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = serde_json::to_string_pretty(history)?;
        std::fs::write(&self.path, content)?;
        Ok(())
    }
}

impl AnalysisStore for JsonFileStore {
    fn store(
        &mut self,
        filename: &str,
        job_description: &str,
        result: &AnalysisResult,
    ) -> Result<u64> {
        let mut history = self.load()?;

        history.next_id += 1;
        let id = history.next_id;
        history.records.push(AnalysisRecord {
            id,
            filename: filename.to_string(),
            job_description: job_description.to_string(),
            result: result.clone(),
            created_at: Utc::now(),
        });

        self.save(&history)?;
        Ok(id)
    }

    fn get(&self, id: u64) -> Result<Option<AnalysisRecord>> {
        let history = self.load()?;
        Ok(history.records.into_iter().find(|r| r.id == id))
    }

    fn list(&self, limit: usize) -> Result<Vec<AnalysisRecord>> {
        let history = self.load()?;
        Ok(history.records.into_iter().rev().take(limit).collect())
    }

    fn delete(&mut self, id: u64) -> Result<bool> {
        let mut history = self.load()?;
        let before = history.records.len();
        history.records.retain(|r| r.id != id);
        let deleted = history.records.len() < before;

        if deleted {
            self.save(&history)?;
        }
        Ok(deleted)
    }

    fn stats(&self) -> Result<StoreStats> {
        let history = self.load()?;
        Ok(compute_stats(history.records.iter()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::processing::analyzer::ScoreBreakdown;
    use tempfile::tempdir;

    fn result(score: f64) -> AnalysisResult {
        AnalysisResult {
            overall_score: score,
            breakdown: ScoreBreakdown {
                skills: score,
                experience: score,
                education: score,
                format: score,
            },
            matched_skills: vec![],
            missing_skills: vec![],
            recommendations: vec!["Your resume looks good!".to_string()],
        }
    }

    #[test]
    fn test_roundtrip_through_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("history.json");

        let mut store = JsonFileStore::new(&path);
        let id = store.store("resume.pdf", "python job", &result(72.5)).unwrap();

        // A fresh store over the same file sees the record.
        let reopened = JsonFileStore::new(&path);
        let record = reopened.get(id).unwrap().unwrap();
        assert_eq!(record.filename, "resume.pdf");
        assert_eq!(record.result.overall_score, 72.5);
    }

    #[test]
    fn test_missing_file_is_empty_history() {
        let dir = tempdir().unwrap();
        let store = JsonFileStore::new(dir.path().join("absent.json"));

        assert!(store.list(10).unwrap().is_empty());
        assert_eq!(store.stats().unwrap().total, 0);
    }

    #[test]
    fn test_corrupt_file_is_an_error() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("history.json");
        std::fs::write(&path, "not json").unwrap();

        let store = JsonFileStore::new(&path);
        assert!(store.list(10).is_err());
    }

    #[test]
    fn test_delete_and_stats() {
        let dir = tempdir().unwrap();
        let mut store = JsonFileStore::new(dir.path().join("history.json"));

        let first = store.store("a.txt", "job", &result(40.0)).unwrap();
        store.store("b.txt", "job", &result(80.0)).unwrap();

        let stats = store.stats().unwrap();
        assert_eq!(stats.total, 2);
        assert_eq!(stats.average_score, 60.0);

        assert!(store.delete(first).unwrap());
        assert!(!store.delete(first).unwrap());
        assert_eq!(store.stats().unwrap().total, 1);
    }

    #[test]
    fn test_list_order_and_limit() {
        let dir = tempdir().unwrap();
        let mut store = JsonFileStore::new(dir.path().join("history.json"));

        for name in ["a.txt", "b.txt", "c.txt"] {
            store.store(name, "job", &result(50.0)).unwrap();
        }

        let listed = store.list(2).unwrap();
        assert_eq!(listed.len(), 2);
        assert_eq!(listed[0].filename, "c.txt");
        assert_eq!(listed[1].filename, "b.txt");
    }
}
