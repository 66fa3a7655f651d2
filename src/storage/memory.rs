//! In-memory analysis store

use crate::error::Result;
use crate::processing::analyzer::AnalysisResult;
use crate::storage::{compute_stats, AnalysisRecord, AnalysisStore, StoreStats};
use chrono::Utc;
use std::collections::BTreeMap;

#[derive(Debug, Default)]
pub struct MemoryStore {
    records: BTreeMap<u64, AnalysisRecord>,
    next_id: u64,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl AnalysisStore for MemoryStore {
    fn store(
        &mut self,
        filename: &str,
        job_description: &str,
        result: &AnalysisResult,
    ) -> Result<u64> {
        self.next_id += 1;
        let id = self.next_id;

        self.records.insert(
            id,
            AnalysisRecord {
                id,
                filename: filename.to_string(),
                job_description: job_description.to_string(),
                result: result.clone(),
                created_at: Utc::now(),
            },
        );

        Ok(id)
    }

    fn get(&self, id: u64) -> Result<Option<AnalysisRecord>> {
        Ok(self.records.get(&id).cloned())
    }

    fn list(&self, limit: usize) -> Result<Vec<AnalysisRecord>> {
        Ok(self
            .records
            .values()
            .rev()
            .take(limit)
            .cloned()
            .collect())
    }

    fn delete(&mut self, id: u64) -> Result<bool> {
        Ok(self.records.remove(&id).is_some())
    }

    fn stats(&self) -> Result<StoreStats> {
        Ok(compute_stats(self.records.values()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::processing::analyzer::ScoreBreakdown;

    fn result(score: f64) -> AnalysisResult {
        AnalysisResult {
            overall_score: score,
            breakdown: ScoreBreakdown {
                skills: score,
                experience: score,
                education: score,
                format: score,
            },
            matched_skills: vec!["python".to_string()],
            missing_skills: vec![],
            recommendations: vec!["Your resume looks good!".to_string()],
        }
    }

    #[test]
    fn test_store_and_get() {
        let mut store = MemoryStore::new();
        let id = store.store("resume.pdf", "python role", &result(80.0)).unwrap();

        let record = store.get(id).unwrap().unwrap();
        assert_eq!(record.filename, "resume.pdf");
        assert_eq!(record.result.overall_score, 80.0);

        assert!(store.get(id + 1).unwrap().is_none());
    }

    #[test]
    fn test_list_most_recent_first() {
        let mut store = MemoryStore::new();
        let first = store.store("a.txt", "job", &result(10.0)).unwrap();
        let second = store.store("b.txt", "job", &result(20.0)).unwrap();

        let listed = store.list(10).unwrap();
        assert_eq!(listed.len(), 2);
        assert_eq!(listed[0].id, second);
        assert_eq!(listed[1].id, first);

        assert_eq!(store.list(1).unwrap().len(), 1);
    }

    #[test]
    fn test_delete() {
        let mut store = MemoryStore::new();
        let id = store.store("a.txt", "job", &result(50.0)).unwrap();

        assert!(store.delete(id).unwrap());
        assert!(!store.delete(id).unwrap());
        assert!(store.get(id).unwrap().is_none());
    }

    #[test]
    fn test_stats() {
        let mut store = MemoryStore::new();
        assert_eq!(store.stats().unwrap().total, 0);

        store.store("a.txt", "job", &result(40.0)).unwrap();
        store.store("b.txt", "job", &result(60.0)).unwrap();

        let stats = store.stats().unwrap();
        assert_eq!(stats.total, 2);
        assert_eq!(stats.average_score, 50.0);
        assert_eq!(stats.highest_score, 60.0);
        assert_eq!(stats.lowest_score, 40.0);
    }

    #[test]
    fn test_ids_not_reused_after_delete() {
        let mut store = MemoryStore::new();
        let first = store.store("a.txt", "job", &result(50.0)).unwrap();
        store.delete(first).unwrap();
        let second = store.store("b.txt", "job", &result(50.0)).unwrap();
        assert!(second > first);
    }
}
