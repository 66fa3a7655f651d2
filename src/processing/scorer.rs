//! Similarity scoring between resume and job description
//!
//! Two interchangeable strategies behind one trait: lexical set-overlap of
//! extracted skills, and tf-idf weighted cosine similarity over the
//! normalized texts. Both are deterministic for identical input.

use crate::config::{ScoringConfig, ScoringStrategyKind};
use crate::processing::skills::SkillSet;
use crate::processing::vocabulary::Vocabulary;
use std::collections::BTreeMap;

/// Matched and missing job-required skills.
#[derive(Debug, Clone, PartialEq)]
pub struct SkillMatch {
    pub matched: SkillSet,
    pub missing: SkillSet,
}

/// Compare extracted skill sets, crediting a job requirement as matched when
/// the resume holds any of its related substitute terms (single hop).
pub fn match_skills(resume: &SkillSet, job: &SkillSet, vocabulary: &Vocabulary) -> SkillMatch {
    let mut matched: SkillSet = resume.intersection(job).cloned().collect();

    for job_skill in job {
        if matched.contains(job_skill) {
            continue;
        }
        if let Some(related) = vocabulary.related_terms(job_skill) {
            if related.iter().any(|term| resume.contains(*term)) {
                matched.insert(job_skill.clone());
            }
        }
    }

    let missing = job.difference(&matched).cloned().collect();

    SkillMatch { matched, missing }
}

/// Everything a strategy may look at. Texts are in normalized form.
pub struct ScoringInput<'a> {
    pub resume_text: &'a str,
    pub job_text: &'a str,
    pub job_skills: &'a SkillSet,
    pub skill_match: &'a SkillMatch,
}

/// A similarity strategy maps the input pair to a score in [0, 100].
pub trait ScoringStrategy: Send + Sync {
    fn name(&self) -> &'static str;
    fn score(&self, input: &ScoringInput<'_>) -> f64;
}

pub fn strategy_for(config: &ScoringConfig) -> Box<dyn ScoringStrategy> {
    match config.strategy {
        ScoringStrategyKind::Overlap => Box::new(OverlapStrategy),
        ScoringStrategyKind::Tfidf => Box::new(TfidfStrategy {
            max_features: config.max_features,
        }),
    }
}

/// Set-overlap scoring: share of job-required skills satisfied by the
/// resume. An empty job skill set scores a neutral 50 instead of dividing
/// by zero.
pub struct OverlapStrategy;

impl ScoringStrategy for OverlapStrategy {
    fn name(&self) -> &'static str {
        "overlap"
    }

    fn score(&self, input: &ScoringInput<'_>) -> f64 {
        if input.job_skills.is_empty() {
            return 50.0;
        }

        let ratio = input.skill_match.matched.len() as f64 / input.job_skills.len() as f64;
        (ratio * 100.0).min(100.0)
    }
}

/// Tf-idf weighted cosine similarity over unigrams and bigrams of the two
/// normalized texts. Degenerate corpora (no informative terms, zero vector)
/// score 0 rather than erroring.
pub struct TfidfStrategy {
    pub max_features: usize,
}

impl ScoringStrategy for TfidfStrategy {
    fn name(&self) -> &'static str {
        "tfidf"
    }

    fn score(&self, input: &ScoringInput<'_>) -> f64 {
        let similarity = cosine_similarity(input.resume_text, input.job_text, self.max_features);
        (similarity * 100.0).clamp(0.0, 100.0)
    }
}

fn ngram_counts(text: &str) -> BTreeMap<String, usize> {
    let vocabulary = english_filter(text);
    let mut counts = BTreeMap::new();

    for token in &vocabulary {
        *counts.entry(token.clone()).or_insert(0) += 1;
    }
    for pair in vocabulary.windows(2) {
        *counts.entry(format!("{} {}", pair[0], pair[1])).or_insert(0) += 1;
    }

    counts
}

fn english_filter(text: &str) -> Vec<String> {
    // Static table lookup, cheaper than building a Vocabulary here.
    use crate::processing::vocabulary::ENGLISH_STOPWORDS;

    text.split_whitespace()
        .filter(|token| !ENGLISH_STOPWORDS.contains(token))
        .map(|token| token.to_string())
        .collect()
}

fn cosine_similarity(doc_a: &str, doc_b: &str, max_features: usize) -> f64 {
    let counts_a = ngram_counts(doc_a);
    let counts_b = ngram_counts(doc_b);

    if counts_a.is_empty() || counts_b.is_empty() {
        return 0.0;
    }

    // Corpus vocabulary capped to the most frequent terms; ties broken
    // lexicographically so the cap is deterministic.
    let mut corpus: BTreeMap<&str, usize> = BTreeMap::new();
    for (term, count) in counts_a.iter().chain(counts_b.iter()) {
        *corpus.entry(term.as_str()).or_insert(0) += count;
    }
    let mut terms: Vec<(&str, usize)> = corpus.into_iter().collect();
    terms.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(b.0)));
    terms.truncate(max_features);

    let doc_count = 2.0_f64;
    let mut dot = 0.0;
    let mut norm_a = 0.0;
    let mut norm_b = 0.0;

    for (term, _) in &terms {
        let tf_a = *counts_a.get(*term).unwrap_or(&0) as f64;
        let tf_b = *counts_b.get(*term).unwrap_or(&0) as f64;

        let df = (tf_a > 0.0) as u8 as f64 + (tf_b > 0.0) as u8 as f64;
        // Smoothed idf, the scikit-learn formulation.
        let idf = ((doc_count + 1.0) / (df + 1.0)).ln() + 1.0;

        let weight_a = tf_a * idf;
        let weight_b = tf_b * idf;

        dot += weight_a * weight_b;
        norm_a += weight_a * weight_a;
        norm_b += weight_b * weight_b;
    }

    if norm_a == 0.0 || norm_b == 0.0 {
        return 0.0;
    }

    dot / (norm_a.sqrt() * norm_b.sqrt())
}
