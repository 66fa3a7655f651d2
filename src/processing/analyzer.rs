//! Main analysis engine combining skill matching, section heuristics and
//! the configured similarity strategy

use crate::config::Config;
use crate::error::{Result, ResumeAnalyzerError};
use crate::processing::normalizer;
use crate::processing::recommendations;
use crate::processing::scorer::{self, ScoringInput, ScoringStrategy};
use crate::processing::sections::{Section, SectionExtractor, SectionMap};
use crate::processing::skills::SkillExtractor;
use crate::processing::vocabulary::{
    Vocabulary, ACTION_VERBS, DEGREE_KEYWORDS, DEGREE_LEVELS, JOB_TITLE_WORDS,
};
use regex::Regex;
use serde::{Deserialize, Serialize};

/// Per-category sub-scores, each clamped to [0, 100].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreBreakdown {
    pub skills: f64,
    pub experience: f64,
    pub education: f64,
    pub format: f64,
}

impl ScoreBreakdown {
    /// Arithmetic mean of the four components, rounded to two decimals.
    pub fn overall(&self) -> f64 {
        round2((self.skills + self.experience + self.education + self.format) / 4.0)
    }
}

/// The outcome of one analysis request. Immutable once built; owned by the
/// caller for printing or persistence.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisResult {
    pub overall_score: f64,
    pub breakdown: ScoreBreakdown,
    pub matched_skills: Vec<String>,
    pub missing_skills: Vec<String>,
    pub recommendations: Vec<String>,
}

/// Format sub-score weights per detected section. The four structural
/// sections sum to 100; certifications is a bonus and the total saturates.
const FORMAT_WEIGHTS: &[(Section, f64)] = &[
    (Section::Skills, 30.0),
    (Section::Experience, 30.0),
    (Section::Education, 25.0),
    (Section::Projects, 15.0),
    (Section::Certifications, 10.0),
];

/// Resume/job compatibility analyzer.
///
/// Construction builds the vocabulary tables and matchers once; `analyze`
/// itself is a pure function of its two inputs, so one analyzer can be
/// shared across threads.
pub struct ResumeAnalyzer {
    config: Config,
    vocabulary: Vocabulary,
    sections: SectionExtractor,
    strategy: Box<dyn ScoringStrategy>,
    years_pattern: Regex,
}

impl ResumeAnalyzer {
    pub fn new(config: Config) -> Result<Self> {
        let vocabulary = Vocabulary::builtin()?;
        let strategy = scorer::strategy_for(&config.scoring);
        let years_pattern =
            Regex::new(r"(\d+)\+?\s*(?:years?|yrs?)").expect("Invalid years regex");

        Ok(Self {
            config,
            vocabulary,
            sections: SectionExtractor::new(),
            strategy,
            years_pattern,
        })
    }

    pub fn with_defaults() -> Result<Self> {
        Self::new(Config::default())
    }

    /// Analyze a resume against a job description.
    ///
    /// Deterministic: identical inputs produce identical results.
    pub fn analyze(&self, resume_text: &str, job_description: &str) -> Result<AnalysisResult> {
        if resume_text.trim().is_empty() {
            return Err(ResumeAnalyzerError::InvalidInput(
                "Resume text is empty".to_string(),
            ));
        }
        if job_description.trim().is_empty() {
            return Err(ResumeAnalyzerError::InvalidInput(
                "Job description is empty".to_string(),
            ));
        }

        let extractor = SkillExtractor::new(&self.vocabulary, self.config.extraction.policy);
        let resume_skills = extractor.extract(resume_text);
        let job_skills = extractor.extract(job_description);
        let skill_match = scorer::match_skills(&resume_skills, &job_skills, &self.vocabulary);

        let resume_normalized = normalizer::normalize(resume_text);
        let job_normalized = normalizer::normalize(job_description);

        let skills_score = self
            .strategy
            .score(&ScoringInput {
                resume_text: &resume_normalized,
                job_text: &job_normalized,
                job_skills: &job_skills,
                skill_match: &skill_match,
            })
            .clamp(0.0, 100.0);

        let section_map = self.sections.identify_sections(resume_text);
        let experience_entries = self.sections.experience_entries(resume_text);

        let resume_lower = normalizer::fold_case(resume_text);
        let job_lower = normalizer::fold_case(job_description);

        let breakdown = ScoreBreakdown {
            skills: round2(skills_score),
            experience: round2(self.experience_score(resume_text, &resume_lower)),
            education: round2(self.education_score(&resume_lower, &job_lower)),
            format: round2(format_score(&section_map)),
        };
        let overall_score = breakdown.overall();

        let matched_skills: Vec<String> = skill_match
            .matched
            .iter()
            .take(self.config.extraction.matched_cap)
            .cloned()
            .collect();
        let missing_skills: Vec<String> = skill_match
            .missing
            .iter()
            .take(self.config.extraction.missing_cap)
            .cloned()
            .collect();

        let recommendations = recommendations::generate(
            overall_score,
            &skill_match.missing,
            &section_map,
            !experience_entries.is_empty(),
        );

        Ok(AnalysisResult {
            overall_score,
            breakdown,
            matched_skills,
            missing_skills,
            recommendations,
        })
    }

    /// Experience heuristic: section presence and substance, distinct
    /// job-title words, distinct action verbs, and years-of-experience
    /// mentions.
    fn experience_score(&self, resume_text: &str, resume_lower: &str) -> f64 {
        let mut score = 0.0;

        if let Some(body) = self.sections.extract_section(resume_text, Section::Experience) {
            if !body.is_empty() {
                score += 20.0;
                if body.chars().count() > self.config.scoring.experience_substance_chars {
                    score += 10.0;
                }
            }
        }

        let titles = JOB_TITLE_WORDS
            .iter()
            .filter(|word| resume_lower.contains(*word))
            .count() as f64;
        score += (titles * 10.0).min(30.0);

        let actions = ACTION_VERBS
            .iter()
            .filter(|verb| resume_lower.contains(*verb))
            .count() as f64;
        score += (actions * 5.0).min(20.0);

        let total_years: u64 = self
            .years_pattern
            .captures_iter(resume_lower)
            .filter_map(|cap| cap[1].parse::<u64>().ok())
            .sum();
        if total_years >= 2 {
            score += 20.0;
        }

        score.clamp(0.0, 100.0)
    }

    /// Education heuristic: credit per degree keyword, with a bonus when a
    /// degree level is named by both resume and job description.
    fn education_score(&self, resume_lower: &str, job_lower: &str) -> f64 {
        let keywords = DEGREE_KEYWORDS
            .iter()
            .filter(|kw| resume_lower.contains(*kw))
            .count() as f64;
        let mut score = keywords * 15.0;

        let level_match = DEGREE_LEVELS
            .iter()
            .any(|level| resume_lower.contains(*level) && job_lower.contains(*level));
        if level_match {
            score += 10.0;
        }

        score.clamp(0.0, 100.0)
    }
}

fn format_score(sections: &SectionMap) -> f64 {
    let total: f64 = FORMAT_WEIGHTS
        .iter()
        .filter(|(section, _)| sections.get(section).copied().unwrap_or(false))
        .map(|(_, weight)| weight)
        .sum();

    total.min(100.0)
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;

    const RESUME: &str = "John Doe\n\nSkills:\nPython, AWS, Docker\n\nExperience:\nSoftware Engineer at Acme, 2019 - 2022\nDeveloped and built cloud services over 3 years\n\nEducation:\nBachelor of Science in Computer Science\n";
    const JOB: &str = "Looking for Python engineer with AWS, Docker, Kubernetes experience. Bachelor's required.";

    fn analyzer() -> ResumeAnalyzer {
        ResumeAnalyzer::with_defaults().unwrap()
    }

    #[test]
    fn test_analyze_scenario_scores() {
        let result = analyzer().analyze(RESUME, JOB).unwrap();

        assert!(result.matched_skills.contains(&"python".to_string()));
        assert!(result.matched_skills.contains(&"aws".to_string()));
        assert!(result.matched_skills.contains(&"docker".to_string()));
        assert!(result.missing_skills.contains(&"kubernetes".to_string()));
        assert!((result.breakdown.skills - 75.0).abs() < f64::EPSILON);
        assert!(result.breakdown.education > 0.0);
    }

    #[test]
    fn test_overall_score_in_range() {
        let result = analyzer().analyze(RESUME, JOB).unwrap();
        assert!((0.0..=100.0).contains(&result.overall_score));
        for component in [
            result.breakdown.skills,
            result.breakdown.experience,
            result.breakdown.education,
            result.breakdown.format,
        ] {
            assert!((0.0..=100.0).contains(&component));
        }
    }

    #[test]
    fn test_identical_texts_full_skills_score() {
        let result = analyzer().analyze(RESUME, RESUME).unwrap();
        assert!((result.breakdown.skills - 100.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_empty_job_skill_set_defaults_neutral() {
        let job = "We want a wonderful colleague who enjoys collaborative office mornings.";
        let result = analyzer().analyze(RESUME, job).unwrap();
        assert!((result.breakdown.skills - 50.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_matched_and_missing_disjoint() {
        let result = analyzer().analyze(RESUME, JOB).unwrap();
        for skill in &result.matched_skills {
            assert!(!result.missing_skills.contains(skill));
        }
    }

    #[test]
    fn test_recommendations_never_empty() {
        let result = analyzer().analyze("python", "python").unwrap();
        assert!(!result.recommendations.is_empty());
    }

    #[test]
    fn test_sectionless_resume_format_zero() {
        let resume = "python aws docker kubernetes terraform";
        let job = "python aws";
        let result = analyzer().analyze(resume, job).unwrap();

        assert!((result.breakdown.format - 0.0).abs() < f64::EPSILON);
        assert!(result
            .recommendations
            .iter()
            .any(|r| r.contains("Projects section")));
        assert!(result
            .recommendations
            .iter()
            .any(|r| r.contains("certifications")));
    }

    #[test]
    fn test_analyze_idempotent() {
        let engine = analyzer();
        let first = engine.analyze(RESUME, JOB).unwrap();
        let second = engine.analyze(RESUME, JOB).unwrap();
        assert_eq!(first, second);
        assert_eq!(
            first.overall_score.to_bits(),
            second.overall_score.to_bits()
        );
    }

    #[test]
    fn test_empty_inputs_rejected() {
        let engine = analyzer();
        assert!(engine.analyze("", JOB).is_err());
        assert!(engine.analyze(RESUME, "   \n").is_err());
    }

    #[test]
    fn test_experience_score_components() {
        let engine = analyzer();
        // Section present and substantial, titles, verbs and years all hit.
        let resume = "Experience:\nSenior Engineer and developer, 5 years.\nDeveloped, built, implemented, designed and led multiple backend initiatives across distributed platform teams with measurable outcomes.\n";
        let score = engine.experience_score(resume, &normalizer::fold_case(resume));
        assert!(score > 50.0);
        assert!(score <= 100.0);

        let empty = engine.experience_score("nothing here", "nothing here");
        assert!((empty - 0.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_education_level_bonus() {
        let engine = analyzer();
        let with_bonus =
            engine.education_score("master degree from university", "master level role");
        let without_bonus =
            engine.education_score("master degree from university", "no requirements");
        assert!((with_bonus - without_bonus - 10.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_format_score_saturates() {
        let all_present: SectionMap = Section::ALL.iter().map(|&s| (s, true)).collect();
        assert!((format_score(&all_present) - 100.0).abs() < f64::EPSILON);

        let none_present: SectionMap = Section::ALL.iter().map(|&s| (s, false)).collect();
        assert!((format_score(&none_present) - 0.0).abs() < f64::EPSILON);
    }
}
