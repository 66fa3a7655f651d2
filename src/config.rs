//! Configuration management for the resume analyzer

use crate::error::{Result, ResumeAnalyzerError};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub scoring: ScoringConfig,
    pub extraction: ExtractionConfig,
    pub input: InputConfig,
    pub storage: StorageConfig,
    pub output: OutputConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoringConfig {
    /// Which similarity strategy feeds the skills sub-score
    pub strategy: ScoringStrategyKind,
    /// Vocabulary cap for the tfidf strategy
    pub max_features: usize,
    /// Minimum character count before an experience section counts as substantial
    pub experience_substance_chars: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScoringStrategyKind {
    Overlap,
    Tfidf,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExtractionConfig {
    pub policy: ExtractionPolicy,
    /// Cap on the matched_skills list in results
    pub matched_cap: usize,
    /// Cap on the missing_skills list in results
    pub missing_cap: usize,
}

/// Token admission policy for the skill extractor.
///
/// Restrictive admits only vocabulary terms and technical-pattern words and
/// is the production default; permissive admits any alphabetic word longer
/// than three characters and exists for compatibility with older deployments.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExtractionPolicy {
    Restrictive,
    Permissive,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InputConfig {
    /// Files larger than this are rejected before extraction
    pub max_input_bytes: u64,
    pub enable_caching: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StorageConfig {
    /// Path of the JSON history file
    pub history_path: PathBuf,
    /// Records returned by `history` when no limit is given
    pub default_list_limit: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    pub format: OutputFormat,
    pub color_output: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    Console,
    Json,
    Markdown,
}

impl Default for Config {
    fn default() -> Self {
        let history_path = dirs::data_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("resume-analyzer")
            .join("history.json");

        Self {
            scoring: ScoringConfig {
                strategy: ScoringStrategyKind::Overlap,
                max_features: 500,
                experience_substance_chars: 200,
            },
            extraction: ExtractionConfig {
                policy: ExtractionPolicy::Restrictive,
                matched_cap: 20,
                missing_cap: 10,
            },
            input: InputConfig {
                max_input_bytes: 5 * 1024 * 1024,
                enable_caching: true,
            },
            storage: StorageConfig {
                history_path,
                default_list_limit: 50,
            },
            output: OutputConfig {
                format: OutputFormat::Console,
                color_output: true,
            },
        }
    }
}

impl Config {
    pub fn load() -> Result<Self> {
        let config_path = Self::config_path();

        if config_path.exists() {
            let content = std::fs::read_to_string(&config_path)?;
            let config: Config = toml::from_str(&content).map_err(|e| {
                ResumeAnalyzerError::Configuration(format!("Failed to parse config: {}", e))
            })?;
            Ok(config)
        } else {
            let config = Self::default();
            config.save()?;
            Ok(config)
        }
    }

    pub fn save(&self) -> Result<()> {
        let config_path = Self::config_path();

        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = toml::to_string_pretty(self).map_err(|e| {
            ResumeAnalyzerError::Configuration(format!("Failed to serialize config: {}", e))
        })?;

        std::fs::write(&config_path, content)?;
        Ok(())
    }

    pub fn config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| dirs::home_dir().unwrap_or_else(|| PathBuf::from(".")))
            .join("resume-analyzer")
            .join("config.toml")
    }

    pub fn reset() -> Result<Self> {
        let config = Self::default();
        config.save()?;
        Ok(config)
    }
}
