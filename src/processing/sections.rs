//! Resume section detection and extraction
//!
//! Sections are located by heading-keyword search: a line matching one of the
//! section's heading keywords opens the section, and capture runs until the
//! next Title-Case heading line or the end of the document.

use crate::processing::vocabulary::SECTION_KEYWORDS;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Section {
    Skills,
    Experience,
    Education,
    Projects,
    Certifications,
}

/// Presence map over the five canonical sections.
pub type SectionMap = BTreeMap<Section, bool>;

impl Section {
    pub const ALL: [Section; 5] = [
        Section::Skills,
        Section::Experience,
        Section::Education,
        Section::Projects,
        Section::Certifications,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Section::Skills => "skills",
            Section::Experience => "experience",
            Section::Education => "education",
            Section::Projects => "projects",
            Section::Certifications => "certifications",
        }
    }

    pub fn keywords(self) -> &'static [&'static str] {
        SECTION_KEYWORDS
            .iter()
            .find(|(name, _)| *name == self.name())
            .map(|(_, keywords)| *keywords)
            .unwrap_or(&[])
    }
}

impl std::fmt::Display for Section {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

pub struct SectionExtractor {
    heading_patterns: Vec<(Section, Vec<Regex>)>,
    next_heading: Regex,
    year_range: Regex,
}

impl Default for SectionExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl SectionExtractor {
    pub fn new() -> Self {
        let heading_patterns = Section::ALL
            .iter()
            .map(|&section| {
                let patterns = section
                    .keywords()
                    .iter()
                    .map(|keyword| {
                        Regex::new(&format!(r"(?i){}\s*:?\s*\n", regex::escape(keyword)))
                            .expect("Invalid heading regex")
                    })
                    .collect();
                (section, patterns)
            })
            .collect();

        // Generic Title-Case heading line, deliberately case-sensitive.
        let next_heading =
            Regex::new(r"\n[A-Z][a-z]+\s*:?\s*\n").expect("Invalid next-heading regex");

        let year_range = Regex::new(r"(?i)((?:19|20)\d{2}[\s\-–—]+(?:(?:19|20)\d{2}|present|current))")
            .expect("Invalid year-range regex");

        Self {
            heading_patterns,
            next_heading,
            year_range,
        }
    }

    /// Text of the named section, or `None` when no heading keyword matches.
    /// Callers fall back to scanning the whole document.
    pub fn extract_section(&self, text: &str, section: Section) -> Option<String> {
        let patterns = self
            .heading_patterns
            .iter()
            .find(|(s, _)| *s == section)
            .map(|(_, p)| p)?;

        for pattern in patterns {
            if let Some(heading) = pattern.find(text) {
                let body = &text[heading.end()..];
                let end = self
                    .next_heading
                    .find(body)
                    .map(|m| m.start())
                    .unwrap_or(body.len());
                return Some(body[..end].trim().to_string());
            }
        }

        None
    }

    /// Weak presence test: true when any heading keyword occurs anywhere in
    /// the lowercased text. Used only for the format sub-score.
    pub fn identify_sections(&self, text: &str) -> SectionMap {
        let lowered = text.to_lowercase();

        Section::ALL
            .iter()
            .map(|&section| {
                let present = section.keywords().iter().any(|kw| lowered.contains(kw));
                (section, present)
            })
            .collect()
    }

    /// Year-range mentions ("2019 - 2022", "2020 – present") inside the
    /// experience section, capped at five entries.
    pub fn experience_entries(&self, text: &str) -> Vec<String> {
        let section = match self.extract_section(text, Section::Experience) {
            Some(body) if !body.is_empty() => body,
            _ => return Vec::new(),
        };

        self.year_range
            .captures_iter(&section)
            .take(5)
            .map(|cap| cap[1].to_string())
            .collect()
    }
}
