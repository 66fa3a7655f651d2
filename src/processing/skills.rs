//! Skill extraction against the keyword vocabulary

use crate::config::ExtractionPolicy;
use crate::processing::normalizer;
use crate::processing::vocabulary::Vocabulary;
use std::collections::BTreeSet;

/// Canonical skill terms found in a text. Sorted set so downstream output
/// is deterministic.
pub type SkillSet = BTreeSet<String>;

pub struct SkillExtractor<'a> {
    vocabulary: &'a Vocabulary,
    policy: ExtractionPolicy,
}

impl<'a> SkillExtractor<'a> {
    pub fn new(vocabulary: &'a Vocabulary, policy: ExtractionPolicy) -> Self {
        Self { vocabulary, policy }
    }

    /// Extract the skill set for a resume or job description text.
    ///
    /// Aliases are folded onto canonical spellings in a single pass, then
    /// canonical terms are matched as whole words on the case-folded buffer
    /// (which keeps "c++" and "node.js" matchable), and finally individual
    /// tokens are admitted according to the configured policy.
    pub fn extract(&self, text: &str) -> SkillSet {
        let folded = self.vocabulary.fold_aliases(&normalizer::fold_case(text));

        let mut skills: SkillSet = self
            .vocabulary
            .find_terms(&folded)
            .into_iter()
            .map(|term| term.to_string())
            .collect();

        for word in normalizer::tokenize(&folded) {
            if self.admits(&word) {
                skills.insert(word);
            }
        }

        skills
    }

    /// Token admission test. A plain alphabetic word of three characters or
    /// fewer is never a skill on its own under either policy.
    fn admits(&self, word: &str) -> bool {
        if word.len() <= 3 || !word.chars().all(|c| c.is_alphabetic()) {
            return false;
        }

        match self.policy {
            ExtractionPolicy::Permissive => true,
            ExtractionPolicy::Restrictive => {
                !self.vocabulary.is_skill_stopword(word)
                    && (self.vocabulary.is_term(word) || self.vocabulary.is_likely_tech_term(word))
            }
        }
    }
}
