//! Recommendation generation from the score and gap set
//!
//! A fixed rule ladder evaluated in order; each rule appends at most one
//! message. The returned list is never empty.

use crate::processing::sections::{Section, SectionMap};
use crate::processing::skills::SkillSet;

/// How many missing skills a recommendation names.
const NAMED_MISSING_SKILLS: usize = 5;

pub fn generate(
    overall_score: f64,
    missing_skills: &SkillSet,
    sections: &SectionMap,
    has_experience_entries: bool,
) -> Vec<String> {
    let mut recommendations = Vec::new();

    if overall_score < 50.0 {
        recommendations.push(
            "Your resume shows low compatibility with this job. Consider tailoring your \
             resume to better highlight relevant skills and experience."
                .to_string(),
        );
    } else if overall_score < 70.0 {
        recommendations.push(
            "Good match, but there's room for improvement. Focus on emphasizing key \
             skills mentioned in the job description."
                .to_string(),
        );
    } else {
        recommendations.push(
            "Excellent match! Your resume aligns well with the job requirements. Make \
             sure to highlight your achievements in these areas."
                .to_string(),
        );
    }

    if !missing_skills.is_empty() {
        let top: Vec<&str> = missing_skills
            .iter()
            .take(NAMED_MISSING_SKILLS)
            .map(|s| s.as_str())
            .collect();
        recommendations.push(format!(
            "Consider adding these in-demand skills: {}. Take online courses or work on \
             projects to develop these competencies.",
            top.join(", ")
        ));
    }

    if !sections.get(&Section::Projects).copied().unwrap_or(false) {
        recommendations.push(
            "Add a Projects section to showcase practical applications of your skills."
                .to_string(),
        );
    }

    if !sections.get(&Section::Certifications).copied().unwrap_or(false) {
        recommendations
            .push("Include relevant certifications to strengthen your profile.".to_string());
    }

    if !has_experience_entries {
        recommendations.push(
            "Add internships, volunteer work, or academic projects to demonstrate experience."
                .to_string(),
        );
    }

    if recommendations.is_empty() {
        recommendations.push("Your resume looks good!".to_string());
    }

    recommendations
}

#[cfg(test)]
mod tests {
    use super::*;

    fn all_sections(present: bool) -> SectionMap {
        Section::ALL.iter().map(|&s| (s, present)).collect()
    }

    #[test]
    fn test_low_score_advice_first() {
        let recs = generate(30.0, &SkillSet::new(), &all_sections(true), true);
        assert!(recs[0].contains("low compatibility"));
    }

    #[test]
    fn test_mid_band_advice() {
        let recs = generate(55.0, &SkillSet::new(), &all_sections(true), true);
        assert!(recs[0].contains("room for improvement"));
    }

    #[test]
    fn test_high_score_advice() {
        let recs = generate(85.0, &SkillSet::new(), &all_sections(true), true);
        assert!(recs[0].contains("Excellent match"));
    }

    #[test]
    fn test_missing_skills_named_in_order() {
        let missing: SkillSet = ["kubernetes", "terraform", "aws"]
            .iter()
            .map(|s| s.to_string())
            .collect();
        let recs = generate(60.0, &missing, &all_sections(true), true);

        let skills_line = recs.iter().find(|r| r.contains("in-demand")).unwrap();
        // Sorted set order: deterministic output.
        assert!(skills_line.contains("aws, kubernetes, terraform"));
    }

    #[test]
    fn test_absent_sections_prompted() {
        let recs = generate(60.0, &SkillSet::new(), &all_sections(false), false);

        assert!(recs.iter().any(|r| r.contains("Projects section")));
        assert!(recs.iter().any(|r| r.contains("certifications")));
        assert!(recs.iter().any(|r| r.contains("internships")));
    }

    #[test]
    fn test_never_empty() {
        let recs = generate(100.0, &SkillSet::new(), &all_sections(true), true);
        assert!(!recs.is_empty());
    }
}
