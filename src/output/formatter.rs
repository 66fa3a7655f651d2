//! Formatters for analysis results

use crate::config::OutputFormat;
use crate::error::Result;
use crate::processing::analyzer::AnalysisResult;
use colored::Colorize;

/// Renders an analysis result into a printable string.
pub trait OutputFormatter {
    fn format_result(&self, result: &AnalysisResult) -> Result<String>;
}

pub fn formatter_for(format: OutputFormat, color_output: bool) -> Box<dyn OutputFormatter> {
    match format {
        OutputFormat::Console => Box::new(ConsoleFormatter {
            use_colors: color_output,
        }),
        OutputFormat::Json => Box::new(JsonFormatter { pretty: true }),
        OutputFormat::Markdown => Box::new(MarkdownFormatter),
    }
}

pub struct ConsoleFormatter {
    pub use_colors: bool,
}

pub struct JsonFormatter {
    pub pretty: bool,
}

pub struct MarkdownFormatter;

impl ConsoleFormatter {
    fn score_line(&self, score: f64) -> String {
        let text = format!("{:.2}%", score);
        if !self.use_colors {
            return text;
        }

        let colored = if score >= 70.0 {
            text.green()
        } else if score >= 50.0 {
            text.yellow()
        } else {
            text.red()
        };
        colored.bold().to_string()
    }

    fn heading(&self, text: &str) -> String {
        if self.use_colors {
            text.cyan().bold().to_string()
        } else {
            text.to_string()
        }
    }
}

impl OutputFormatter for ConsoleFormatter {
    fn format_result(&self, result: &AnalysisResult) -> Result<String> {
        let mut out = String::new();

        out.push_str(&format!(
            "{} {}\n\n",
            self.heading("Overall compatibility:"),
            self.score_line(result.overall_score)
        ));

        out.push_str(&self.heading("Score breakdown\n"));
        out.push_str(&format!("  Skills:     {:>7.2}\n", result.breakdown.skills));
        out.push_str(&format!("  Experience: {:>7.2}\n", result.breakdown.experience));
        out.push_str(&format!("  Education:  {:>7.2}\n", result.breakdown.education));
        out.push_str(&format!("  Format:     {:>7.2}\n\n", result.breakdown.format));

        if !result.matched_skills.is_empty() {
            out.push_str(&self.heading("Matched skills\n"));
            out.push_str(&format!("  {}\n\n", result.matched_skills.join(", ")));
        }

        if !result.missing_skills.is_empty() {
            out.push_str(&self.heading("Missing skills\n"));
            out.push_str(&format!("  {}\n\n", result.missing_skills.join(", ")));
        }

        out.push_str(&self.heading("Recommendations\n"));
        for (idx, recommendation) in result.recommendations.iter().enumerate() {
            out.push_str(&format!("  {}. {}\n", idx + 1, recommendation));
        }

        Ok(out)
    }
}

impl OutputFormatter for JsonFormatter {
    fn format_result(&self, result: &AnalysisResult) -> Result<String> {
        let rendered = if self.pretty {
            serde_json::to_string_pretty(result)?
        } else {
            serde_json::to_string(result)?
        };
        Ok(rendered)
    }
}

impl OutputFormatter for MarkdownFormatter {
    fn format_result(&self, result: &AnalysisResult) -> Result<String> {
        let mut out = String::new();

        out.push_str("# Resume Compatibility Report\n\n");
        out.push_str(&format!("**Overall score:** {:.2}%\n\n", result.overall_score));

        out.push_str("## Score Breakdown\n\n");
        out.push_str("| Category | Score |\n|---|---|\n");
        out.push_str(&format!("| Skills | {:.2} |\n", result.breakdown.skills));
        out.push_str(&format!("| Experience | {:.2} |\n", result.breakdown.experience));
        out.push_str(&format!("| Education | {:.2} |\n", result.breakdown.education));
        out.push_str(&format!("| Format | {:.2} |\n\n", result.breakdown.format));

        if !result.matched_skills.is_empty() {
            out.push_str("## Matched Skills\n\n");
            for skill in &result.matched_skills {
                out.push_str(&format!("- {}\n", skill));
            }
            out.push('\n');
        }

        if !result.missing_skills.is_empty() {
            out.push_str("## Missing Skills\n\n");
            for skill in &result.missing_skills {
                out.push_str(&format!("- {}\n", skill));
            }
            out.push('\n');
        }

        out.push_str("## Recommendations\n\n");
        for (idx, recommendation) in result.recommendations.iter().enumerate() {
            out.push_str(&format!("{}. {}\n", idx + 1, recommendation));
        }

        Ok(out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::processing::analyzer::ScoreBreakdown;

    fn sample_result() -> AnalysisResult {
        AnalysisResult {
            overall_score: 62.5,
            breakdown: ScoreBreakdown {
                skills: 75.0,
                experience: 60.0,
                education: 45.0,
                format: 70.0,
            },
            matched_skills: vec!["aws".to_string(), "python".to_string()],
            missing_skills: vec!["kubernetes".to_string()],
            recommendations: vec!["Good match, but there's room for improvement.".to_string()],
        }
    }

    #[test]
    fn test_console_format_plain() {
        let formatter = ConsoleFormatter { use_colors: false };
        let output = formatter.format_result(&sample_result()).unwrap();

        assert!(output.contains("62.50%"));
        assert!(output.contains("python"));
        assert!(output.contains("kubernetes"));
        assert!(output.contains("1. Good match"));
    }

    #[test]
    fn test_json_format_roundtrips() {
        let formatter = JsonFormatter { pretty: false };
        let output = formatter.format_result(&sample_result()).unwrap();

        let parsed: AnalysisResult = serde_json::from_str(&output).unwrap();
        assert_eq!(parsed, sample_result());
    }

    #[test]
    fn test_markdown_format() {
        let output = MarkdownFormatter.format_result(&sample_result()).unwrap();

        assert!(output.starts_with("# Resume Compatibility Report"));
        assert!(output.contains("| Skills | 75.00 |"));
        assert!(output.contains("- kubernetes"));
    }
}
