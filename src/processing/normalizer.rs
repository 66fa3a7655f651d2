//! Text normalization and tokenization

use unicode_segmentation::UnicodeSegmentation;

/// Lowercase copy of the input. Skill matching runs on this form so terms
/// like "c++", "node.js" and "ci/cd" keep their punctuation.
pub fn fold_case(text: &str) -> String {
    text.to_lowercase()
}

/// Lowercase the input, collapse every non-alphanumeric character to a
/// space and squeeze whitespace runs into single spaces.
pub fn normalize(text: &str) -> String {
    let collapsed: String = text
        .to_lowercase()
        .chars()
        .map(|c| if c.is_alphanumeric() { c } else { ' ' })
        .collect();

    collapsed.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Words of the normalized form of `text`.
pub fn tokenize(text: &str) -> Vec<String> {
    normalize(text)
        .unicode_words()
        .map(|w| w.to_string())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_strips_punctuation() {
        assert_eq!(
            normalize("Hello, World! This-is  a test."),
            "hello world this is a test"
        );
    }

    #[test]
    fn test_normalize_empty() {
        assert_eq!(normalize(""), "");
        assert_eq!(normalize("  \t\n  "), "");
        assert_eq!(normalize("!!!"), "");
    }

    #[test]
    fn test_fold_case_keeps_symbols() {
        assert_eq!(fold_case("C++ and Node.js"), "c++ and node.js");
    }

    #[test]
    fn test_tokenize() {
        let tokens = tokenize("Python, AWS & Docker!");
        assert_eq!(tokens, vec!["python", "aws", "docker"]);
    }

    #[test]
    fn test_normalize_deterministic() {
        let text = "Some Input; with Punctuation?";
        assert_eq!(normalize(text), normalize(text));
    }
}
