//! Immutable keyword vocabulary shared by the analysis pipeline
//!
//! Canonical skill terms, alias folding, related-skill substitution and the
//! auxiliary keyword tables used by the sub-scores. Built once at analyzer
//! initialization and read-only afterwards, so it can be shared freely
//! across concurrent analyses.

use crate::error::{Result, ResumeAnalyzerError};
use aho_corasick::{AhoCorasick, MatchKind};
use std::collections::{HashMap, HashSet};

/// Canonical technology and skill terms recognized by the extractor.
const TECH_KEYWORDS: &[&str] = &[
    // Programming languages
    "python", "java", "javascript", "typescript", "c++", "c#", "c", "ruby", "go", "golang",
    "php", "swift", "kotlin", "rust", "scala", "perl", "r", "matlab", "dart", "objective-c",
    "bash", "shell", "powershell",
    // Web frontend
    "react", "angular", "vue", "svelte", "jquery", "html", "html5", "css", "css3", "sass",
    "scss", "less", "bootstrap", "tailwind", "material-ui", "styled-components",
    // Backend frameworks
    "node", "nodejs", "express", "django", "flask", "fastapi", "spring", "spring boot",
    "asp.net", ".net", "dotnet", "rails", "laravel", "symfony", "nestjs", "nextjs", "nuxt",
    // Databases
    "sql", "mysql", "postgresql", "postgres", "mongodb", "redis", "oracle", "sql server",
    "sqlite", "firebase", "dynamodb", "cassandra", "elasticsearch", "neo4j", "mariadb",
    "couchdb", "snowflake", "bigquery", "redshift",
    // Cloud platforms
    "aws", "amazon web services", "azure", "microsoft azure", "gcp", "google cloud",
    "heroku", "digitalocean", "netlify", "vercel", "cloudflare",
    // Cloud services
    "ec2", "s3", "lambda", "rds", "cloudformation", "elastic beanstalk", "ecs", "eks",
    "cloud functions", "app engine", "cloud run",
    // DevOps and CI/CD
    "docker", "kubernetes", "k8s", "jenkins", "ci/cd", "gitlab ci", "github actions",
    "circleci", "travis ci", "terraform", "ansible", "puppet", "chef", "vagrant",
    "prometheus", "grafana", "datadog", "splunk",
    // Testing
    "junit", "mockito", "selenium", "jest", "mocha", "chai", "pytest", "unittest",
    "testng", "cypress", "playwright", "puppeteer", "jasmine", "karma", "tdd", "bdd",
    "testing",
    // Mobile
    "android", "ios", "flutter", "react native", "xamarin", "cordova", "ionic", "swiftui",
    "android studio", "xcode",
    // Methodologies
    "agile", "scrum", "kanban", "waterfall", "devops", "sdlc", "oop",
    "functional programming", "design patterns", "solid", "clean code", "code review",
    "pair programming",
    // Version control
    "git", "github", "gitlab", "bitbucket", "svn", "mercurial", "version control",
    // Architecture and APIs
    "microservices", "rest", "restful", "api", "graphql", "soap", "grpc", "websocket",
    "serverless", "event-driven", "mvc", "mvvm", "soa", "monolith",
    // Data science and ML
    "machine learning", "ml", "ai", "artificial intelligence", "deep learning",
    "neural networks", "data science", "pandas", "numpy", "scikit-learn", "sklearn",
    "tensorflow", "pytorch", "keras", "opencv", "nlp", "computer vision", "data analysis",
    "statistics",
    // Big data
    "hadoop", "spark", "kafka", "airflow", "databricks", "hive", "flink",
    // Collaboration tooling
    "jira", "confluence", "trello", "asana", "slack", "notion",
    // Build tools
    "webpack", "vite", "rollup", "parcel", "maven", "gradle", "npm", "yarn", "pip",
    // ORM and data access
    "hibernate", "sequelize", "prisma", "typeorm", "mongoose", "sqlalchemy",
    // Security
    "oauth", "jwt", "ssl", "tls", "encryption", "authentication", "authorization",
    // Other tools
    "linux", "unix", "windows", "macos", "vim", "vscode", "intellij", "eclipse",
    "postman", "swagger", "ajax", "json", "xml", "yaml", "regex", "rabbitmq", "celery",
    "nginx", "apache", "tomcat", "gunicorn", "uvicorn",
];

/// Informal aliases folded onto their canonical spelling before matching.
const SYNONYMS: &[(&str, &str)] = &[
    ("js", "javascript"),
    ("ts", "typescript"),
    ("k8s", "kubernetes"),
    ("ml", "machine learning"),
    ("restful", "rest"),
    ("springboot", "spring boot"),
    ("react.js", "react"),
    ("node.js", "node"),
    ("vue.js", "vue"),
    ("angular.js", "angular"),
];

/// Substitutability relation: a job-required term (key) counts as satisfied
/// when the resume contains any of the listed terms. One hop only, no
/// transitive closure.
const RELATED_SKILLS: &[(&str, &[&str])] = &[
    ("tdd", &["junit", "mockito", "testing", "pytest", "jest", "unittest", "testng", "cypress"]),
    ("test driven development", &["tdd", "junit", "mockito", "pytest", "testing"]),
    ("unit testing", &["junit", "mockito", "pytest", "jest", "unittest", "testing"]),
    ("rest", &["api", "restful", "rest api", "web services"]),
    ("restful", &["rest", "api", "rest api"]),
    ("web services", &["rest", "soap", "api", "restful"]),
    ("soap", &["web services", "api"]),
    ("mobile", &["ios", "android", "swift", "kotlin", "flutter", "react native"]),
    ("mobile development", &["ios", "android", "swift", "kotlin", "flutter"]),
    ("cloud", &["aws", "azure", "gcp", "cloud computing"]),
    ("devops", &["docker", "kubernetes", "jenkins", "ci/cd", "terraform"]),
    ("ci/cd", &["jenkins", "gitlab ci", "github actions", "circleci", "travis ci"]),
    ("agile", &["scrum", "kanban", "agile methodologies"]),
    ("scrum", &["agile", "scrum master", "sprint"]),
    ("backend", &["node", "django", "flask", "spring", "express", "api"]),
    ("frontend", &["react", "angular", "vue", "javascript", "html", "css"]),
    ("fullstack", &["frontend", "backend", "react", "node", "javascript"]),
    ("full stack", &["frontend", "backend", "fullstack"]),
    ("database", &["sql", "mysql", "postgresql", "mongodb", "oracle"]),
    ("sql", &["mysql", "postgresql", "sql server", "oracle", "database"]),
    ("nosql", &["mongodb", "redis", "cassandra", "dynamodb"]),
    ("javascript", &["js", "node", "react", "angular", "vue"]),
    ("java", &["spring", "spring boot", "hibernate", "maven", "gradle"]),
    ("python", &["django", "flask", "pandas", "numpy"]),
    ("oop", &["object oriented", "java", "c++", "c#", "python"]),
    ("object oriented", &["oop", "java", "c++", "c#"]),
];

/// Common resume/job-posting words that are never skills on their own.
const SKILL_STOPWORDS: &[&str] = &[
    "with", "their", "including", "team", "experience", "requirements", "skills",
    "engineering", "applications", "cross", "methodologies", "results", "problems",
    "driven", "post", "reviews", "applying", "various", "solving", "coding", "units",
    "work", "years", "using", "strong", "good", "excellent", "ability", "knowledge",
    "understanding", "developing", "developed", "design", "implementation", "system",
];

/// Substring markers that flag a token as a likely technical term.
const TECH_MARKERS: &[&str] = &["sql", "api", "sdk", "cli", "ide", "orm", "mvc", "aws", "gcp"];

/// Heading keywords per resume section, in detection order.
pub const SECTION_KEYWORDS: &[(&str, &[&str])] = &[
    ("education", &["education", "academic", "qualification", "degree"]),
    ("experience", &["experience", "employment", "work history", "professional experience"]),
    ("skills", &["skills", "technical skills", "competencies", "expertise"]),
    ("projects", &["projects", "personal projects", "academic projects"]),
    ("certifications", &["certifications", "certificates", "licenses"]),
];

/// Degree keywords credited by the education sub-score.
pub const DEGREE_KEYWORDS: &[&str] =
    &["bachelor", "master", "phd", "degree", "university", "college"];

/// Degree levels compared between resume and job description.
pub const DEGREE_LEVELS: &[&str] = &["bachelor", "master", "phd"];

/// Job-title words credited by the experience sub-score.
pub const JOB_TITLE_WORDS: &[&str] =
    &["engineer", "developer", "intern", "analyst", "consultant", "architect"];

/// Action verbs credited by the experience sub-score.
pub const ACTION_VERBS: &[&str] =
    &["developed", "built", "implemented", "designed", "led", "managed", "created"];

/// General English stop words removed by the tfidf strategy.
pub const ENGLISH_STOPWORDS: &[&str] = &[
    "a", "an", "and", "are", "as", "at", "be", "by", "for", "from", "has", "he", "in",
    "is", "it", "its", "of", "on", "or", "that", "the", "to", "was", "were", "will",
    "with", "this", "they", "but", "have", "had", "what", "when", "where", "who",
    "which", "why", "how", "all", "each", "every", "both", "few", "more", "most",
    "other", "some", "such", "no", "nor", "not", "only", "own", "same", "so", "than",
    "too", "very", "can", "just", "should", "now", "also", "been", "being", "do",
    "does", "did", "doing", "would", "could", "might", "must", "shall", "about",
    "above", "after", "again", "against", "am", "any", "before", "below", "between",
    "into", "through", "during", "out", "over", "under", "up", "down", "then", "once",
    "here", "there", "if", "else", "while", "because", "until", "we", "you", "your",
    "our", "their", "him", "her", "them", "me", "my", "myself", "itself", "those",
    "these", "his", "she", "i",
];

/// Immutable vocabulary tables plus the matchers built over them.
pub struct Vocabulary {
    terms: HashSet<String>,
    term_matcher: AhoCorasick,
    term_patterns: Vec<String>,
    alias_matcher: AhoCorasick,
    alias_replacements: Vec<&'static str>,
    related: HashMap<&'static str, &'static [&'static str]>,
    skill_stopwords: HashSet<&'static str>,
    english_stopwords: HashSet<&'static str>,
}

impl Vocabulary {
    /// Build the built-in vocabulary. Called once per analyzer.
    pub fn builtin() -> Result<Self> {
        let mut term_patterns: Vec<String> = TECH_KEYWORDS.iter().map(|s| s.to_string()).collect();
        term_patterns.sort();
        term_patterns.dedup();

        // Overlapping search requires the standard match kind; word
        // boundaries are checked by the caller per match.
        let term_matcher = AhoCorasick::builder()
            .match_kind(MatchKind::Standard)
            .build(&term_patterns)
            .map_err(|e| {
                ResumeAnalyzerError::Processing(format!("Failed to build term matcher: {}", e))
            })?;

        // Leftmost-longest makes alias folding a single simultaneous pass:
        // replaced output is never rescanned, so substitutions cannot cascade.
        let alias_patterns: Vec<&str> = SYNONYMS.iter().map(|(alias, _)| *alias).collect();
        let alias_replacements: Vec<&'static str> =
            SYNONYMS.iter().map(|(_, canonical)| *canonical).collect();
        let alias_matcher = AhoCorasick::builder()
            .match_kind(MatchKind::LeftmostLongest)
            .build(&alias_patterns)
            .map_err(|e| {
                ResumeAnalyzerError::Processing(format!("Failed to build alias matcher: {}", e))
            })?;

        Ok(Self {
            terms: term_patterns.iter().cloned().collect(),
            term_matcher,
            term_patterns,
            alias_matcher,
            alias_replacements,
            related: RELATED_SKILLS.iter().copied().collect(),
            skill_stopwords: SKILL_STOPWORDS.iter().copied().collect(),
            english_stopwords: ENGLISH_STOPWORDS.iter().copied().collect(),
        })
    }

    /// Whether `word` is a canonical vocabulary term.
    pub fn is_term(&self, word: &str) -> bool {
        self.terms.contains(word)
    }

    /// Replace every alias occurrence with its canonical form in one pass.
    pub fn fold_aliases(&self, text: &str) -> String {
        self.alias_matcher.replace_all(text, &self.alias_replacements)
    }

    /// All canonical terms contained in `text` as whole words.
    pub fn find_terms(&self, text: &str) -> Vec<&str> {
        let bytes = text.as_bytes();
        let mut found = Vec::new();

        for mat in self.term_matcher.find_overlapping_iter(text) {
            let before_ok = mat.start() == 0 || !is_word_byte(bytes[mat.start() - 1]);
            let after_ok = mat.end() == bytes.len() || !is_word_byte(bytes[mat.end()]);
            if before_ok && after_ok {
                found.push(self.term_patterns[mat.pattern().as_usize()].as_str());
            }
        }

        found
    }

    /// Related terms accepted as substitutes for `term`, if any.
    pub fn related_terms(&self, term: &str) -> Option<&'static [&'static str]> {
        self.related.get(term).copied()
    }

    pub fn is_skill_stopword(&self, word: &str) -> bool {
        self.skill_stopwords.contains(word)
    }

    pub fn is_english_stopword(&self, word: &str) -> bool {
        self.english_stopwords.contains(word)
    }

    /// Heuristic from the production extractor: technical-substring markers,
    /// or an acronym-shaped (entirely uppercase) token.
    pub fn is_likely_tech_term(&self, word: &str) -> bool {
        if TECH_MARKERS.iter().any(|marker| word.contains(marker)) {
            return true;
        }
        word.len() >= 2 && word.chars().all(|c| c.is_ascii_uppercase())
    }

    pub fn term_count(&self) -> usize {
        self.terms.len()
    }
}

fn is_word_byte(b: u8) -> bool {
    b.is_ascii_alphanumeric()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_vocabulary() {
        let vocab = Vocabulary::builtin().unwrap();
        assert!(vocab.term_count() > 200);
        assert!(vocab.is_term("python"));
        assert!(vocab.is_term("machine learning"));
        assert!(!vocab.is_term("excellent"));
    }

    #[test]
    fn test_alias_folding_single_pass() {
        let vocab = Vocabulary::builtin().unwrap();
        assert_eq!(vocab.fold_aliases("k8s and node.js"), "kubernetes and node");
        // The longest alias wins at a given position; "js" inside "react.js"
        // is not folded separately.
        assert_eq!(vocab.fold_aliases("react.js"), "react");
    }

    #[test]
    fn test_find_terms_whole_word() {
        let vocab = Vocabulary::builtin().unwrap();

        let found = vocab.find_terms("a good go programmer");
        assert!(found.contains(&"go"));
        assert_eq!(found.iter().filter(|t| **t == "go").count(), 1);

        // "java" must not match inside "javascript"
        let found = vocab.find_terms("javascript only");
        assert!(found.contains(&"javascript"));
        assert!(!found.contains(&"java"));
    }

    #[test]
    fn test_find_terms_multiword_overlap() {
        let vocab = Vocabulary::builtin().unwrap();
        let found = vocab.find_terms("spring boot services");
        assert!(found.contains(&"spring boot"));
        assert!(found.contains(&"spring"));
    }

    #[test]
    fn test_related_terms() {
        let vocab = Vocabulary::builtin().unwrap();
        let related = vocab.related_terms("tdd").unwrap();
        assert!(related.contains(&"pytest"));
        assert!(vocab.related_terms("kubernetes").is_none());
    }

    #[test]
    fn test_tech_term_heuristic() {
        let vocab = Vocabulary::builtin().unwrap();
        assert!(vocab.is_likely_tech_term("graphsql"));
        assert!(vocab.is_likely_tech_term("webapi"));
        assert!(vocab.is_likely_tech_term("HTTP"));
        assert!(!vocab.is_likely_tech_term("banking"));
        assert!(!vocab.is_likely_tech_term("x"));
    }
}
