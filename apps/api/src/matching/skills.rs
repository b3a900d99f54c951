//! Skill vocabulary and word-boundary-safe skill matching.
//!
//! One mechanism serves both job-description and résumé skill extraction,
//! so matching is symmetric and reproducible by construction.

use anyhow::{Context, Result};
use regex::Regex;

/// Built-in skill vocabulary — the matching universe when no custom list is
/// supplied. Order is preserved in all outputs.
const DEFAULT_SKILLS: &[&str] = &[
    "python",
    "java",
    "javascript",
    "typescript",
    "rust",
    "go",
    "c++",
    "c#",
    "sql",
    "html",
    "css",
    "react",
    "angular",
    "node.js",
    "django",
    "flask",
    "spring",
    "aws",
    "azure",
    "gcp",
    "docker",
    "kubernetes",
    "terraform",
    "git",
    "linux",
    "machine learning",
    "deep learning",
    "data analysis",
    "data engineering",
    "nlp",
    "pandas",
    "numpy",
    "tensorflow",
    "pytorch",
    "excel",
    "power bi",
    "tableau",
    "rest api",
    "graphql",
    "mongodb",
    "postgresql",
    "mysql",
    "redis",
    "kafka",
    "communication",
    "leadership",
    "teamwork",
    "problem solving",
    "project management",
    "agile",
    "scrum",
];

/// Fixed, ordered list of canonical skill strings. Immutable after
/// construction; injected into the matcher rather than read as global state
/// so tests can substitute their own.
#[derive(Debug, Clone)]
pub struct SkillVocabulary {
    entries: Vec<String>,
}

impl SkillVocabulary {
    pub fn new(entries: Vec<String>) -> Self {
        Self {
            entries: entries
                .into_iter()
                .filter(|e| !e.trim().is_empty())
                .collect(),
        }
    }

    /// The vocabulary shipped in source.
    pub fn builtin() -> Self {
        Self::new(DEFAULT_SKILLS.iter().map(|s| s.to_string()).collect())
    }

    pub fn entries(&self) -> &[String] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Detects which vocabulary entries occur in a text as whole words or
/// contiguous phrases, case-insensitively.
pub struct SkillMatcher {
    patterns: Vec<(String, Regex)>,
}

impl SkillMatcher {
    /// Compiles one anchored pattern per vocabulary entry.
    pub fn new(vocabulary: &SkillVocabulary) -> Result<Self> {
        let mut patterns = Vec::with_capacity(vocabulary.len());
        for entry in vocabulary.entries() {
            let regex = Regex::new(&phrase_pattern(entry))
                .with_context(|| format!("invalid skill pattern for '{entry}'"))?;
            patterns.push((entry.clone(), regex));
        }
        Ok(Self { patterns })
    }

    /// Returns the vocabulary entries present in `text`, in vocabulary
    /// order. Always a subset of the vocabulary the matcher was built with.
    pub fn find_skills(&self, text: &str) -> Vec<String> {
        self.patterns
            .iter()
            .filter(|(_, regex)| regex.is_match(text))
            .map(|(entry, _)| entry.clone())
            .collect()
    }
}

/// Case-insensitive `\b`-anchored pattern for one skill. Words of a
/// multi-word entry are joined with `\s+` so the phrase still matches across
/// a line wrap, but stays contiguous. An anchor is dropped on an edge that
/// is not a word character (`c++`), where `\b` can never match.
fn phrase_pattern(skill: &str) -> String {
    let escaped = skill
        .split_whitespace()
        .map(regex::escape)
        .collect::<Vec<_>>()
        .join(r"\s+");

    let lead = if skill.starts_with(is_word_char) { r"\b" } else { "" };
    let trail = if skill.ends_with(is_word_char) { r"\b" } else { "" };

    format!("(?i){lead}{escaped}{trail}")
}

fn is_word_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}

#[cfg(test)]
mod tests {
    use super::*;

    fn matcher(entries: &[&str]) -> SkillMatcher {
        let vocabulary = SkillVocabulary::new(entries.iter().map(|s| s.to_string()).collect());
        SkillMatcher::new(&vocabulary).unwrap()
    }

    #[test]
    fn test_jd_scenario_extracts_all_three_skills() {
        let m = matcher(&["python", "sql", "docker"]);
        let found = m.find_skills("Must know python, sql and docker.");
        assert_eq!(found, vec!["python", "sql", "docker"]);
    }

    #[test]
    fn test_matching_is_case_insensitive() {
        let m = matcher(&["python", "docker"]);
        let found = m.find_skills("Experienced in Python and DOCKER");
        assert_eq!(found, vec!["python", "docker"]);
    }

    #[test]
    fn test_word_boundaries_block_substring_hits() {
        let m = matcher(&["java", "go"]);
        assert!(m.find_skills("javascript and golang only").is_empty());
        assert_eq!(m.find_skills("java and go").len(), 2);
    }

    #[test]
    fn test_multi_word_skill_matches_as_contiguous_phrase() {
        let m = matcher(&["machine learning"]);
        assert_eq!(m.find_skills("applied machine learning daily").len(), 1);
        // Both words present, but not adjacent — no phrase hit.
        assert!(m
            .find_skills("machine tooling with a steep learning curve")
            .is_empty());
    }

    #[test]
    fn test_multi_word_skill_matches_across_line_wrap() {
        let m = matcher(&["machine learning"]);
        assert_eq!(m.find_skills("worked on machine\nlearning systems").len(), 1);
    }

    #[test]
    fn test_non_word_edge_skills_match() {
        let m = matcher(&["c++"]);
        assert_eq!(m.find_skills("fluent in C++, and more").len(), 1);
        assert!(m.find_skills("objective-c codebase").is_empty());
    }

    #[test]
    fn test_matches_are_subset_of_vocabulary() {
        let m = matcher(&["python", "sql"]);
        let found = m.find_skills("python sql docker kubernetes react");
        for skill in &found {
            assert!(["python", "sql"].contains(&skill.as_str()));
        }
    }

    #[test]
    fn test_results_follow_vocabulary_order() {
        let m = matcher(&["docker", "python", "sql"]);
        let found = m.find_skills("sql before python before docker");
        assert_eq!(found, vec!["docker", "python", "sql"]);
    }

    #[test]
    fn test_builtin_vocabulary_is_nonempty() {
        let vocabulary = SkillVocabulary::builtin();
        assert!(!vocabulary.is_empty());
        assert!(vocabulary.entries().iter().any(|s| s == "python"));
    }

    #[test]
    fn test_blank_vocabulary_entries_are_dropped() {
        let vocabulary = SkillVocabulary::new(vec!["rust".to_string(), "  ".to_string()]);
        assert_eq!(vocabulary.len(), 1);
    }
}
