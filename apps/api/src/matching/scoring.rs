//! Score computation — pluggable, trait-based scorer comparing a job
//! description's skill set against a résumé's.
//!
//! Default: `SkillScorer` (vocabulary-based, canonical). `TokenOverlapScorer`
//! is the retained lexical-overlap variant, selectable per request; the two
//! pipelines never mix within one batch.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::matching::normalizer;
use crate::matching::skills::SkillMatcher;

/// Which batch report to produce — the scoring backend for a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportMode {
    /// Canonical vocabulary-based skill scoring.
    Skills,
    /// Legacy lexical-overlap scoring over normalized token sets.
    TokenOverlap,
}

impl ReportMode {
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_lowercase().as_str() {
            "skills" => Some(ReportMode::Skills),
            "tokens" | "token-overlap" => Some(ReportMode::TokenOverlap),
            _ => None,
        }
    }
}

/// Outcome of scoring one résumé against one job description.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreResult {
    /// Percentage in [0, 100], rounded to two decimals.
    pub score: f64,
    pub matched: Vec<String>,
    pub missing: Vec<String>,
}

/// Compares a job-description skill set against a résumé skill set.
///
/// An empty job set is a defined degenerate case — zero score, empty
/// matched/missing — not an error. `matched` and `missing` partition the
/// job set and keep its order.
pub fn score_skills(job_skills: &[String], resume_skills: &[String]) -> ScoreResult {
    if job_skills.is_empty() {
        return ScoreResult {
            score: 0.0,
            matched: Vec::new(),
            missing: Vec::new(),
        };
    }

    let resume: HashSet<&str> = resume_skills.iter().map(String::as_str).collect();
    let (matched, missing): (Vec<String>, Vec<String>) = job_skills
        .iter()
        .cloned()
        .partition(|skill| resume.contains(skill.as_str()));

    let score = round2(100.0 * matched.len() as f64 / job_skills.len() as f64);

    ScoreResult {
        score,
        matched,
        missing,
    }
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Scoring backend seam. Both implementations are pure functions of their
/// inputs — identical inputs always yield identical results.
pub trait MatchScorer: Send + Sync {
    /// Extracts the comparable skill set from raw job-description text,
    /// once per batch.
    fn job_profile(&self, jd_text: &str) -> Vec<String>;

    /// Scores one résumé text against an extracted job profile.
    fn score(&self, job_skills: &[String], resume_text: &str) -> ScoreResult;

    /// Backend label reported in responses.
    fn backend(&self) -> &'static str;
}

/// Canonical vocabulary-based scorer.
pub struct SkillScorer {
    matcher: SkillMatcher,
}

impl SkillScorer {
    pub fn new(matcher: SkillMatcher) -> Self {
        Self { matcher }
    }
}

impl MatchScorer for SkillScorer {
    fn job_profile(&self, jd_text: &str) -> Vec<String> {
        self.matcher.find_skills(jd_text)
    }

    fn score(&self, job_skills: &[String], resume_text: &str) -> ScoreResult {
        let resume_skills = self.matcher.find_skills(resume_text);
        score_skills(job_skills, &resume_skills)
    }

    fn backend(&self) -> &'static str {
        "skills"
    }
}

/// Legacy lexical-overlap scorer over normalized token sets. Token lists
/// are sorted so the report is reproducible run to run.
pub struct TokenOverlapScorer;

impl MatchScorer for TokenOverlapScorer {
    fn job_profile(&self, jd_text: &str) -> Vec<String> {
        let mut tokens: Vec<String> = normalizer::tokenize(jd_text).into_iter().collect();
        tokens.sort();
        tokens
    }

    fn score(&self, job_skills: &[String], resume_text: &str) -> ScoreResult {
        let resume_tokens: Vec<String> = normalizer::tokenize(resume_text).into_iter().collect();
        score_skills(job_skills, &resume_tokens)
    }

    fn backend(&self) -> &'static str {
        "tokens"
    }
}
