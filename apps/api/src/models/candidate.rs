use serde::{Deserialize, Serialize};

/// Structured output record for one résumé after extraction and scoring.
/// Built once per résumé per run, immutable thereafter.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CandidateProfile {
    pub resume_file_name: String,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub experience: String,
    pub education: String,
    /// Percentage in [0, 100], two-decimal precision.
    pub score: f64,
    pub matched_skills: Vec<String>,
    pub missing_skills: Vec<String>,
}

/// A document excluded from the ranked output, with the reason.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SkippedDocument {
    pub file_name: String,
    pub reason: String,
}
