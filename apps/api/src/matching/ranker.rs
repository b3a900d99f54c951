//! Batch ranking — runs the full pipeline for one job description against a
//! collection of résumé documents and produces the ordered result list.

use bytes::Bytes;
use tracing::{info, warn};

use crate::errors::AppError;
use crate::extraction;
use crate::matching::fields;
use crate::matching::scoring::MatchScorer;
use crate::models::candidate::{CandidateProfile, SkippedDocument};

/// One uploaded résumé: file name plus raw document bytes.
#[derive(Debug, Clone)]
pub struct ResumeUpload {
    pub file_name: String,
    pub bytes: Bytes,
}

/// Result of one batch run.
#[derive(Debug, Clone)]
pub struct BatchOutcome {
    /// The job description's extracted skill set, shared by every score.
    pub job_skills: Vec<String>,
    /// Ranked profiles, score descending; equal scores keep input order.
    pub profiles: Vec<CandidateProfile>,
    /// Documents excluded from the ranking, with reasons.
    pub skipped: Vec<SkippedDocument>,
}

/// Runs extraction, field extraction, and scoring over each résumé, then
/// sorts by score descending.
///
/// A document that fails to parse is skipped and reported — one bad file
/// never aborts the batch. Candidates are otherwise independent; processing
/// is sequential, document by document.
pub fn rank_candidates(
    jd_text: &str,
    uploads: &[ResumeUpload],
    scorer: &dyn MatchScorer,
) -> BatchOutcome {
    let job_skills = scorer.job_profile(jd_text);
    if job_skills.is_empty() {
        warn!("job description yielded an empty skill set; every candidate will score 0");
    }

    let mut profiles = Vec::with_capacity(uploads.len());
    let mut skipped = Vec::new();

    for upload in uploads {
        match extraction::extract_text(&upload.file_name, &upload.bytes) {
            Ok(text) => {
                profiles.push(build_profile(&upload.file_name, &text, &job_skills, scorer));
            }
            Err(AppError::DocumentParse(reason)) => {
                warn!(file = %upload.file_name, %reason, "skipping unparseable document");
                skipped.push(SkippedDocument {
                    file_name: upload.file_name.clone(),
                    reason,
                });
            }
            Err(e) => {
                warn!(file = %upload.file_name, error = %e, "skipping document");
                skipped.push(SkippedDocument {
                    file_name: upload.file_name.clone(),
                    reason: e.to_string(),
                });
            }
        }
    }

    sort_by_score(&mut profiles);
    info!(
        ranked = profiles.len(),
        skipped = skipped.len(),
        "batch complete"
    );

    BatchOutcome {
        job_skills,
        profiles,
        skipped,
    }
}

/// Builds one candidate profile from already-extracted text.
pub fn build_profile(
    file_name: &str,
    text: &str,
    job_skills: &[String],
    scorer: &dyn MatchScorer,
) -> CandidateProfile {
    let identity = fields::extract_identity(text);
    let result = scorer.score(job_skills, text);

    CandidateProfile {
        resume_file_name: file_name.to_string(),
        name: identity.name,
        email: identity.email,
        phone: identity.phone,
        experience: identity.experience,
        education: identity.education,
        score: result.score,
        matched_skills: result.matched,
        missing_skills: result.missing,
    }
}

// sort_by is stable, so equal scores retain their input order.
fn sort_by_score(profiles: &mut [CandidateProfile]) {
    profiles.sort_by(|a, b| {
        b.score
            .partial_cmp(&a.score)
            .unwrap_or(std::cmp::Ordering::Equal)
    });
}
