use axum::{
    extract::{Multipart, State},
    Json,
};
use bytes::Bytes;
use serde::Serialize;
use tracing::{debug, info};

use crate::errors::AppError;
use crate::extraction::{self, DocumentFormat};
use crate::matching::ranker::{rank_candidates, BatchOutcome, ResumeUpload};
use crate::matching::scoring::ReportMode;
use crate::models::candidate::{CandidateProfile, SkippedDocument};
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct MatchResponse {
    pub job_skills: Vec<String>,
    /// Which backend produced the scores — for transparency.
    pub scorer_backend: &'static str,
    pub results: Vec<CandidateProfile>,
    pub skipped: Vec<SkippedDocument>,
}

/// POST /api/v1/match
///
/// Multipart fields: repeated `resumes` file parts, a `jd` text part (or a
/// `jd_file` .pdf/.docx part), and an optional `mode` part selecting the
/// scoring backend (`skills` | `tokens`).
pub async fn handle_match(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Json<MatchResponse>, AppError> {
    let mut jd_text: Option<String> = None;
    let mut jd_file: Option<(String, Bytes)> = None;
    let mut mode = state.config.scoring_mode;
    let mut uploads: Vec<ResumeUpload> = Vec::new();
    let mut skipped: Vec<SkippedDocument> = Vec::new();

    while let Some(field) = multipart.next_field().await.map_err(|e| {
        AppError::Upload(format!("failed to read multipart field: {e}"))
    })? {
        let name = field.name().unwrap_or("").to_string();
        match name.as_str() {
            "jd" => {
                let text = field
                    .text()
                    .await
                    .map_err(|e| AppError::Upload(format!("failed to read jd field: {e}")))?;
                jd_text = Some(text);
            }
            "jd_file" => {
                let file_name = field.file_name().unwrap_or("jd").to_string();
                let data = field.bytes().await.map_err(|e| {
                    AppError::Upload(format!("failed to read '{file_name}': {e}"))
                })?;
                jd_file = Some((file_name, data));
            }
            "mode" => {
                let value = field
                    .text()
                    .await
                    .map_err(|e| AppError::Upload(format!("failed to read mode field: {e}")))?;
                mode = ReportMode::parse(&value)
                    .ok_or_else(|| AppError::Validation(format!("unknown scoring mode '{value}'")))?;
            }
            "resumes" => {
                let file_name = match field.file_name() {
                    Some(n) if !n.is_empty() => n.to_string(),
                    _ => {
                        skipped.push(SkippedDocument {
                            file_name: String::new(),
                            reason: "missing file name".to_string(),
                        });
                        continue;
                    }
                };
                // Extension gate: the extractor contract assumes only
                // .pdf/.docx ever reach it.
                if !DocumentFormat::from_file_name(&file_name).is_supported() {
                    skipped.push(SkippedDocument {
                        file_name,
                        reason: "unsupported extension (expected .pdf or .docx)".to_string(),
                    });
                    continue;
                }
                let data = field.bytes().await.map_err(|e| {
                    AppError::Upload(format!("failed to read '{file_name}': {e}"))
                })?;
                uploads.push(ResumeUpload {
                    file_name,
                    bytes: data,
                });
            }
            other => {
                debug!(field = other, "ignoring unknown multipart field");
            }
        }
    }

    if uploads.is_empty() && skipped.is_empty() {
        return Err(AppError::Validation(
            "at least one 'resumes' file is required".to_string(),
        ));
    }

    let scorer = state.scorer(mode);
    let backend = scorer.backend();
    info!(
        resumes = uploads.len(),
        backend, "running match batch"
    );

    // The whole pipeline is CPU-bound; keep it off the async runtime.
    let outcome = tokio::task::spawn_blocking(move || -> Result<BatchOutcome, AppError> {
        let jd_text = resolve_jd(jd_text, jd_file)?;
        Ok(rank_candidates(&jd_text, &uploads, scorer.as_ref()))
    })
    .await
    .map_err(|e| AppError::Internal(anyhow::anyhow!("batch task failed: {e}")))??;

    skipped.extend(outcome.skipped);

    Ok(Json(MatchResponse {
        job_skills: outcome.job_skills,
        scorer_backend: backend,
        results: outcome.profiles,
        skipped,
    }))
}

/// Resolves the job-description text from either the pasted text field or an
/// uploaded document. A parse failure here is fatal for the request — with
/// no job description there is nothing to score against.
fn resolve_jd(
    jd_text: Option<String>,
    jd_file: Option<(String, Bytes)>,
) -> Result<String, AppError> {
    match (jd_text, jd_file) {
        (Some(text), _) => Ok(text),
        (None, Some((file_name, data))) => {
            if !DocumentFormat::from_file_name(&file_name).is_supported() {
                return Err(AppError::Validation(format!(
                    "job description file '{file_name}' must be .pdf or .docx"
                )));
            }
            extraction::extract_text(&file_name, &data)
        }
        (None, None) => Err(AppError::Validation(
            "a 'jd' text field or 'jd_file' upload is required".to_string(),
        )),
    }
}
