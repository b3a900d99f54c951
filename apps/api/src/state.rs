use std::sync::Arc;

use crate::config::Config;
use crate::matching::scoring::{MatchScorer, ReportMode};

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    /// Canonical vocabulary-based scorer.
    pub skill_scorer: Arc<dyn MatchScorer>,
    /// Legacy lexical-overlap scorer, selectable per request via `mode`.
    pub token_scorer: Arc<dyn MatchScorer>,
}

impl AppState {
    pub fn scorer(&self, mode: ReportMode) -> Arc<dyn MatchScorer> {
        match mode {
            ReportMode::Skills => Arc::clone(&self.skill_scorer),
            ReportMode::TokenOverlap => Arc::clone(&self.token_scorer),
        }
    }
}
