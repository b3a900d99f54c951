mod config;
mod errors;
mod extraction;
mod matching;
mod models;
mod routes;
mod state;

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Result;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::matching::scoring::{SkillScorer, TokenOverlapScorer};
use crate::matching::skills::{SkillMatcher, SkillVocabulary};
use crate::routes::build_router;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (fails fast on malformed env vars)
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Screener API v{}", env!("CARGO_PKG_VERSION"));

    // Compile the skill vocabulary once; shared read-only across requests
    let vocabulary = SkillVocabulary::builtin();
    let matcher = SkillMatcher::new(&vocabulary)?;
    info!("Skill vocabulary compiled ({} entries)", vocabulary.len());
    info!("Default scoring mode: {:?}", config.scoring_mode);

    // Build app state
    let state = AppState {
        config: config.clone(),
        skill_scorer: Arc::new(SkillScorer::new(matcher)),
        token_scorer: Arc::new(TokenOverlapScorer),
    };

    // Build router
    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive()); // TODO: tighten CORS in production

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
