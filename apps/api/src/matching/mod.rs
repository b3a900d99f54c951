// Matching pipeline.
// Implements: normalization, identity field extraction, skill matching,
// scoring, and batch ranking. Pure CPU — handlers run batches inside
// tokio::task::spawn_blocking.

pub mod fields;
pub mod handlers;
pub mod normalizer;
pub mod ranker;
pub mod scoring;
pub mod skills;
