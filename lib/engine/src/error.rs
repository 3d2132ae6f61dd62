use thiserror::Error;

use rankx_similarity::{EmbeddingError, ScoringError};

/// Hard failures of a ranking call.
///
/// Only provider outages surface here; invalid input records, summarizer
/// failures, and non-comparable scores all degrade inside the pipeline.
#[derive(Error, Debug)]
pub enum PipelineError {
    #[error("Embedding failed: {0}")]
    Embedding(#[from] EmbeddingError),

    #[error("Scoring failed: {0}")]
    Scoring(#[from] ScoringError),
}
