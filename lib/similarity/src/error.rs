use thiserror::Error;

/// Failure while producing embeddings.
///
/// Provider failures are not retried here; they propagate to the caller
/// and fail the whole ranking call.
#[derive(Error, Debug)]
pub enum EmbeddingError {
    #[error("Embedding provider failed: {0}")]
    Provider(String),

    #[error("Provider returned {actual} vectors for {expected} texts")]
    CountMismatch { expected: usize, actual: usize },
}

/// Failure while scoring candidate vectors against the job vector.
#[derive(Error, Debug)]
pub enum ScoringError {
    #[error("Invalid vector dimension: expected {expected}, got {actual}")]
    InvalidDimension { expected: usize, actual: usize },
}

/// Failure inside a summarization backend.
///
/// Pipeline call sites absorb this into the deterministic template
/// fallback; it never reaches the user.
#[derive(Error, Debug)]
pub enum SummaryError {
    #[error("Summarizer backend failed: {0}")]
    Backend(String),
}
