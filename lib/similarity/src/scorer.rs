//! Cosine scoring and match-tier classification.
//!
//! Scores are cosine similarities between the job vector and each candidate
//! vector, order-preserving, clamped into [0, 1]. Tier thresholds are exact
//! floating-point comparisons so behavior stays reproducible.

use rankx_core::{MatchStatus, Vector};
use tracing::error;

use crate::embedder::EmbeddingProvider;
use crate::error::{EmbeddingError, ScoringError};

/// Lower bound of the Excellent tier (inclusive)
pub const EXCELLENT_THRESHOLD: f32 = 0.8;
/// Lower bound of the Good tier (inclusive)
pub const GOOD_THRESHOLD: f32 = 0.6;
/// Lower bound of the Fair tier (inclusive); anything below is Poor
pub const FAIR_THRESHOLD: f32 = 0.4;

/// Embed a batch of texts, checking the one-vector-per-text contract.
///
/// Provider failures propagate untouched; there is no local retry.
pub fn embed_batch(
    provider: &dyn EmbeddingProvider,
    texts: &[&str],
) -> Result<Vec<Vector>, EmbeddingError> {
    let vectors = provider.embed(texts).map_err(|err| {
        error!(error = %err, "embedding generation failed");
        err
    })?;
    if vectors.len() != texts.len() {
        return Err(EmbeddingError::CountMismatch {
            expected: texts.len(),
            actual: vectors.len(),
        });
    }
    Ok(vectors)
}

/// Score every candidate vector against the job vector.
///
/// Returns one scalar per candidate in input order. A candidate vector
/// whose dimension differs from the job vector's is a hard error. Finite
/// scores are clamped into [0, 1]; a non-finite cosine (degenerate
/// provider output) is passed through for the assembler's sort fallback
/// to handle.
pub fn score(job: &Vector, candidates: &[Vector]) -> Result<Vec<f32>, ScoringError> {
    candidates
        .iter()
        .map(|vector| {
            if vector.dim() != job.dim() {
                return Err(ScoringError::InvalidDimension {
                    expected: job.dim(),
                    actual: vector.dim(),
                });
            }
            Ok(job.cosine_similarity(vector).clamp(0.0, 1.0))
        })
        .collect()
}

/// Classify a similarity score into its match tier.
///
/// Boundaries are inclusive on the lower bound of each tier and compared
/// exactly, no epsilon. The tier's styling class is available via
/// [`MatchStatus::tier_class`]. Non-finite scores fall through to Poor.
#[must_use]
pub fn classify(score: f32) -> MatchStatus {
    if score >= EXCELLENT_THRESHOLD {
        MatchStatus::Excellent
    } else if score >= GOOD_THRESHOLD {
        MatchStatus::Good
    } else if score >= FAIR_THRESHOLD {
        MatchStatus::Fair
    } else {
        MatchStatus::Poor
    }
}
