//! The ranking assembler.
//!
//! Merges scored, deduplicated candidates into an ordered result set:
//! dedup → batch embed → score → stable sort → dense ranks → top-K
//! summaries. Duplicates are pruned before the embedding step so their
//! scores are never computed.

use std::cmp::Ordering;

use tracing::{debug, info, warn};

use rankx_core::{dedup, Candidate, DuplicateRecord, ScoredCandidate};
use rankx_similarity::{fallback_summary, scorer, EmbeddingProvider, Summarizer};

use crate::error::PipelineError;

/// Only the top-K ranked candidates get a summary; the rest stay empty.
/// Bounds expensive summarization calls regardless of input size.
pub const SUMMARY_TOP_K: usize = 5;

/// Final output of one ranking run: the ordered table plus the duplicate
/// report. An empty `ranked` with a non-empty duplicate list is a valid
/// outcome (all-duplicate input), not an error.
#[derive(Debug, Clone, Default)]
pub struct RankingReport {
    pub ranked: Vec<ScoredCandidate>,
    pub duplicates: Vec<DuplicateRecord>,
}

impl RankingReport {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.ranked.is_empty()
    }
}

/// The ranking pipeline, owning its injected provider handles.
///
/// Providers are explicit constructor arguments rather than module-level
/// state so tests can swap in deterministic stand-ins.
pub struct Pipeline<'a> {
    embedder: &'a dyn EmbeddingProvider,
    summarizer: &'a dyn Summarizer,
}

impl<'a> Pipeline<'a> {
    #[must_use]
    pub fn new(embedder: &'a dyn EmbeddingProvider, summarizer: &'a dyn Summarizer) -> Self {
        Self {
            embedder,
            summarizer,
        }
    }

    /// Rank a candidate batch against a job description.
    ///
    /// Embedding or scoring failures abort the call; everything else
    /// degrades to a valid, possibly empty, report.
    pub fn rank(
        &self,
        job_description: &str,
        candidates: &[Candidate],
    ) -> Result<RankingReport, PipelineError> {
        let dedup::DedupResult { unique, duplicates } = dedup::detect(candidates);
        info!(
            total = candidates.len(),
            unique = unique.len(),
            duplicates = duplicates.len(),
            "deduplicated candidate batch"
        );

        if unique.is_empty() {
            warn!("no unique candidates to rank");
            return Ok(RankingReport {
                ranked: Vec::new(),
                duplicates,
            });
        }

        // One batched call for the job description, one for all resumes.
        let job_vectors = scorer::embed_batch(self.embedder, &[job_description])?;
        let texts: Vec<&str> = unique.iter().map(|c| c.text.as_str()).collect();
        let candidate_vectors = scorer::embed_batch(self.embedder, &texts)?;

        let scores = scorer::score(&job_vectors[0], &candidate_vectors)?;
        debug!(scored = scores.len(), "scored unique candidates");

        let order = ranked_order(&scores);

        let mut ranked = Vec::with_capacity(unique.len());
        for (position, &idx) in order.iter().enumerate() {
            let candidate = &unique[idx];
            let similarity = scores[idx];

            let summary = if position < SUMMARY_TOP_K {
                self.summarize(job_description, candidate, similarity)
            } else {
                String::new()
            };

            ranked.push(ScoredCandidate {
                id: candidate.id.clone(),
                name: candidate.name.clone(),
                email: candidate.email.clone(),
                phone: candidate.phone.clone(),
                text: candidate.text.clone(),
                source: candidate.source,
                similarity,
                status: scorer::classify(similarity),
                rank: position + 1,
                summary,
            });
        }

        Ok(RankingReport { ranked, duplicates })
    }

    /// Summarizer errors never propagate; degrade to the tier template.
    fn summarize(&self, job_description: &str, candidate: &Candidate, score: f32) -> String {
        match self
            .summarizer
            .summarize(job_description, &candidate.text, score)
        {
            Ok(summary) => summary,
            Err(err) => {
                warn!(id = %candidate.id, error = %err, "summarizer failed, using template fallback");
                fallback_summary(score)
            }
        }
    }
}

/// Index permutation sorted descending by score, with the original input
/// index as an explicit secondary key so ties keep their input order.
///
/// When any score is non-comparable (NaN), sorting would not be meaningful;
/// input order with sequential ranks is returned instead of aborting.
fn ranked_order(scores: &[f32]) -> Vec<usize> {
    let mut order: Vec<usize> = (0..scores.len()).collect();

    if scores.iter().any(|s| !s.is_finite()) {
        warn!("non-comparable similarity scores, falling back to input order");
        return order;
    }

    order.sort_by(|&a, &b| {
        scores[b]
            .partial_cmp(&scores[a])
            .unwrap_or(Ordering::Equal)
            .then_with(|| a.cmp(&b))
    });
    order
}
