//! Match summarization with a deterministic template fallback.
//!
//! A [`Summarizer`] explains why a candidate fits the job. Backends may
//! fail (network, model outage); the pipeline absorbs any error into
//! [`fallback_summary`], a fixed template per match tier parameterized only
//! by the numeric score, so results stay reproducible without a live
//! text-generation backend.

use rankx_core::MatchStatus;

use crate::error::SummaryError;
use crate::scorer::classify;

/// Generates a short explanation of a candidate's fit for the job.
pub trait Summarizer {
    fn summarize(
        &self,
        job_description: &str,
        candidate_text: &str,
        score: f32,
    ) -> Result<String, SummaryError>;
}

/// The built-in summarizer: always answers with the tier template.
#[derive(Debug, Clone, Copy, Default)]
pub struct TemplateSummarizer;

impl Summarizer for TemplateSummarizer {
    fn summarize(
        &self,
        _job_description: &str,
        _candidate_text: &str,
        score: f32,
    ) -> Result<String, SummaryError> {
        Ok(fallback_summary(score))
    }
}

/// Deterministic template summary, one wording per match tier.
///
/// Tier selection reuses [`classify`], so the summary wording and the
/// reported status can never disagree.
#[must_use]
pub fn fallback_summary(score: f32) -> String {
    match classify(score) {
        MatchStatus::Excellent => format!(
            "This candidate demonstrates excellent alignment with the job requirements. \
             The high similarity score of {score:.3} suggests a strong potential fit."
        ),
        MatchStatus::Good => format!(
            "This candidate shows good alignment with the job requirements, \
             supported by a similarity score of {score:.3}."
        ),
        MatchStatus::Fair => format!(
            "This candidate has a moderate match for the job, with a similarity \
             score of {score:.3} indicating some relevant qualifications."
        ),
        MatchStatus::Poor => format!(
            "This candidate has limited overlap with the job requirements, \
             as indicated by a low similarity score of {score:.3}."
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fallback_is_deterministic() {
        assert_eq!(fallback_summary(0.75), fallback_summary(0.75));
    }

    #[test]
    fn test_fallback_embeds_score_value() {
        let summary = fallback_summary(0.8512);
        assert!(summary.contains("0.851"));
        assert!(summary.contains("excellent alignment"));
    }

    #[test]
    fn test_fallback_tier_wording_matches_classify() {
        assert!(fallback_summary(0.8).contains("excellent alignment"));
        assert!(fallback_summary(0.6).contains("good alignment"));
        assert!(fallback_summary(0.4).contains("moderate match"));
        assert!(fallback_summary(0.39).contains("limited overlap"));
    }

    #[test]
    fn test_template_summarizer_never_fails() {
        let result = TemplateSummarizer.summarize("job", "resume", 0.5);
        assert!(result.is_ok());
    }
}
