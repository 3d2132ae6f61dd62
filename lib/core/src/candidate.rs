use serde::{Deserialize, Serialize};
use std::fmt;

/// Where a candidate's resume text came from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Source {
    /// Extracted from an uploaded resume file
    File,
    /// Pasted or typed in manually
    Manual,
}

impl fmt::Display for Source {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Source::File => write!(f, "file"),
            Source::Manual => write!(f, "manual"),
        }
    }
}

/// A raw candidate record, one per resume in a ranking run.
///
/// Immutable after creation; `id` is caller-assigned and must be unique
/// within one pipeline invocation (caller contract, not re-validated).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Candidate {
    pub id: String,
    pub name: String,
    pub email: String,
    pub phone: String,
    /// Cleaned plain resume text (extraction happens upstream)
    pub text: String,
    pub source: Source,
}

impl Candidate {
    #[must_use]
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        email: impl Into<String>,
        phone: impl Into<String>,
        text: impl Into<String>,
        source: Source,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            email: email.into(),
            phone: phone.into(),
            text: text.into(),
            source,
        }
    }

    /// A record with an empty or whitespace-only id, name, email, or text
    /// is structurally invalid and is dropped before duplicate detection.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        !self.id.trim().is_empty()
            && !self.name.trim().is_empty()
            && !self.email.trim().is_empty()
            && !self.text.trim().is_empty()
    }

    /// Lower-cased, trimmed email used as a duplicate-detection key
    #[must_use]
    pub fn normalized_email(&self) -> String {
        self.email.trim().to_lowercase()
    }

    /// Lower-cased, trimmed name used as part of the name+email key
    #[must_use]
    pub fn normalized_name(&self) -> String {
        self.name.trim().to_lowercase()
    }
}

/// Coarse match tier derived from the similarity score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MatchStatus {
    Excellent,
    Good,
    Fair,
    Poor,
}

impl MatchStatus {
    /// Human-readable tier label, as shown in the ranked table
    #[must_use]
    pub fn label(&self) -> &'static str {
        match self {
            MatchStatus::Excellent => "Excellent",
            MatchStatus::Good => "Good",
            MatchStatus::Fair => "Fair",
            MatchStatus::Poor => "Poor",
        }
    }

    /// Lowercase styling class for report consumers
    #[must_use]
    pub fn tier_class(&self) -> &'static str {
        match self {
            MatchStatus::Excellent => "excellent",
            MatchStatus::Good => "good",
            MatchStatus::Fair => "fair",
            MatchStatus::Poor => "poor",
        }
    }
}

impl fmt::Display for MatchStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// A candidate after scoring and ranking.
///
/// `rank` is dense and 1-based; `summary` is non-empty only for the top-K
/// ranked candidates.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoredCandidate {
    pub id: String,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub text: String,
    pub source: Source,
    /// Cosine similarity to the job description, in [0, 1]
    pub similarity: f32,
    pub status: MatchStatus,
    pub rank: usize,
    pub summary: String,
}

/// Which duplicate-detection criterion caught a candidate
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DuplicateKind {
    EmailDuplicate,
    ContentDuplicate,
    NameEmailDuplicate,
}

impl DuplicateKind {
    #[must_use]
    pub fn label(&self) -> &'static str {
        match self {
            DuplicateKind::EmailDuplicate => "email_duplicate",
            DuplicateKind::ContentDuplicate => "content_duplicate",
            DuplicateKind::NameEmailDuplicate => "name_email_duplicate",
        }
    }
}

impl fmt::Display for DuplicateKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Audit entry explaining why a candidate was excluded from ranking.
///
/// Produced once per removed candidate; consumed only for reporting and
/// never rejoined into the ranking set.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DuplicateRecord {
    pub kind: DuplicateKind,
    pub candidate_id: String,
    pub name: String,
    pub email: String,
    /// Human-readable reason citing the kept candidate's id
    pub reason: String,
}
