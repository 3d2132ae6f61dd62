//! Candidate info extraction from plain resume text.
//!
//! Pulls out a display name, email, and phone number with documented
//! fallback values when no pattern matches. Downstream duplicate detection
//! treats the fallback strings as ordinary data, except that the email
//! placeholder never counts for duplicate-by-email matching.

use std::sync::OnceLock;

use regex::Regex;
use tracing::debug;

/// Name used when the resume yields no usable first line
pub const UNKNOWN_NAME: &str = "Unknown Candidate";
/// Email placeholder when no address is found
pub const NO_EMAIL: &str = "No email found";
/// Phone placeholder when no number is found
pub const NO_PHONE: &str = "No phone found";

const NAME_MAX_CHARS: usize = 50;

fn email_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"\b[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}\b")
            .expect("email pattern compiles")
    })
}

fn phone_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"(\+\d{1,3}[-.\s]?)?\(?\d{3}\)?[-.\s]?\d{3}[-.\s]?\d{4}")
            .expect("phone pattern compiles")
    })
}

fn whitespace_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"\s+").expect("whitespace pattern compiles"))
}

fn noise_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"[^\w\s.,!?\-+=&|:;()\[\]{}]").expect("noise pattern compiles")
    })
}

/// Contact details pulled from one resume
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CandidateInfo {
    pub name: String,
    pub email: String,
    pub phone: String,
}

impl Default for CandidateInfo {
    fn default() -> Self {
        Self {
            name: UNKNOWN_NAME.to_string(),
            email: NO_EMAIL.to_string(),
            phone: NO_PHONE.to_string(),
        }
    }
}

/// Clean and normalize resume text for the pipeline.
///
/// Collapses whitespace runs to single spaces and strips characters
/// outside the word/punctuation whitelist. Case is preserved; content
/// hashing applies its own lower-casing.
#[must_use]
pub fn clean_text(text: &str) -> String {
    let collapsed = whitespace_regex().replace_all(text, " ");
    let stripped = noise_regex().replace_all(&collapsed, "");
    stripped.trim().to_string()
}

/// Extract name, email, and phone from resume text.
///
/// The name is the first non-blank line truncated to 50 characters; email
/// and phone come from pattern matches. Missing pieces get the documented
/// placeholder values, never an error.
#[must_use]
pub fn extract_candidate_info(text: &str) -> CandidateInfo {
    if text.trim().is_empty() {
        debug!("empty resume text, using placeholder candidate info");
        return CandidateInfo::default();
    }

    let name = text
        .lines()
        .map(str::trim)
        .find(|line| !line.is_empty())
        .map(|line| line.chars().take(NAME_MAX_CHARS).collect::<String>())
        .unwrap_or_else(|| UNKNOWN_NAME.to_string());

    let email = email_regex()
        .find(text)
        .map(|m| m.as_str().to_string())
        .unwrap_or_else(|| NO_EMAIL.to_string());

    let phone = phone_regex()
        .find(text)
        .map(|m| m.as_str().to_string())
        .unwrap_or_else(|| NO_PHONE.to_string());

    CandidateInfo { name, email, phone }
}
