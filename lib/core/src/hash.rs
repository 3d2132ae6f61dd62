//! Content hashing for verbatim-duplicate detection.
//!
//! Resume text is normalized (whitespace collapsed, noise characters
//! stripped, lower-cased) before hashing so that two submissions differing
//! only in formatting collide to the same digest.

use sha2::{Digest, Sha256};

/// Punctuation kept alongside word characters during normalization
const KEPT_PUNCTUATION: &str = ".,!?-+=&|:;()[]{}";

#[inline]
fn is_kept(c: char) -> bool {
    c.is_alphanumeric() || c == '_' || c == ' ' || KEPT_PUNCTUATION.contains(c)
}

/// Normalize resume text for content hashing.
///
/// Collapses whitespace runs to single spaces, strips characters outside
/// the word-character/punctuation whitelist, lower-cases, and trims.
#[must_use]
pub fn normalize_text(text: &str) -> String {
    let collapsed = text.split_whitespace().collect::<Vec<_>>().join(" ");
    let stripped: String = collapsed.chars().filter(|c| is_kept(*c)).collect();
    stripped.trim().to_lowercase()
}

/// Hash normalized resume text to a fixed-length hex digest.
///
/// Empty text hashes to the digest of the empty string rather than
/// erroring, so all empty-text candidates collide into one bucket;
/// callers that don't want that filter them upstream.
#[must_use]
pub fn content_hash(text: &str) -> String {
    let normalized = normalize_text(text);
    format!("{:x}", Sha256::digest(normalized.as_bytes()))
}
