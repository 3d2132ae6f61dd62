//! # rankX Core
//!
//! Core library for the rankX candidate ranking engine.
//!
//! This crate provides the fundamental data model and algorithms:
//!
//! - [`Candidate`] / [`ScoredCandidate`] - resume records before and after ranking
//! - [`Vector`] - dense embedding vector with cosine similarity
//! - [`hash`] - normalized content hashing for verbatim-duplicate detection
//! - [`dedup`] - three-keyed duplicate detection with fixed precedence
//!
//! ## Example
//!
//! ```rust
//! use rankx_core::{Candidate, Source, dedup};
//!
//! let batch = vec![
//!     Candidate::new("A", "Jane", "x@y.com", "555-0100", "rust engineer", Source::File),
//!     Candidate::new("B", "Janet", "x@y.com", "555-0101", "java engineer", Source::File),
//! ];
//!
//! let result = dedup::detect(&batch);
//! assert_eq!(result.unique.len(), 1);
//! assert_eq!(result.duplicates.len(), 1);
//! ```

pub mod candidate;
pub mod dedup;
pub mod hash;
pub mod vector;

pub use candidate::{
    Candidate, DuplicateKind, DuplicateRecord, MatchStatus, ScoredCandidate, Source,
};
pub use dedup::{DedupResult, EMAIL_SENTINEL};
pub use hash::{content_hash, normalize_text};
pub use vector::Vector;
