//! # rankX
//!
//! A candidate-to-job ranking engine: duplicate elimination, embedding
//! similarity scoring, and explainable match reports.
//!
//! rankX takes a job description plus a batch of extracted resume texts,
//! removes near-identical submissions (shared email, identical normalized
//! content, shared name+email pair), scores the survivors by cosine
//! similarity against the job description, and assembles a ranked table
//! with match tiers and per-candidate summaries.
//!
//! ## Quick Start
//!
//! ### As a CLI
//!
//! ```bash
//! cargo install rankx
//! rankx --job job.txt resumes/*.txt --output ranked.csv
//! ```
//!
//! ### As a Library
//!
//! ```rust
//! use rankx::prelude::*;
//!
//! let embedder = HashEmbedder::default();
//! let summarizer = TemplateSummarizer;
//! let pipeline = Pipeline::new(&embedder, &summarizer);
//!
//! let candidates = vec![
//!     Candidate::new("File_1", "Jane Doe", "jane@example.com", "555-0100",
//!                    "senior rust engineer, distributed systems", Source::File),
//!     Candidate::new("File_2", "Kim Park", "kim@example.com", "555-0101",
//!                    "frontend developer, react and typescript", Source::File),
//! ];
//!
//! let report = pipeline.rank("rust engineer for async services", &candidates).unwrap();
//! for row in &report.ranked {
//!     println!("{}. {} - {:.4} ({})", row.rank, row.name, row.similarity, row.status);
//! }
//! ```
//!
//! ## Crate Structure
//!
//! rankX is composed of several crates:
//!
//! - [`rankx-core`](https://docs.rs/rankx-core) - data model, vector math, content hashing, duplicate detection
//! - [`rankx-similarity`](https://docs.rs/rankx-similarity) - embedding providers, cosine scoring, match tiers, summarization
//! - [`rankx-engine`](https://docs.rs/rankx-engine) - the ranking pipeline, info extraction, CSV reports

// Re-export core types
pub use rankx_core::{
    content_hash, dedup, normalize_text, Candidate, DedupResult, DuplicateKind, DuplicateRecord,
    MatchStatus, ScoredCandidate, Source, Vector,
};

// Re-export similarity
pub use rankx_similarity::{
    classify, fallback_summary, EmbeddingError, EmbeddingProvider, HashEmbedder, ScoringError,
    SummaryError, Summarizer, TemplateSummarizer,
};

// Re-export engine
pub use rankx_engine::{
    clean_text, duplicates_to_csv, extract_candidate_info, ranked_to_csv, CandidateInfo, Pipeline,
    PipelineError, RankingReport, SUMMARY_TOP_K,
};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::{
        classify, content_hash, Candidate, DuplicateKind, DuplicateRecord, EmbeddingProvider,
        HashEmbedder, MatchStatus, Pipeline, PipelineError, RankingReport, ScoredCandidate, Source,
        Summarizer, TemplateSummarizer, Vector, SUMMARY_TOP_K,
    };
}
