//! # rankX Similarity
//!
//! Similarity scoring for the rankX candidate ranking engine.
//!
//! This crate wraps an embedding provider and a vector-similarity function
//! behind a stable interface and converts raw scores to calibrated match
//! tiers:
//!
//! - **Embedding Providers**: the [`EmbeddingProvider`] seam plus the
//!   built-in deterministic [`HashEmbedder`]
//! - **Scoring**: batched cosine similarity against the job vector
//! - **Classification**: fixed-threshold match tiers (Excellent/Good/Fair/Poor)
//! - **Summarization**: the [`Summarizer`] seam with a deterministic
//!   template fallback
//!
//! ## Example
//!
//! ```rust
//! use rankx_similarity::{HashEmbedder, scorer};
//!
//! let embedder = HashEmbedder::default();
//! let vectors = scorer::embed_batch(
//!     &embedder,
//!     &["senior rust engineer", "rust developer, async services"],
//! ).unwrap();
//!
//! let scores = scorer::score(&vectors[0], &vectors[1..]).unwrap();
//! let status = scorer::classify(scores[0]);
//! println!("{status}: {:.4}", scores[0]);
//! ```

pub mod embedder;
pub mod error;
pub mod scorer;
pub mod summarizer;

pub use embedder::{EmbeddingProvider, HashEmbedder, DEFAULT_EMBEDDING_DIM};
pub use error::{EmbeddingError, ScoringError, SummaryError};
pub use scorer::{classify, embed_batch, score};
pub use summarizer::{fallback_summary, Summarizer, TemplateSummarizer};
