//! # rankX Engine
//!
//! The ranking pipeline for the rankX candidate ranking engine.
//!
//! Takes a job description and a batch of extracted candidates, removes
//! duplicate submissions, scores the survivors by embedding similarity,
//! and assembles an ordered, explainable result table:
//!
//! - [`Pipeline`] - dedup → embed → score → rank → summarize
//! - [`extract`] - name/email/phone extraction and text cleanup
//! - [`report`] - CSV export with a stable column contract
//!
//! ## Example
//!
//! ```rust
//! use rankx_core::{Candidate, Source};
//! use rankx_similarity::{HashEmbedder, TemplateSummarizer};
//! use rankx_engine::Pipeline;
//!
//! let embedder = HashEmbedder::default();
//! let summarizer = TemplateSummarizer;
//! let pipeline = Pipeline::new(&embedder, &summarizer);
//!
//! let candidates = vec![
//!     Candidate::new("File_1", "Jane Doe", "jane@example.com", "555-0100",
//!                    "senior rust engineer, distributed systems", Source::File),
//! ];
//!
//! let report = pipeline.rank("rust engineer for async services", &candidates).unwrap();
//! assert_eq!(report.ranked[0].rank, 1);
//! ```

pub mod error;
pub mod extract;
pub mod pipeline;
pub mod report;

pub use error::PipelineError;
pub use extract::{clean_text, extract_candidate_info, CandidateInfo};
pub use pipeline::{Pipeline, RankingReport, SUMMARY_TOP_K};
pub use report::{duplicates_to_csv, ranked_to_csv};
