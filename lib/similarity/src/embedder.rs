//! Embedding provider abstraction.
//!
//! The pipeline never talks to a model directly; it takes any
//! [`EmbeddingProvider`] as an injected dependency. [`HashEmbedder`] is the
//! built-in deterministic provider: trigram/word feature hashing into a
//! fixed-dimension normalized vector, good enough for tests and offline use.

use ahash::AHashSet;
use rankx_core::Vector;

use crate::error::EmbeddingError;

/// Default dimension for hash-based embeddings
pub const DEFAULT_EMBEDDING_DIM: usize = 256;

/// A batch text-to-vector provider.
///
/// Implementations must return one vector per input text, in input order,
/// with a dimension that is consistent across calls in one invocation.
pub trait EmbeddingProvider {
    fn embed(&self, texts: &[&str]) -> Result<Vec<Vector>, EmbeddingError>;
}

/// Deterministic hash-based embedder.
///
/// Hashes character trigrams and words to vector positions and normalizes
/// the result. Identical input always produces an identical vector, so
/// ranking results are reproducible without a live model backend.
#[derive(Debug, Clone)]
pub struct HashEmbedder {
    dim: usize,
}

impl HashEmbedder {
    #[must_use]
    pub fn new(dim: usize) -> Self {
        Self { dim }
    }

    #[must_use]
    pub fn dim(&self) -> usize {
        self.dim
    }
}

impl Default for HashEmbedder {
    fn default() -> Self {
        Self::new(DEFAULT_EMBEDDING_DIM)
    }
}

impl EmbeddingProvider for HashEmbedder {
    fn embed(&self, texts: &[&str]) -> Result<Vec<Vector>, EmbeddingError> {
        Ok(texts
            .iter()
            .map(|text| hash_text_to_vector(text, self.dim))
            .collect())
    }
}

/// Hash a string to a fixed-size normalized vector.
///
/// Trigrams and words each bump a hashed position; words contribute more.
#[must_use]
pub fn hash_text_to_vector(text: &str, dim: usize) -> Vector {
    use std::collections::hash_map::DefaultHasher;
    use std::hash::{Hash, Hasher};

    let mut components = vec![0.0f32; dim];
    let normalized = text.to_lowercase();

    // Blank text gets the zero vector: cosine 0 against everything.
    if normalized.trim().is_empty() {
        return Vector::new(components);
    }

    for trigram in generate_trigrams(&normalized) {
        let mut hasher = DefaultHasher::new();
        trigram.hash(&mut hasher);
        let pos = (hasher.finish() as usize) % dim;
        components[pos] += 1.0;
    }

    for word in normalized.split_whitespace() {
        let mut hasher = DefaultHasher::new();
        word.hash(&mut hasher);
        let pos = (hasher.finish() as usize) % dim;
        components[pos] += 2.0;
    }

    let mut vector = Vector::new(components);
    vector.normalize();
    vector
}

/// Generate character trigrams from a string
fn generate_trigrams(s: &str) -> AHashSet<String> {
    let padded = format!("  {}  ", s);
    let chars: Vec<char> = padded.chars().collect();

    if chars.len() < 3 {
        return AHashSet::new();
    }

    chars
        .windows(3)
        .map(|w| w.iter().collect::<String>())
        .collect()
}
