//! Embedding backend trait and the deterministic hashing implementation.

use bioqa_core::Result;
use ndarray::Array1;

/// Trait for embedding backends.
///
/// Implementations must be deterministic for a fixed model and input;
/// cosine similarity over the output space is the match score. An
/// embedding failure is a request-level error, never a silent fallback.
pub trait EmbedderBackend: Send + Sync {
    /// Generate an embedding for a text string.
    fn embed(&self, text: &str) -> Result<Array1<f32>>;

    /// Generate embeddings for a batch of texts.
    fn embed_batch(&self, texts: &[&str]) -> Result<Vec<Array1<f32>>> {
        texts.iter().map(|t| self.embed(t)).collect()
    }

    /// Get the embedding dimension.
    fn dimension(&self) -> usize;
}

/// Default dimension for the hashing embedder, matching the ONNX model.
pub const DEFAULT_HASHING_DIM: usize = 384;

/// Bag-of-tokens embedder using FNV-1a feature hashing.
///
/// Each token is hashed to a dimension and counted; the vector is then
/// L2-normalized. Texts sharing tokens score high under cosine similarity
/// and identical texts score 1.0, which is all the matcher contract needs.
/// Used in tests and in builds without the `onnx` feature.
#[derive(Debug, Clone)]
pub struct HashingEmbedder {
    dimension: usize,
}

impl HashingEmbedder {
    pub fn new(dimension: usize) -> Self {
        Self { dimension }
    }

    fn tokenize(text: &str) -> Vec<String> {
        text.to_lowercase()
            .split(|c: char| !c.is_alphanumeric())
            .filter(|t| !t.is_empty())
            .map(str::to_string)
            .collect()
    }

    /// Hash a token to a dimension index using FNV-1a.
    fn hash_token(&self, token: &str) -> usize {
        let mut hash: u64 = 0xcbf2_9ce4_8422_2325;
        for byte in token.bytes() {
            hash ^= u64::from(byte);
            hash = hash.wrapping_mul(0x0100_0000_01b3);
        }
        (hash as usize) % self.dimension
    }
}

impl Default for HashingEmbedder {
    fn default() -> Self {
        Self::new(DEFAULT_HASHING_DIM)
    }
}

impl EmbedderBackend for HashingEmbedder {
    fn embed(&self, text: &str) -> Result<Array1<f32>> {
        let mut vector = Array1::<f32>::zeros(self.dimension);
        for token in Self::tokenize(text) {
            vector[self.hash_token(&token)] += 1.0;
        }
        let norm = vector.dot(&vector).sqrt();
        if norm > 0.0 {
            vector /= norm;
        }
        Ok(vector)
    }

    fn dimension(&self) -> usize {
        self.dimension
    }
}
