//! Engine configuration.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Default embedding dimension (all-MiniLM-L6-v2).
pub const DEFAULT_EMBEDDING_DIM: usize = 384;

/// Default cosine-similarity threshold for a confident match.
pub const DEFAULT_MATCH_THRESHOLD: f32 = 0.3;

/// Top-level engine configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Directory containing `model.onnx` and `tokenizer.json`.
    pub model_dir: PathBuf,
    /// Embedding dimension (384 for all-MiniLM-L6-v2).
    pub embedding_dim: usize,
    /// Similarity threshold; a match must score strictly above it.
    pub match_threshold: f32,
    /// Optional seed for the fallback response picker (deterministic tests).
    pub fallback_seed: Option<u64>,
}

impl EngineConfig {
    /// Create configuration from environment and defaults.
    ///
    /// Honors `BIOQA_MODEL_DIR`, `BIOQA_MATCH_THRESHOLD` and
    /// `BIOQA_FALLBACK_SEED` when set.
    pub fn from_env() -> Self {
        let model_dir = std::env::var("BIOQA_MODEL_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from("models/all-MiniLM-L6-v2"));

        let match_threshold = std::env::var("BIOQA_MATCH_THRESHOLD")
            .ok()
            .and_then(|t| t.parse().ok())
            .unwrap_or(DEFAULT_MATCH_THRESHOLD);

        let fallback_seed = std::env::var("BIOQA_FALLBACK_SEED")
            .ok()
            .and_then(|s| s.parse().ok());

        Self {
            model_dir,
            embedding_dim: DEFAULT_EMBEDDING_DIM,
            match_threshold,
            fallback_seed,
        }
    }
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            model_dir: PathBuf::from("models/all-MiniLM-L6-v2"),
            embedding_dim: DEFAULT_EMBEDDING_DIM,
            match_threshold: DEFAULT_MATCH_THRESHOLD,
            fallback_seed: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = EngineConfig::default();
        assert_eq!(config.embedding_dim, 384);
        assert_eq!(config.match_threshold, 0.3);
        assert!(config.fallback_seed.is_none());
    }
}
