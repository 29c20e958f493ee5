//! BioQA Infer — sentence embedding backends and the query cache.
//!
//! `EmbedderBackend` is the "string → vector" capability the matcher
//! needs. With the `onnx` feature and model files present, `OnnxEmbedder`
//! runs all-MiniLM-L6-v2 for 384-dim embeddings; `HashingEmbedder` gives
//! the same contract deterministically without any model files and backs
//! the test suite. A missing model is fatal at load time — the engine
//! must not serve requests without its encoder.

pub mod cache;
pub mod embedder;
pub mod onnx_embedder;

pub use cache::EmbeddingCache;
pub use embedder::{EmbedderBackend, HashingEmbedder};

#[cfg(feature = "onnx")]
pub use onnx_embedder::OnnxEmbedder;
