//! BioQA Chat — the request pipeline over the corpus and the encoder.
//!
//! `ChatEngine` is the immutable per-process context: corpus store,
//! precomputed question embeddings, encoder handle, greeting table, and
//! the fallback picker. One `respond` call runs the whole sequential
//! pipeline for one query.

pub mod engine;
pub mod fallback;
pub mod matcher;
pub mod types;

pub use engine::ChatEngine;
pub use fallback::{FallbackPicker, FALLBACK_RESPONSES};
pub use matcher::{best_match, cosine_similarity, MatchResult, MATCH_THRESHOLD};
pub use types::ChatResponse;
