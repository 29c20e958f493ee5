//! The chat dispatcher.

use std::sync::Arc;

use bioqa_core::{EngineConfig, Result};
use bioqa_corpus::QaStore;
use bioqa_infer::EmbedderBackend;
use bioqa_nlp::{extract_entities, preprocess, score_sentiment, GreetingResponder, Sentiment};
use ndarray::Array1;
use tracing::{debug, info, warn};

use crate::fallback::FallbackPicker;
use crate::matcher::{best_match, clears_threshold};
use crate::types::ChatResponse;

/// Immutable per-process chat context.
///
/// Built once at startup: the corpus store, one embedding per stored
/// question (computed over the raw question line — only queries are
/// preprocessed), the encoder handle, the greeting table, and the
/// fallback picker. Safe to share across threads behind an `Arc`; no
/// component writes shared state after construction.
pub struct ChatEngine {
    store: QaStore,
    question_embeddings: Vec<Array1<f32>>,
    embedder: Arc<dyn EmbedderBackend>,
    greetings: GreetingResponder,
    fallback: FallbackPicker,
    match_threshold: f32,
}

impl ChatEngine {
    /// Build an engine over the embedded reference biography.
    pub fn new(embedder: Arc<dyn EmbedderBackend>, config: &EngineConfig) -> Result<Self> {
        Self::with_corpus(QaStore::reference(), embedder, config)
    }

    /// Build an engine over an explicit corpus store.
    ///
    /// Embeds every stored question up front; an encoder failure here is
    /// fatal, mirroring the resource-load taxonomy. An empty store is
    /// tolerated — every query will then fall through to a fallback.
    pub fn with_corpus(
        store: QaStore,
        embedder: Arc<dyn EmbedderBackend>,
        config: &EngineConfig,
    ) -> Result<Self> {
        if embedder.dimension() != config.embedding_dim {
            warn!(
                "Embedder dimension {} differs from configured {}",
                embedder.dimension(),
                config.embedding_dim
            );
        }

        let question_embeddings = store
            .questions()
            .map(|q| embedder.embed(q))
            .collect::<Result<Vec<_>>>()?;

        let fallback = match config.fallback_seed {
            Some(seed) => FallbackPicker::seeded(seed),
            None => FallbackPicker::new(),
        };

        info!(
            "Chat engine ready: {} questions embedded (dim={})",
            question_embeddings.len(),
            embedder.dimension()
        );

        Ok(Self {
            store,
            question_embeddings,
            embedder,
            greetings: GreetingResponder::new(),
            fallback,
            match_threshold: config.match_threshold,
        })
    }

    /// The question/answer store backing this engine.
    pub fn store(&self) -> &QaStore {
        &self.store
    }

    /// Answer one query.
    ///
    /// Stages run in fixed order with no branching back: greeting
    /// short-circuit, sentiment, entity extraction (inert), preprocess +
    /// embed + match, threshold, fallback. An encoder failure propagates
    /// as an error and is never coerced into a fallback response.
    pub fn respond(&self, input: &str) -> Result<ChatResponse> {
        if let Some(greeting) = self.greetings.respond(input) {
            debug!("Greeting short-circuit");
            // Greeting sentiment is fixed, never computed from the input.
            return Ok(ChatResponse {
                response: greeting,
                sentiment: Sentiment::Positive,
            });
        }

        let sentiment = score_sentiment(input);

        // Computed for observability only; does not affect the response.
        let entities = extract_entities(input);
        if !entities.is_empty() {
            debug!("Entities: {:?}", entities);
        }

        let cleaned = preprocess(input);
        let query_embedding = self.embedder.embed(&cleaned)?;

        let response = match best_match(&query_embedding, &self.question_embeddings) {
            Some(m) if clears_threshold(m.score, self.match_threshold) => {
                let pair = &self.store.pairs()[m.index];
                debug!("Matched {:?} (score {:.4})", pair.question, m.score);
                pair.answer.clone()
            }
            best => {
                if let Some(m) = best {
                    debug!("No confident match (best score {:.4})", m.score);
                }
                self.fallback.pick().to_string()
            }
        };

        Ok(ChatResponse {
            response,
            sentiment,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bioqa_infer::HashingEmbedder;

    fn test_engine() -> ChatEngine {
        let config = EngineConfig {
            fallback_seed: Some(42),
            ..EngineConfig::default()
        };
        ChatEngine::new(Arc::new(HashingEmbedder::default()), &config).unwrap()
    }

    #[test]
    fn test_greeting_bypasses_sentiment() {
        let engine = test_engine();
        // "terrible" would score negative, but the greeting path forces
        // positive and skips the scorer entirely.
        let r = engine.respond("Hi, this is terrible").unwrap();
        assert_eq!(r.sentiment, Sentiment::Positive);
        assert!(r.response.starts_with("Hello!"));
    }

    #[test]
    fn test_empty_store_always_falls_back() {
        let engine = ChatEngine::with_corpus(
            QaStore::parse("no numbered lines here"),
            Arc::new(HashingEmbedder::default()),
            &EngineConfig {
                fallback_seed: Some(1),
                ..EngineConfig::default()
            },
        )
        .unwrap();
        let r = engine.respond("What is your full name?").unwrap();
        assert!(crate::fallback::FALLBACK_RESPONSES.contains(&r.response.as_str()));
    }

    #[test]
    fn test_sentiment_computed_from_raw_input() {
        let engine = test_engine();
        let r = engine.respond("xqzt blorp wibble").unwrap();
        assert_eq!(r.sentiment, Sentiment::Neutral);

        let r = engine.respond("I love asking you wonderful questions about nothing zzqq").unwrap();
        assert_eq!(r.sentiment, Sentiment::Positive);
    }
}
