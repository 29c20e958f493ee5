//! BioQA NLP — the lightweight text analysis stages of the pipeline.
//!
//! Preprocessing feeds the embedding encoder; sentiment and entity
//! extraction run over the raw input text; the greeting responder is the
//! short-circuit in front of everything else.

pub mod entities;
pub mod greeting;
pub mod preprocess;
pub mod sentiment;
pub mod stopwords;

pub use entities::{extract_entities, Entity, EntityLabel};
pub use greeting::GreetingResponder;
pub use preprocess::preprocess;
pub use sentiment::{polarity, score_sentiment, Sentiment};
