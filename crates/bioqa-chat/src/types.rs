//! Response types.

use bioqa_nlp::Sentiment;
use serde::Serialize;

/// The externally observed output of one dispatcher call.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChatResponse {
    pub response: String,
    pub sentiment: Sentiment,
}
