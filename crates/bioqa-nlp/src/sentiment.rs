//! Lexicon-based sentiment scoring.
//!
//! Sums word polarities over the raw input with simple negation flipping.
//! Only the three-way bucketing (positive / negative / neutral) is part of
//! the pipeline contract; the polarity estimate itself is heuristic.

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};
use std::fmt;

/// Three-way sentiment bucket attached to every response.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sentiment {
    Positive,
    Negative,
    Neutral,
}

impl Sentiment {
    pub fn as_str(&self) -> &'static str {
        match self {
            Sentiment::Positive => "positive",
            Sentiment::Negative => "negative",
            Sentiment::Neutral => "neutral",
        }
    }
}

impl fmt::Display for Sentiment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// Word polarities in [-1, 1].
static LEXICON: Lazy<HashMap<&'static str, f32>> = Lazy::new(|| {
    let entries: &[(&str, f32)] = &[
        // Positive
        ("good", 0.7),
        ("great", 0.8),
        ("excellent", 1.0),
        ("amazing", 0.9),
        ("wonderful", 0.9),
        ("fantastic", 0.9),
        ("awesome", 0.9),
        ("love", 0.8),
        ("like", 0.4),
        ("enjoy", 0.6),
        ("happy", 0.8),
        ("glad", 0.6),
        ("best", 0.9),
        ("better", 0.5),
        ("impressive", 0.7),
        ("proud", 0.6),
        ("passion", 0.5),
        ("passionate", 0.6),
        ("excited", 0.7),
        ("exciting", 0.6),
        ("interesting", 0.5),
        ("helpful", 0.5),
        ("thanks", 0.5),
        ("thank", 0.5),
        ("perfect", 0.9),
        ("brilliant", 0.9),
        ("nice", 0.6),
        ("cool", 0.4),
        ("strong", 0.4),
        ("success", 0.6),
        ("successful", 0.6),
        // Negative
        ("bad", -0.7),
        ("terrible", -1.0),
        ("awful", -1.0),
        ("horrible", -1.0),
        ("hate", -0.8),
        ("dislike", -0.6),
        ("sad", -0.6),
        ("angry", -0.7),
        ("annoying", -0.6),
        ("annoyed", -0.6),
        ("disappointed", -0.7),
        ("disappointing", -0.7),
        ("worst", -1.0),
        ("worse", -0.6),
        ("poor", -0.5),
        ("useless", -0.8),
        ("boring", -0.5),
        ("wrong", -0.5),
        ("broken", -0.5),
        ("fail", -0.6),
        ("failed", -0.6),
        ("failure", -0.6),
        ("problem", -0.3),
        ("weak", -0.4),
        ("confusing", -0.4),
        ("stupid", -0.8),
        ("ugly", -0.6),
    ];
    entries.iter().copied().collect()
});

// Words that flip the polarity of the following sentiment word.
static NEGATORS: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    ["not", "no", "never", "neither", "nor", "cannot", "hardly", "barely"]
        .into_iter()
        .collect()
});

/// Estimate a polarity for the text. Positive values lean positive.
pub fn polarity(text: &str) -> f32 {
    let tokens: Vec<String> = text
        .to_lowercase()
        .split(|c: char| !c.is_alphanumeric())
        .filter(|t| !t.is_empty())
        .map(str::to_string)
        .collect();

    let mut score = 0.0;
    for (i, token) in tokens.iter().enumerate() {
        if let Some(&weight) = LEXICON.get(token.as_str()) {
            // A negator within the two preceding tokens flips the sign
            // ("not good", "not very good").
            let negated = tokens[i.saturating_sub(2)..i]
                .iter()
                .any(|t| NEGATORS.contains(t.as_str()));
            score += if negated { -weight } else { weight };
        }
    }
    score
}

/// Bucket a polarity estimate: > 0 positive, < 0 negative, else neutral.
pub fn score_sentiment(text: &str) -> Sentiment {
    let p = polarity(text);
    if p > 0.0 {
        Sentiment::Positive
    } else if p < 0.0 {
        Sentiment::Negative
    } else {
        Sentiment::Neutral
    }
}
