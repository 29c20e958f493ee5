//! Corpus loader — splits a numbered-question document into Q/A pairs.

use once_cell::sync::Lazy;
use regex::Regex;
use tracing::debug;

/// A line starting with `<digits>.` opens a new question.
static NUMBERED_LINE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\d+\.").unwrap());

/// One stored question with its canned answer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QaPair {
    pub question: String,
    pub answer: String,
}

/// Insertion-ordered store of question/answer pairs.
///
/// Built once from the corpus document and immutable afterwards. Backed by
/// a `Vec` rather than a map so that corpus order is explicit: iteration
/// order is first-seen order and duplicate question lines keep their first
/// occurrence.
#[derive(Debug, Clone, Default)]
pub struct QaStore {
    pairs: Vec<QaPair>,
}

impl QaStore {
    /// Parse a document into a store.
    ///
    /// A numbered line becomes the question (trimmed); all following
    /// unnumbered, non-blank lines are joined with single spaces to form
    /// the answer. The last pending pair is flushed at end of input. A
    /// pair is only kept when both question and answer are non-empty, so
    /// a document with no numbered lines yields an empty store.
    pub fn parse(text: &str) -> Self {
        let mut pairs: Vec<QaPair> = Vec::new();
        let mut question: Option<String> = None;
        let mut answer_parts: Vec<&str> = Vec::new();

        for line in text.lines() {
            if NUMBERED_LINE.is_match(line) {
                flush_pair(&mut pairs, question.take(), &answer_parts);
                answer_parts.clear();
                question = Some(line.trim().to_string());
            } else {
                let body = line.trim();
                if !body.is_empty() {
                    answer_parts.push(body);
                }
            }
        }
        flush_pair(&mut pairs, question.take(), &answer_parts);

        debug!("Parsed corpus: {} question/answer pairs", pairs.len());
        Self { pairs }
    }

    /// Parse the embedded reference biography document.
    pub fn reference() -> Self {
        Self::parse(crate::document::BIO_DOCUMENT)
    }

    /// Number of stored pairs.
    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    /// Whether the store holds no pairs.
    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    /// All pairs in corpus order.
    pub fn pairs(&self) -> &[QaPair] {
        &self.pairs
    }

    /// Question strings in corpus order.
    pub fn questions(&self) -> impl Iterator<Item = &str> {
        self.pairs.iter().map(|p| p.question.as_str())
    }

    /// Look up the answer for an exact question string.
    pub fn answer_for(&self, question: &str) -> Option<&str> {
        self.pairs
            .iter()
            .find(|p| p.question == question)
            .map(|p| p.answer.as_str())
    }
}

/// Push a completed pair, keeping the first occurrence of a question.
fn flush_pair(pairs: &mut Vec<QaPair>, question: Option<String>, answer_parts: &[&str]) {
    let Some(question) = question else {
        return;
    };
    if question.is_empty() || answer_parts.is_empty() {
        return;
    }
    if pairs.iter().any(|p| p.question == question) {
        return;
    }
    pairs.push(QaPair {
        question,
        answer: answer_parts.join(" "),
    });
}
