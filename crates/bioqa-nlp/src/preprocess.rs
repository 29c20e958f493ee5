//! Query preprocessing before embedding.

use crate::stopwords::is_stop_word;

/// Normalize free text for the embedding encoder.
///
/// Lowercases, splits on non-alphanumeric boundaries, drops stop words,
/// and rejoins with single spaces. Pure and idempotent; only the query is
/// preprocessed — sentiment and entity extraction see the raw input.
pub fn preprocess(text: &str) -> String {
    text.to_lowercase()
        .split(|c: char| !c.is_alphanumeric())
        .filter(|token| !token.is_empty() && !is_stop_word(token))
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lowercases_and_drops_stop_words() {
        assert_eq!(preprocess("What is your full name?"), "full name");
    }

    #[test]
    fn test_strips_punctuation() {
        assert_eq!(
            preprocess("Tell me about machine-learning, please!"),
            "tell machine learning please"
        );
    }

    #[test]
    fn test_contractions_collapse_to_stop_words() {
        // "don't" splits into "don" and "t", both stop words.
        assert_eq!(preprocess("Don't you know?"), "know");
    }

    #[test]
    fn test_idempotent() {
        let inputs = [
            "What is your full name?",
            "Where did you complete your undergraduate degree???",
            "",
            "already clean tokens",
        ];
        for input in inputs {
            let once = preprocess(input);
            assert_eq!(preprocess(&once), once, "not idempotent for {input:?}");
        }
    }

    #[test]
    fn test_all_stop_words_yields_empty() {
        assert_eq!(preprocess("is it the and of a"), "");
    }
}
