//! Cosine-similarity nearest-neighbor matching over stored questions.

use ndarray::Array1;

/// Similarity threshold for a confident match. A score must be strictly
/// greater than this to count as a hit; exactly 0.3 is "no match".
pub const MATCH_THRESHOLD: f32 = 0.3;

/// The argmax over candidates by cosine similarity.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MatchResult {
    /// Index of the best candidate in the order given.
    pub index: usize,
    /// Cosine similarity in [-1, 1].
    pub score: f32,
}

/// Cosine similarity between two vectors. Zero-norm vectors score 0.
pub fn cosine_similarity(a: &Array1<f32>, b: &Array1<f32>) -> f32 {
    let norm_a = a.dot(a).sqrt();
    let norm_b = b.dot(b).sqrt();
    if norm_a == 0.0 || norm_b == 0.0 {
        return 0.0;
    }
    a.dot(b) / (norm_a * norm_b)
}

/// Find the candidate most similar to the query.
///
/// Ties break to the first occurrence in candidate order (the scan only
/// replaces the best on a strictly greater score). Returns `None` for an
/// empty candidate list. The caller decides whether the score clears
/// [`MATCH_THRESHOLD`].
pub fn best_match(query: &Array1<f32>, candidates: &[Array1<f32>]) -> Option<MatchResult> {
    let mut best: Option<MatchResult> = None;
    for (index, candidate) in candidates.iter().enumerate() {
        let score = cosine_similarity(query, candidate);
        if best.map_or(true, |b| score > b.score) {
            best = Some(MatchResult { index, score });
        }
    }
    best
}

/// Whether a match score clears the threshold (strict greater-than).
pub fn clears_threshold(score: f32, threshold: f32) -> bool {
    score > threshold
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;

    #[test]
    fn test_cosine_identical() {
        let v = array![1.0, 2.0, 3.0];
        assert!((cosine_similarity(&v, &v) - 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_cosine_orthogonal() {
        let a = array![1.0, 0.0];
        let b = array![0.0, 1.0];
        assert_eq!(cosine_similarity(&a, &b), 0.0);
    }

    #[test]
    fn test_cosine_opposite() {
        let a = array![1.0, 0.0];
        let b = array![-1.0, 0.0];
        assert!((cosine_similarity(&a, &b) + 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_zero_vector_scores_zero() {
        let a = array![0.0, 0.0];
        let b = array![1.0, 1.0];
        assert_eq!(cosine_similarity(&a, &b), 0.0);
    }

    #[test]
    fn test_best_match_argmax() {
        let query = array![1.0, 0.0];
        let candidates = vec![
            array![0.0, 1.0],
            array![1.0, 0.1],
            array![1.0, 1.0],
        ];
        let m = best_match(&query, &candidates).unwrap();
        assert_eq!(m.index, 1);
    }

    #[test]
    fn test_tie_breaks_to_first() {
        let query = array![1.0, 0.0];
        let same = array![2.0, 0.0];
        let candidates = vec![same.clone(), same];
        let m = best_match(&query, &candidates).unwrap();
        assert_eq!(m.index, 0);
    }

    #[test]
    fn test_empty_candidates() {
        let query = array![1.0, 0.0];
        assert!(best_match(&query, &[]).is_none());
    }

    #[test]
    fn test_threshold_is_strict() {
        assert!(!clears_threshold(MATCH_THRESHOLD, MATCH_THRESHOLD));
        assert!(!clears_threshold(0.29, MATCH_THRESHOLD));
        assert!(clears_threshold(0.300001, MATCH_THRESHOLD));
    }
}
