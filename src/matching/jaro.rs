use rapidfuzz::distance::jaro_winkler;

use crate::matching::Scorer;

/// Jaro-Winkler scorer.
///
/// Alternative operating point for callers matching short single-token
/// answers where prefix typos dominate. Not order-insensitive, so it is not
/// the default for free-text survey answers.
pub struct JaroWinklerScorer;

impl JaroWinklerScorer {
    pub fn new() -> Self {
        Self
    }
}

impl Default for JaroWinklerScorer {
    fn default() -> Self {
        Self::new()
    }
}

impl Scorer for JaroWinklerScorer {
    fn score(&self, query: &str, candidate: &str) -> f64 {
        // Jaro-Winkler similarity (0.0 - 1.0), converted to percentage
        jaro_winkler::normalized_similarity(query.chars(), candidate.chars()) * 100.0
    }

    fn name(&self) -> &str {
        "jaro_winkler"
    }
}
